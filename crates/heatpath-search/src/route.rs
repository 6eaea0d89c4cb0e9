use heatpath_core::{Coord, Delta, Direction};

/// A route found by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Cells from start to goal, both included.
    pub path: Vec<Coord>,
    /// Accumulated cost including the start cell's own terrain cost.
    pub total_cost: u32,
    /// Sum of the terrain costs of every cell after the start.
    pub heat_loss: u32,
    /// Nodes expanded before the goal was reached.
    pub expanded: usize,
}

impl Route {
    /// Number of unit steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Direction of each step, in order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.path.windows(2).filter_map(|w| {
            Delta::between(w[0], w[1])
                .and_then(Direction::try_from)
                .ok()
        })
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached.
    Found(Route),
    /// The open set ran dry before reaching the goal.
    NoPath { expanded: usize },
}

impl SearchOutcome {
    /// The route, if one was found.
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Found(r) => Some(r),
            Self::NoPath { .. } => None,
        }
    }

    /// Consume the outcome, returning the route if one was found.
    pub fn into_route(self) -> Option<Route> {
        match self {
            Self::Found(r) => Some(r),
            Self::NoPath { .. } => None,
        }
    }

    /// Whether the goal was reached.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Nodes expanded during the search.
    pub fn expanded(&self) -> usize {
        match self {
            Self::Found(r) => r.expanded,
            Self::NoPath { expanded } => *expanded,
        }
    }
}
