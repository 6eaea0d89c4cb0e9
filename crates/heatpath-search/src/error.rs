use std::fmt;

use heatpath_core::{Bounds, Coord};

/// Conditions that stop a search without an answer.
///
/// An exhausted open set is not an error; see
/// [`SearchOutcome::NoPath`](crate::SearchOutcome::NoPath).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start cell lies outside the grid.
    StartOutOfBounds { start: Coord, bounds: Bounds },
    /// The goal cell lies outside the grid.
    GoalOutOfBounds { goal: Coord, bounds: Bounds },
    /// The start cell is a wall.
    StartImpassable(Coord),
    /// The goal cell is a wall.
    GoalImpassable(Coord),
    /// The expansion ceiling was hit. Usually a sign of a bug.
    IterationBudgetExceeded { limit: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds { start, bounds } => {
                write!(f, "start {start} is outside the {bounds} grid")
            }
            Self::GoalOutOfBounds { goal, bounds } => {
                write!(f, "goal {goal} is outside the {bounds} grid")
            }
            Self::StartImpassable(c) => write!(f, "start {c} is impassable"),
            Self::GoalImpassable(c) => write!(f, "goal {c} is impassable"),
            Self::IterationBudgetExceeded { limit } => {
                write!(f, "search exceeded its budget of {limit} iterations")
            }
        }
    }
}

impl std::error::Error for SearchError {}
