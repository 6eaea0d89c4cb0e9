use heatpath_core::Coord;

/// Default ceiling on node expansions per search.
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Parameters of a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Start cell. `None` means the top-left cell.
    pub start: Option<Coord>,
    /// Goal cell. `None` means the bottom-right cell.
    pub goal: Option<Coord>,
    /// Maximum consecutive steps along one axis. `None` means unlimited.
    pub run_limit: Option<usize>,
    /// Expansions allowed before the search gives up with
    /// [`SearchError::IterationBudgetExceeded`](crate::SearchError::IterationBudgetExceeded).
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start: None,
            goal: None,
            run_limit: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SearchConfig {
    /// Set the start cell.
    pub fn with_start(mut self, start: Coord) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the goal cell.
    pub fn with_goal(mut self, goal: Coord) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Limit straight runs to `limit` steps.
    pub fn with_run_limit(mut self, limit: usize) -> Self {
        self.run_limit = Some(limit);
        self
    }

    /// Set the expansion ceiling.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }
}
