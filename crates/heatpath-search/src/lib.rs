//! Constrained best-first route search on weighted grids.
//!
//! The engine finds the cheapest route between two cells of a 4-connected
//! grid where entering a cell costs its terrain weight. Moves may be
//! restricted by a *run limit*: the maximum number of consecutive steps
//! along one axis before a turn is required. Reversing in place is never
//! allowed.
//!
//! - [`Router`] owns one [`RoutePoint`] per passable cell and runs the
//!   search ([`Router::search`]).
//! - [`PriorityQueue`] orders the open set by `g + h`, ties first-in
//!   first-out.
//! - [`SearchConfig`] carries the start, goal, run limit and iteration
//!   ceiling.
//!
//! # Trait seams
//!
//! | Trait | Role |
//! |---|---|
//! | [`Terrain`] | per-cell costs consumed by [`Router::new`] |
//! | [`Heuristic`] | remaining-cost estimate ([`Manhattan`], [`Dijkstra`]) |

mod astar;
mod config;
mod distance;
mod error;
mod node;
mod pqueue;
mod route;
mod router;
mod traits;

pub use config::{DEFAULT_MAX_ITERATIONS, SearchConfig};
pub use distance::{Dijkstra, Manhattan, manhattan};
pub use error::SearchError;
pub use node::{NodeState, RoutePoint};
pub use pqueue::{Natural, PriorityQueue};
pub use route::{Route, SearchOutcome};
pub use router::Router;
pub use traits::{Heuristic, Terrain};
