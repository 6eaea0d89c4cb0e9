use heatpath_core::Coord;

use crate::traits::Heuristic;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    a.manhattan(b)
}

/// The default heuristic: Manhattan distance to the goal.
///
/// Admissible as long as every passable cell costs at least 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Coord, goal: Coord) -> u32 {
        manhattan(from, goal)
    }
}

/// A zero heuristic, turning the search into uniform-cost (Dijkstra) order.
///
/// Use it for grids containing zero-cost cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Heuristic for Dijkstra {
    #[inline]
    fn estimate(&self, _from: Coord, _goal: Coord) -> u32 {
        0
    }
}
