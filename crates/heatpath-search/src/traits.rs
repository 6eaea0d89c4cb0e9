use heatpath_core::{Bounds, Coord, WeightGrid};

/// Source of per-cell terrain costs.
pub trait Terrain {
    /// Extent of the grid.
    fn bounds(&self) -> Bounds;

    /// Cost of entering `c`. `None` for impassable or out-of-bounds cells.
    fn cost(&self, c: Coord) -> Option<u32>;
}

/// Estimate of the remaining cost from a cell to the goal.
pub trait Heuristic {
    /// Must never overestimate the true remaining cost (admissible).
    fn estimate(&self, from: Coord, goal: Coord) -> u32;
}

impl Terrain for WeightGrid {
    #[inline]
    fn bounds(&self) -> Bounds {
        WeightGrid::bounds(self)
    }

    #[inline]
    fn cost(&self, c: Coord) -> Option<u32> {
        WeightGrid::cost(self, c)
    }
}
