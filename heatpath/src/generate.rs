//! Random grids for demos and tests.

use heatpath_core::{Coord, WeightGrid};
use rand::{Rng, RngExt};

/// A `rows` x `cols` grid of weights 1-9.
///
/// Each cell becomes a wall with probability `wall_chance`, except the
/// top-left and bottom-right corners, which are always passable.
pub fn random_grid(rng: &mut impl Rng, rows: i32, cols: i32, wall_chance: f64) -> WeightGrid {
    let mut grid = WeightGrid::filled(rows, cols, 1);
    for c in grid.bounds() {
        let wall = !is_reserved(&grid, c)
            && wall_chance > 0.0
            && rng.random_bool(wall_chance.min(1.0));
        let cost = if wall {
            None
        } else {
            Some(rng.random_range(1..=9u32))
        };
        grid.set(c, cost);
    }
    grid
}

/// Count of impassable cells, handy for logging.
pub fn wall_count(grid: &WeightGrid) -> usize {
    grid.bounds().iter().filter(|&c| !grid.is_passable(c)).count()
}

/// Whether `c` is one of the corners [`random_grid`] keeps open.
pub fn is_reserved(grid: &WeightGrid, c: Coord) -> bool {
    c == grid.bounds().first() || c == grid.bounds().last()
}
