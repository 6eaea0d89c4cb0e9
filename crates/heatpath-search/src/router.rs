use heatpath_core::{Bounds, Coord};

use crate::node::{NodeState, RoutePoint};
use crate::traits::Terrain;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Node arena for one grid, and the entry point for searches.
///
/// Every passable cell owns one [`RoutePoint`], stored at its row-major
/// cell index. Impassable cells have no node. The arena keeps its size for
/// its whole lifetime; each search resets all nodes first, so no state
/// carries over between searches.
pub struct Router {
    pub(crate) bounds: Bounds,
    pub(crate) nodes: Vec<Option<RoutePoint>>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Coord>,
}

impl Router {
    /// Build one node per passable cell of `terrain`.
    pub fn new<T: Terrain + ?Sized>(terrain: &T) -> Self {
        let bounds = terrain.bounds();
        let nodes = bounds
            .iter()
            .map(|c| terrain.cost(c).map(|w| RoutePoint::new(c, w)))
            .collect();
        Self {
            bounds,
            nodes,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The grid extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of cells (passable or not).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node at `c`. `None` if out of bounds or impassable.
    #[inline]
    pub fn node(&self, c: Coord) -> Option<&RoutePoint> {
        self.index(c).and_then(|i| self.get(i))
    }

    /// All passable nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &RoutePoint> + '_ {
        self.nodes.iter().flatten()
    }

    /// Nodes currently in `state`.
    pub fn nodes_in(&self, state: NodeState) -> impl Iterator<Item = &RoutePoint> + '_ {
        self.nodes().filter(move |n| n.state() == state)
    }

    /// Whether any passable cell costs nothing to enter.
    pub fn has_free_cells(&self) -> bool {
        self.nodes().any(|n| n.terrain_cost() == 0)
    }

    /// Coordinate of the node at arena index `idx`.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        self.bounds.coord(idx)
    }

    // -----------------------------------------------------------------------
    // Arena helpers
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn index(&self, c: Coord) -> Option<usize> {
        self.bounds.index(c)
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> Option<&RoutePoint> {
        self.nodes.get(idx).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut RoutePoint> {
        self.nodes.get_mut(idx).and_then(Option::as_mut)
    }

    /// Put every node back in its construction state.
    pub(crate) fn reset(&mut self) {
        for node in self.nodes.iter_mut().flatten() {
            node.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatpath_core::WeightGrid;

    #[test]
    fn arena_skips_walls() {
        let grid = WeightGrid::parse("12\n#4").unwrap();
        let router = Router::new(&grid);
        assert_eq!(router.len(), 4);
        assert_eq!(router.nodes().count(), 3);
        assert!(router.node(Coord::new(1, 0)).is_none());
        assert_eq!(router.node(Coord::new(1, 1)).unwrap().terrain_cost(), 4);
    }

    #[test]
    fn cost_defaults_to_terrain() {
        let grid = WeightGrid::parse("12\n34").unwrap();
        let router = Router::new(&grid);
        for node in router.nodes() {
            assert_eq!(node.cost_from_start(), node.terrain_cost());
            assert_eq!(node.state(), NodeState::Unvisited);
            assert_eq!(node.predecessor(), None);
        }
    }

    #[test]
    fn out_of_bounds_lookup_is_absent() {
        let router = Router::new(&WeightGrid::filled(2, 2, 1));
        assert!(router.node(Coord::new(-1, 0)).is_none());
        assert!(router.node(Coord::new(0, 2)).is_none());
        assert!(router.get(99).is_none());
    }

    #[test]
    fn reset_clears_search_state() {
        let mut router = Router::new(&WeightGrid::filled(1, 2, 3));
        let node = router.get_mut(1).unwrap();
        node.update_if_better(1, 0, 0);
        node.set_state(NodeState::Closed);
        router.reset();
        let node = router.node(Coord::new(0, 1)).unwrap();
        assert_eq!(node.state(), NodeState::Unvisited);
        assert_eq!(node.cost_from_start(), 3);
        assert_eq!(node.predecessor(), None);
    }
}
