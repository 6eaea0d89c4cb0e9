//! Per-cell search state.

use heatpath_core::{Coord, Direction};

use crate::Router;

/// Lifecycle of a node during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    /// Not discovered yet.
    #[default]
    Unvisited,
    /// Discovered; its cost may still improve.
    Open,
    /// Finalized; never examined again.
    Closed,
}

/// Search state of one passable grid cell.
///
/// Nodes live in the [`Router`] arena and refer to their predecessor by
/// arena index, so the predecessor chain is a read-only walk over indices.
#[derive(Debug, Clone)]
pub struct RoutePoint {
    coord: Coord,
    terrain_cost: u32,
    cost_from_start: u32,
    heuristic_to_goal: u32,
    predecessor: Option<usize>,
    state: NodeState,
}

/// Axis of a straight run that has reached the run limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Row,
    Column,
}

impl RoutePoint {
    pub(crate) fn new(coord: Coord, terrain_cost: u32) -> Self {
        Self {
            coord,
            terrain_cost,
            cost_from_start: terrain_cost,
            heuristic_to_goal: 0,
            predecessor: None,
            state: NodeState::Unvisited,
        }
    }

    /// Restore the construction-time state.
    pub(crate) fn reset(&mut self) {
        self.cost_from_start = self.terrain_cost;
        self.heuristic_to_goal = 0;
        self.predecessor = None;
        self.state = NodeState::Unvisited;
    }

    /// Grid position of this node.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Fixed cost of entering this cell.
    #[inline]
    pub fn terrain_cost(&self) -> u32 {
        self.terrain_cost
    }

    /// Best known cost from the start (g).
    #[inline]
    pub fn cost_from_start(&self) -> u32 {
        self.cost_from_start
    }

    /// Heuristic estimate to the goal (h).
    #[inline]
    pub fn heuristic_to_goal(&self) -> u32 {
        self.heuristic_to_goal
    }

    /// `g + h`, the priority-queue key.
    #[inline]
    pub fn total_estimated_cost(&self) -> u32 {
        self.cost_from_start.saturating_add(self.heuristic_to_goal)
    }

    /// Arena index of the node this one was reached from.
    #[inline]
    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> NodeState {
        self.state
    }

    #[inline]
    pub(crate) fn set_state(&mut self, state: NodeState) {
        self.state = state;
    }

    /// Seed this node as the search start.
    pub(crate) fn seed(&mut self, heuristic_to_goal: u32) {
        self.cost_from_start = self.terrain_cost;
        self.heuristic_to_goal = heuristic_to_goal;
        self.predecessor = None;
        self.state = NodeState::Open;
    }

    /// Record a cheaper route to this node.
    ///
    /// Applies when the node is still unvisited, or when `candidate` is
    /// strictly lower than the current cost and the node is not closed.
    /// Returns whether anything changed.
    pub fn update_if_better(&mut self, candidate: u32, via: usize, heuristic_to_goal: u32) -> bool {
        let better = match self.state {
            NodeState::Unvisited => true,
            NodeState::Open => candidate < self.cost_from_start,
            NodeState::Closed => false,
        };
        if better {
            self.cost_from_start = candidate;
            self.heuristic_to_goal = heuristic_to_goal;
            self.predecessor = Some(via);
        }
        better
    }

    /// Coordinates from the start to this node, following predecessors.
    pub fn path(&self, router: &Router) -> Vec<Coord> {
        let mut path = vec![self.coord];
        let mut cur = self.predecessor;
        // A chain can never be longer than the arena.
        let mut budget = router.len();
        while let Some(node) = cur.and_then(|i| router.get(i)) {
            if budget == 0 {
                break;
            }
            budget -= 1;
            path.push(node.coord);
            cur = node.predecessor;
        }
        path.reverse();
        path
    }

    /// Append the coordinates this node may move to into `buf`.
    ///
    /// A move is legal when the target is inside the grid and passable, is
    /// not the predecessor (no reversal), and does not extend a straight
    /// run that already has `run_limit` steps. `None` disables the run
    /// check; `Some(0)` forbids every move. Closed neighbors are included.
    /// The caller clears `buf`.
    pub fn legal_moves(&self, router: &Router, run_limit: Option<usize>, buf: &mut Vec<Coord>) {
        let blocked = match run_limit {
            Some(0) => return,
            Some(limit) => self.straight_run(router, limit),
            None => None,
        };
        let back = self.predecessor.and_then(|i| router.get(i)).map(|n| n.coord);

        for dir in Direction::ALL {
            let next = self.coord.step(dir);
            if router.node(next).is_none() || back == Some(next) {
                continue;
            }
            let axis = if dir.is_vertical() { Axis::Column } else { Axis::Row };
            if blocked == Some(axis) {
                continue;
            }
            buf.push(next);
        }
    }

    /// The axis of the trailing `limit` steps if they are all along one.
    fn straight_run(&self, router: &Router, limit: usize) -> Option<Axis> {
        let mut same_row = true;
        let mut same_col = true;
        let mut cur = self;
        for _ in 0..limit {
            let prev = router.get(cur.predecessor?)?;
            same_row &= prev.coord.row == self.coord.row;
            same_col &= prev.coord.col == self.coord.col;
            if !same_row && !same_col {
                return None;
            }
            cur = prev;
        }
        if same_row {
            Some(Axis::Row)
        } else {
            Some(Axis::Column)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatpath_core::WeightGrid;

    /// Chain the given coordinates as a predecessor path inside `router`.
    fn chain(router: &mut Router, coords: &[Coord]) {
        let mut prev: Option<usize> = None;
        for &c in coords {
            let i = router.index(c).unwrap();
            let node = router.get_mut(i).unwrap();
            match prev {
                None => node.seed(0),
                Some(p) => {
                    node.update_if_better(0, p, 0);
                    node.set_state(NodeState::Open);
                }
            }
            prev = Some(i);
        }
    }

    fn moves(router: &Router, at: Coord, limit: Option<usize>) -> Vec<Coord> {
        let mut buf = Vec::new();
        router.node(at).unwrap().legal_moves(router, limit, &mut buf);
        buf
    }

    #[test]
    fn corner_has_two_moves() {
        let router = Router::new(&WeightGrid::filled(3, 3, 1));
        let m = moves(&router, Coord::new(0, 0), None);
        assert_eq!(m, vec![Coord::new(0, 1), Coord::new(1, 0)]);
    }

    #[test]
    fn no_reversal() {
        let mut router = Router::new(&WeightGrid::filled(3, 3, 1));
        chain(&mut router, &[Coord::new(1, 0), Coord::new(1, 1)]);
        let m = moves(&router, Coord::new(1, 1), None);
        assert!(!m.contains(&Coord::new(1, 0)));
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn closed_neighbors_are_listed() {
        let mut router = Router::new(&WeightGrid::filled(2, 2, 1));
        let i = router.index(Coord::new(0, 1)).unwrap();
        router.get_mut(i).unwrap().set_state(NodeState::Closed);
        let m = moves(&router, Coord::new(0, 0), None);
        assert_eq!(m, vec![Coord::new(0, 1), Coord::new(1, 0)]);
    }

    #[test]
    fn run_limit_blocks_continuation() {
        let mut router = Router::new(&WeightGrid::filled(3, 5, 1));
        let run = [
            Coord::new(1, 0),
            Coord::new(1, 1),
            Coord::new(1, 2),
            Coord::new(1, 3),
        ];
        chain(&mut router, &run);
        // Three steps east so far.
        let m = moves(&router, Coord::new(1, 3), Some(3));
        assert_eq!(m, vec![Coord::new(0, 3), Coord::new(2, 3)]);
        // A limit of four still allows one more.
        let m = moves(&router, Coord::new(1, 3), Some(4));
        assert!(m.contains(&Coord::new(1, 4)));
    }

    #[test]
    fn turn_resets_run() {
        let mut router = Router::new(&WeightGrid::filled(4, 4, 1));
        chain(
            &mut router,
            &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
        );
        let m = moves(&router, Coord::new(2, 1), Some(3));
        assert!(m.contains(&Coord::new(3, 1)));
    }

    #[test]
    fn walls_and_edges_filtered() {
        let grid = WeightGrid::parse("1#\n11").unwrap();
        let router = Router::new(&grid);
        assert!(router.node(Coord::new(0, 1)).is_none());
        let m = moves(&router, Coord::new(0, 0), None);
        assert_eq!(m, vec![Coord::new(1, 0)]);
    }

    #[test]
    fn zero_limit_forbids_everything() {
        let router = Router::new(&WeightGrid::filled(3, 3, 1));
        assert!(moves(&router, Coord::new(1, 1), Some(0)).is_empty());
    }

    #[test]
    fn update_if_better_rules() {
        let mut node = RoutePoint::new(Coord::new(0, 0), 5);
        assert_eq!(node.cost_from_start(), 5);
        // First discovery always applies, even if more expensive.
        assert!(node.update_if_better(9, 1, 2));
        node.set_state(NodeState::Open);
        assert_eq!(node.total_estimated_cost(), 11);
        assert!(!node.update_if_better(9, 2, 2));
        assert!(node.update_if_better(7, 3, 2));
        assert_eq!(node.predecessor(), Some(3));
        node.set_state(NodeState::Closed);
        assert!(!node.update_if_better(1, 4, 0));
        assert_eq!(node.cost_from_start(), 7);
    }

    #[test]
    fn path_walks_predecessors() {
        let mut router = Router::new(&WeightGrid::filled(2, 2, 1));
        let coords = [Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)];
        chain(&mut router, &coords);
        let path = router.node(Coord::new(1, 1)).unwrap().path(&router);
        assert_eq!(path, coords.to_vec());
        let alone = router.node(Coord::new(1, 0)).unwrap().path(&router);
        assert_eq!(alone, vec![Coord::new(1, 0)]);
    }
}
