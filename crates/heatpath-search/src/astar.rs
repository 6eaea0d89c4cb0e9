use heatpath_core::Coord;

use crate::config::SearchConfig;
use crate::distance::{Dijkstra, Manhattan};
use crate::error::SearchError;
use crate::node::NodeState;
use crate::pqueue::PriorityQueue;
use crate::route::{Route, SearchOutcome};
use crate::traits::Heuristic;
use crate::Router;

/// Open-set entry, ordered by `f` (lower is more urgent).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenEntry {
    idx: usize,
    f: u32,
}

fn lowest_f_first(a: &OpenEntry, b: &OpenEntry) -> std::cmp::Ordering {
    b.f.cmp(&a.f)
}

impl Router {
    /// Find the cheapest route under `config`.
    ///
    /// Estimates with Manhattan distance, unless some cell costs nothing to
    /// enter; Manhattan would overestimate there, so the search falls back
    /// to [`Dijkstra`].
    pub fn search(&mut self, config: &SearchConfig) -> Result<SearchOutcome, SearchError> {
        if self.has_free_cells() {
            log::debug!("zero-cost cells present, searching without distance estimate");
            self.search_with(config, &Dijkstra)
        } else {
            self.search_with(config, &Manhattan)
        }
    }

    /// Best-first search from `config.start` to `config.goal`.
    ///
    /// Nodes are expanded lowest `g + h` first, ties in discovery order.
    /// `config.max_iterations` bounds the number of expanded nodes; popping
    /// the goal does not count as an expansion.
    /// The run-limit check for a node uses the best path known to it when
    /// it is expanded. A neighbor whose cost improves while open is removed
    /// from the queue and re-inserted under its new key.
    pub fn search_with<H: Heuristic>(
        &mut self,
        config: &SearchConfig,
        heuristic: &H,
    ) -> Result<SearchOutcome, SearchError> {
        let (start_idx, goal) = self.endpoints(config)?;
        let goal_idx = self.bounds.index(goal).unwrap_or(usize::MAX);

        self.reset();

        let start = self.coord(start_idx);
        let mut open = PriorityQueue::with_urgency(lowest_f_first);
        if let Some(node) = self.get_mut(start_idx) {
            node.seed(heuristic.estimate(start, goal));
            open.push(OpenEntry {
                idx: start_idx,
                f: node.total_estimated_cost(),
            });
        }

        log::debug!(
            "search {} -> {} on {} grid, run limit {:?}",
            start,
            goal,
            self.bounds,
            config.run_limit
        );

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;
        let mut pushed = 1usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search Ok(false);
            };
            let ci = current.idx;
            if ci == goal_idx {
                break 'search Ok(true);
            }
            if expanded >= config.max_iterations {
                break 'search Err(SearchError::IterationBudgetExceeded {
                    limit: config.max_iterations,
                });
            }
            expanded += 1;

            let Some(node) = self.get_mut(ci) else {
                continue;
            };
            node.set_state(NodeState::Closed);
            let current_g = node.cost_from_start();

            nbuf.clear();
            if let Some(node) = self.get(ci) {
                node.legal_moves(self, config.run_limit, &mut nbuf);
            }
            log::trace!(
                "expand {} g={} moves={:?}",
                self.coord(ci),
                current_g,
                nbuf
            );

            for &nc in nbuf.iter() {
                let Some(ni) = self.index(nc) else {
                    continue;
                };
                let Some(n) = self.get_mut(ni) else {
                    continue;
                };
                let tentative = current_g.saturating_add(n.terrain_cost());
                let h = heuristic.estimate(nc, goal);

                match n.state() {
                    NodeState::Closed => {}
                    NodeState::Unvisited => {
                        n.update_if_better(tentative, ci, h);
                        n.set_state(NodeState::Open);
                        open.push(OpenEntry {
                            idx: ni,
                            f: n.total_estimated_cost(),
                        });
                        pushed += 1;
                    }
                    NodeState::Open => {
                        let stale = OpenEntry {
                            idx: ni,
                            f: n.total_estimated_cost(),
                        };
                        if n.update_if_better(tentative, ci, h) {
                            open.remove(&stale);
                            open.push(OpenEntry {
                                idx: ni,
                                f: n.total_estimated_cost(),
                            });
                            pushed += 1;
                        }
                    }
                }
            }
        };

        self.nbuf = nbuf;

        match found {
            Err(e) => {
                log::error!("search {start} -> {goal} aborted after {expanded} expansions: {e}");
                Err(e)
            }
            Ok(false) => {
                log::debug!("no path {start} -> {goal} ({expanded} expanded, {pushed} pushed)");
                Ok(SearchOutcome::NoPath { expanded })
            }
            Ok(true) => {
                let route = self.route_to(goal_idx, start_idx, expanded);
                log::debug!(
                    "found path {start} -> {goal}: cost {} in {} steps ({expanded} expanded, {pushed} pushed)",
                    route.total_cost,
                    route.steps()
                );
                Ok(SearchOutcome::Found(route))
            }
        }
    }

    /// Validate and resolve the start and goal of `config`.
    fn endpoints(&self, config: &SearchConfig) -> Result<(usize, Coord), SearchError> {
        let bounds = self.bounds;
        let start = config.start.unwrap_or(bounds.first());
        let goal = config.goal.unwrap_or(bounds.last());

        let Some(start_idx) = bounds.index(start) else {
            log::warn!("start {start} outside {bounds} grid");
            return Err(SearchError::StartOutOfBounds { start, bounds });
        };
        let Some(goal_idx) = bounds.index(goal) else {
            log::warn!("goal {goal} outside {bounds} grid");
            return Err(SearchError::GoalOutOfBounds { goal, bounds });
        };
        if self.get(start_idx).is_none() {
            log::warn!("start {start} is a wall");
            return Err(SearchError::StartImpassable(start));
        }
        if self.get(goal_idx).is_none() {
            log::warn!("goal {goal} is a wall");
            return Err(SearchError::GoalImpassable(goal));
        }
        Ok((start_idx, goal))
    }

    fn route_to(&self, goal_idx: usize, start_idx: usize, expanded: usize) -> Route {
        let (path, total_cost) = match self.get(goal_idx) {
            Some(goal) => (goal.path(self), goal.cost_from_start()),
            None => (Vec::new(), 0),
        };
        let start_cost = self.get(start_idx).map_or(0, |n| n.terrain_cost());
        Route {
            path,
            total_cost,
            heat_loss: total_cost.saturating_sub(start_cost),
            expanded,
        }
    }
}
