//! The A* loop. Nodes are kept in an insertion ordered [IndexMap] so that a node's index doubles
//! as its discovery order and parents can be stored as plain indices.
use crate::config::SearchConfig;
use crate::cost::{manhattan_distance, step_cost};
use crate::error::{PathError, Result};
use crate::frontier::Frontier;
use crate::obstacle_map::ObstacleMap;
use fxhash::FxBuildHasher;
use grid_util::grid::Grid;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, info, trace, warn};
use std::iter;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SearchNode {
    pub g: i32,
    pub h: i32,
    pub f: i32,
    pub parent: usize,
}

/// Scratch space for searches. Holding on to one (as [Pathfinder](crate::Pathfinder) does) avoids
/// reallocating the node table and occupancy grids on every query.
#[derive(Clone, Debug, Default)]
pub struct SearchContext {
    nodes: FxIndexMap<Point, SearchNode>,
    frontier: Frontier,
}

fn reverse_path(nodes: &FxIndexMap<Point, SearchNode>, goal_index: usize) -> Vec<Point> {
    let mut path: Vec<Point> = iter::successors(nodes.get_index(goal_index), |(_, node)| {
        nodes.get_index(node.parent)
    })
    .map(|(point, _)| *point)
    .collect();
    path.reverse();
    path
}

impl SearchContext {
    pub fn new() -> SearchContext {
        SearchContext::default()
    }

    fn reset(&mut self, width: usize, height: usize) {
        self.frontier
            .reset(width, height, self.nodes.keys().copied());
        self.nodes.clear();
    }

    /// Runs A* from `start` to `goal`. Returns the path including both endpoints.
    pub(crate) fn astar_grid<G: Grid<u8>>(
        &mut self,
        map: &ObstacleMap<G>,
        start: Point,
        goal: Point,
        config: &SearchConfig,
    ) -> Result<Vec<Point>> {
        for point in [start, goal] {
            if !map.in_bounds(point) {
                info!("{} is outside of the grid", point);
                return Err(PathError::OutOfBounds {
                    point,
                    width: map.width(),
                    height: map.height(),
                });
            }
        }
        let allow_diagonal = config.allow_diagonal_move;
        debug!(
            "Searching path from {} to {} (diagonal: {})",
            start, goal, allow_diagonal
        );
        self.reset(map.width(), map.height());

        // The start node enters with f = 0 rather than g + h; it is the only open node at that
        // point so the value is never compared.
        let start_h = manhattan_distance(&start, &goal);
        self.nodes.insert(
            start,
            SearchNode {
                g: 0,
                h: start_h,
                f: 0,
                parent: NO_PARENT,
            },
        );
        self.frontier.push(start, 0, start_h, 0);

        let mut expansions = 0;
        loop {
            if self.frontier.is_empty() {
                info!("{} is not reachable from {}", goal, start);
                return Err(PathError::Unreachable { start, goal });
            }
            expansions += 1;
            if expansions > config.iteration_limit {
                warn!(
                    "Gave up on path from {} to {} after {} expansions",
                    start, goal, config.iteration_limit
                );
                return Err(PathError::IterationLimitExceeded {
                    limit: config.iteration_limit,
                });
            }
            let nodes = &self.nodes;
            let Some(current) = self.frontier.pop_best(|ix| nodes[ix].f) else {
                return Err(PathError::Unreachable { start, goal });
            };
            self.frontier.close(current.point);
            trace!("Expanding {} (f = {})", current.point, current.f);

            if current.point == goal {
                let path = reverse_path(&self.nodes, current.index);
                debug!(
                    "Found path of {} cells after {} expansions",
                    path.len(),
                    expansions
                );
                return Ok(path);
            }

            let current_g = self.nodes[current.index].g;
            for neighbour in map.neighborhood_points(&current.point, allow_diagonal) {
                if !map.can_expand(neighbour, &self.frontier) {
                    continue;
                }
                let new_g = current_g + step_cost(&current.point, &neighbour, allow_diagonal);
                let index = match self.nodes.entry(neighbour) {
                    Vacant(e) => {
                        let index = e.index();
                        let h = step_cost(&neighbour, &goal, allow_diagonal);
                        e.insert(SearchNode {
                            g: new_g,
                            h,
                            f: new_g + h,
                            parent: current.index,
                        });
                        index
                    }
                    Occupied(mut e) => {
                        if e.get().g <= new_g {
                            continue;
                        }
                        let node = e.get_mut();
                        node.g = new_g;
                        node.f = new_g + node.h;
                        node.parent = current.index;
                        e.index()
                    }
                };
                self.frontier.push(
                    neighbour,
                    self.nodes[index].f,
                    manhattan_distance(&neighbour, &goal),
                    index,
                );
            }
        }
    }
}
