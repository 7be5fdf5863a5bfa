use crate::config::SearchConfig;
use crate::cost::{path_cost, unit_cost};
use crate::error::Result;
use crate::obstacle_map::ObstacleMap;
use crate::search::SearchContext;
use grid_util::grid::Grid;
use grid_util::point::Point;

/// A reusable A* pathfinder. The grid itself stays with the caller and is passed to every query;
/// the [Pathfinder] only keeps its settings and the scratch space of previous searches.
#[derive(Clone, Debug, Default)]
pub struct Pathfinder {
    pub config: SearchConfig,
    context: SearchContext,
}

impl Pathfinder {
    pub fn new() -> Pathfinder {
        Pathfinder::default()
    }
    pub fn with_config(config: SearchConfig) -> Pathfinder {
        Pathfinder {
            config,
            context: SearchContext::new(),
        }
    }
    /// Computes a path from start to goal, reporting why none was found if the search fails.
    pub fn try_get_path<G: Grid<u8>>(
        &mut self,
        grid: &G,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Point>> {
        let map = ObstacleMap::new(grid);
        self.context.astar_grid(&map, start, goal, &self.config)
    }
    /// Computes a path from start to goal, including both. [None] if the points are out of
    /// bounds, the goal cannot be reached or the iteration limit was hit.
    pub fn get_path<G: Grid<u8>>(
        &mut self,
        grid: &G,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        self.try_get_path(grid, start, goal).ok()
    }
    pub fn get_path_cost(&self, path: &[Point]) -> i32 {
        path_cost(path, self.config.allow_diagonal_move)
    }
    pub fn get_path_cost_float(&self, path: &[Point]) -> f64 {
        unit_cost(self.get_path_cost(path), self.config.allow_diagonal_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid_from_rows, PathError};

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        for allow_diag in [false, true] {
            let grid = grid_from_rows(&[[0]]);
            let mut pathfinder =
                Pathfinder::with_config(SearchConfig::new().with_diagonal_move(allow_diag));
            let start = Point::new(0, 0);
            let path = pathfinder.get_path(&grid, start, start).unwrap();
            assert_eq!(path, vec![start]);
        }
    }

    /// Asserts that the optimal solution is found around a centre obstacle.
    #[test]
    fn solve_simple_problem() {
        for (allow_diag, expected) in [(false, 5), (true, 4)] {
            let grid = grid_from_rows(&[[0, 0, 0], [0, 1, 0], [0, 0, 0]]);
            let mut pathfinder =
                Pathfinder::with_config(SearchConfig::new().with_diagonal_move(allow_diag));
            let path = pathfinder
                .get_path(&grid, Point::new(0, 0), Point::new(2, 2))
                .unwrap();
            assert_eq!(path.len(), expected);
        }
    }

    #[test]
    fn failures_are_reported() {
        let grid = grid_from_rows(&[[0, 1, 0]]);
        let mut pathfinder = Pathfinder::new();
        assert_eq!(
            pathfinder.try_get_path(&grid, Point::new(0, 0), Point::new(2, 0)),
            Err(PathError::Unreachable {
                start: Point::new(0, 0),
                goal: Point::new(2, 0)
            })
        );
        assert_eq!(
            pathfinder.try_get_path(&grid, Point::new(-1, 0), Point::new(2, 0)),
            Err(PathError::OutOfBounds {
                point: Point::new(-1, 0),
                width: 3,
                height: 1
            })
        );
        assert!(pathfinder
            .get_path(&grid, Point::new(0, 0), Point::new(0, 1))
            .is_none());
    }

    #[test]
    fn path_cost_follows_config() {
        let path = vec![Point::new(0, 0), Point::new(1, 1), Point::new(1, 2)];
        let pathfinder = Pathfinder::with_config(SearchConfig::new().with_diagonal_move(true));
        assert_eq!(pathfinder.get_path_cost(&path), 241);
        assert_eq!(pathfinder.get_path_cost_float(&path), 2.41);
        let pathfinder = Pathfinder::new();
        assert_eq!(pathfinder.get_path_cost(&path), 3);
        assert_eq!(pathfinder.get_path_cost_float(&path), 3.0);
    }
}
