//! # grid_astar
//!
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) pathfinding on a grid of obstacle
//! values. A cell holding `0` is passable, any other value blocks it. Moves are either restricted
//! to the four cardinal directions or include the diagonals, in which case straight steps cost
//! [STRAIGHT_COST] and diagonal steps [DIAGONAL_COST].
//!
//! Ties between open nodes with equal f-value go to the node closest to the goal by
//! [Manhattan distance](cost::manhattan_distance), then to the node discovered first, so the same
//! input always yields the same path. Diagonal moves are allowed to cut corners: a diagonal step
//! is taken even if both cells beside it are blocked.
//!
//! ```
//! use grid_astar::{find_path, grid_from_rows};
//! use grid_util::point::Point;
//!
//! let grid = grid_from_rows(&[[0, 0, 0], [1, 1, 0], [0, 0, 0]]);
//! let path = find_path(&grid, Point::new(0, 0), Point::new(0, 2), false).unwrap();
//! assert_eq!(path.len(), 7);
//! ```
pub mod config;
pub mod cost;
mod error;
mod frontier;
pub mod obstacle_map;
mod pathfinder;
mod search;

pub use config::{SearchConfig, DEFAULT_ITERATION_LIMIT};
pub use cost::{path_cost, DIAGONAL_COST, STRAIGHT_COST};
pub use error::{PathError, Result};
pub use obstacle_map::ObstacleMap;
pub use pathfinder::Pathfinder;
pub use search::SearchContext;

use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;

/// Obstacle values addressed as `grid.get(x, y)`.
pub type ObstacleGrid = SimpleGrid<u8>;

/// Builds an [ObstacleGrid] from rows, so that `rows[y][x]` becomes the value at `(x, y)`. Rows
/// shorter than the longest one are padded with passable cells.
pub fn grid_from_rows<R: AsRef<[u8]>>(rows: &[R]) -> ObstacleGrid {
    let width = rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0);
    let mut grid = ObstacleGrid::new(width, rows.len(), 0);
    for (y, row) in rows.iter().enumerate() {
        for (x, &value) in row.as_ref().iter().enumerate() {
            grid.set(x, y, value);
        }
    }
    grid
}

/// Computes a path from start to end on the given grid, including both endpoints. Returns [None]
/// if either point is out of bounds, the end cannot be reached, or the search exceeds
/// [DEFAULT_ITERATION_LIMIT] expansions.
pub fn find_path<G: Grid<u8>>(
    grid: &G,
    start: Point,
    end: Point,
    allow_diagonal_move: bool,
) -> Option<Vec<Point>> {
    let config = SearchConfig::new().with_diagonal_move(allow_diagonal_move);
    try_find_path(grid, start, end, &config).ok()
}

/// Like [find_path], but with explicit settings and a [PathError] describing a failure.
pub fn try_find_path<G: Grid<u8>>(
    grid: &G,
    start: Point,
    end: Point,
    config: &SearchConfig,
) -> Result<Vec<Point>> {
    SearchContext::new().astar_grid(&ObstacleMap::new(grid), start, end, config)
}
