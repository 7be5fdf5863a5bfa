use grid_astar::{try_find_path, ObstacleGrid, SearchConfig};
use grid_util::grid::Grid;
use grid_util::point::Point;

// Searches give up after a fixed number of expansions, 1000 by default. On a large map with a
// long detour the limit has to be raised for the path to be found.

fn main() {
    const N: usize = 60;
    let mut grid: ObstacleGrid = ObstacleGrid::new(N, N, 0);
    // A wall across the map with a single opening at the far end
    for x in 0..N - 1 {
        grid.set(x, N / 2, 1);
    }
    let start = Point::new(0, 0);
    let end = Point::new(0, N as i32 - 1);
    for limit in [1000, N * N] {
        let config = SearchConfig::new().with_iteration_limit(limit);
        match try_find_path(&grid, start, end, &config) {
            Ok(path) => println!("limit {limit}: path of {} cells", path.len()),
            Err(err) => println!("limit {limit}: {err}"),
        }
    }
}
