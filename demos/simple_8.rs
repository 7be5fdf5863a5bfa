use grid_astar::{grid_from_rows, ObstacleMap, Pathfinder, SearchConfig};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S# |
// |#  |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have an 8-neighborhood. Diagonal moves may cut corners, so the first step squeezes
// between the two obstacles.

fn main() {
    let grid = grid_from_rows(&[[0, 1, 0], [1, 0, 0], [0, 0, 0]]);
    println!("{}", ObstacleMap::new(&grid));
    let mut pathfinder = Pathfinder::with_config(SearchConfig::new().with_diagonal_move(true));
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let path = pathfinder.get_path(&grid, start, end).unwrap();
    println!("Path (cost {}):", pathfinder.get_path_cost_float(&path));
    for p in path {
        println!("{:?}", p);
    }
}
