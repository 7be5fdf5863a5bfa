use grid_astar::{find_path, grid_from_rows, ObstacleMap};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let grid = grid_from_rows(&[[0, 0, 0], [0, 1, 0], [0, 0, 0]]);
    println!("{}", ObstacleMap::new(&grid));
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let path = find_path(&grid, start, end, false).unwrap();
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}
