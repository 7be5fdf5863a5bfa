use grid_astar::{ObstacleGrid, Pathfinder, SearchConfig};
use grid_util::grid::Grid;
use grid_util::point::Point;

// A stand-in for a host application: clicks in world space toggle obstacles, and every tick the
// path between two world positions is recomputed and drawn as text.

const CELL_SIZE: f32 = 0.5;

fn world_to_cell(x: f32, y: f32) -> Point {
    Point::new((x / CELL_SIZE).floor() as i32, (y / CELL_SIZE).floor() as i32)
}

fn toggle(grid: &mut ObstacleGrid, cell: Point) {
    let in_bounds = cell.x >= 0
        && cell.y >= 0
        && (cell.x as usize) < grid.width()
        && (cell.y as usize) < grid.height();
    if in_bounds {
        let (x, y) = (cell.x as usize, cell.y as usize);
        let value = if grid.get(x, y) == 0 { 1 } else { 0 };
        grid.set(x, y, value);
    }
}

fn render(grid: &ObstacleGrid, path: Option<&[Point]>) {
    for y in (0..grid.height() as i32).rev() {
        let row = (0..grid.width() as i32)
            .map(|x| {
                let p = Point::new(x, y);
                if path.is_some_and(|path| path.contains(&p)) {
                    '*'
                } else if grid.get(x as usize, y as usize) != 0 {
                    '#'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        println!("{row}");
    }
    match path {
        Some(path) => println!("{} cells\n", path.len()),
        None => println!("no path\n"),
    }
}

fn main() {
    let mut grid: ObstacleGrid = ObstacleGrid::new(12, 8, 0);
    let mut pathfinder = Pathfinder::with_config(SearchConfig::new().with_diagonal_move(true));
    let start = world_to_cell(0.2, 0.3);
    let end = world_to_cell(5.9, 3.7);
    let clicks = [(2.6, 0.1), (2.6, 0.7), (2.6, 1.2), (2.6, 1.8), (2.6, 2.4), (2.6, 3.1)];
    for (x, y) in clicks {
        toggle(&mut grid, world_to_cell(x, y));
        let path = pathfinder.get_path(&grid, start, end);
        render(&grid, path.as_deref());
    }
}
