/// Fuzzes the pathfinder on many random grids. Path existence is checked against connected
/// components and path cost against an exhaustive Dijkstra search, for both 4- and 8-grids.
use grid_astar::{find_path, path_cost, ObstacleGrid, ObstacleMap};
use grid_util::grid::Grid;
use grid_util::point::Point;
use petgraph::unionfind::UnionFind;
use rand::prelude::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> ObstacleGrid {
    let mut grid: ObstacleGrid = ObstacleGrid::new(w, h, 0);
    for x in 0..w {
        for y in 0..h {
            if rng.gen_bool(0.4) {
                grid.set(x, y, rng.gen_range(1..=u8::MAX));
            }
        }
    }
    grid
}

fn ix(grid: &ObstacleGrid, p: Point) -> usize {
    p.y as usize * grid.width() + p.x as usize
}

fn components(grid: &ObstacleGrid, diagonal: bool) -> UnionFind<usize> {
    let map = ObstacleMap::new(grid);
    let mut components = UnionFind::new(grid.width() * grid.height());
    for x in 0..grid.width() as i32 {
        for y in 0..grid.height() as i32 {
            let point = Point::new(x, y);
            if !map.is_passable(point) {
                continue;
            }
            for n in map.neighborhood_points(&point, diagonal) {
                if map.is_passable(n) {
                    components.union(ix(grid, point), ix(grid, n));
                }
            }
        }
    }
    components
}

/// Cheapest cost from start to goal using the same step costs as the pathfinder.
fn dijkstra_cost(grid: &ObstacleGrid, start: Point, goal: Point, diagonal: bool) -> Option<i32> {
    let map = ObstacleMap::new(grid);
    let mut best = vec![i32::MAX; grid.width() * grid.height()];
    let mut heap = BinaryHeap::new();
    best[ix(grid, start)] = 0;
    heap.push(Reverse((0, start.x, start.y)));
    while let Some(Reverse((cost, x, y))) = heap.pop() {
        let point = Point::new(x, y);
        if point == goal {
            return Some(cost);
        }
        if cost > best[ix(grid, point)] {
            continue;
        }
        for n in map.neighborhood_points(&point, diagonal) {
            if !map.is_passable(n) {
                continue;
            }
            let new_cost = cost + path_cost(&[point, n], diagonal);
            if new_cost < best[ix(grid, n)] {
                best[ix(grid, n)] = new_cost;
                heap.push(Reverse((new_cost, n.x, n.y)));
            }
        }
    }
    None
}

fn visualize_grid(grid: &ObstacleGrid, start: &Point, end: &Point) {
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.get(x as usize, y as usize) != 0 {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for diagonal in [false, true] {
        for _ in 0..N_GRIDS {
            let mut grid = random_grid(N, N, &mut rng);
            grid.set(0, 0, 0);
            grid.set(N - 1, N - 1, 0);
            let reachable = components(&grid, diagonal).equiv(ix(&grid, start), ix(&grid, end));
            let path = find_path(&grid, start, end, diagonal);
            // Show the grid if the answer is wrong
            if path.is_some() != reachable {
                visualize_grid(&grid, &start, &end);
            }
            assert_eq!(path.is_some(), reachable);
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for diagonal in [false, true] {
        for _ in 0..N_GRIDS {
            let grid = random_grid(N, N, &mut rng);
            let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
            let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
            let path = find_path(&grid, start, end, diagonal);
            let expected = if start == end {
                Some(0)
            } else {
                dijkstra_cost(&grid, start, end, diagonal)
            };
            let actual = path.as_ref().map(|p| path_cost(p, diagonal));
            if actual != expected {
                println!("A* cost: {actual:?}; Dijkstra cost: {expected:?}; diagonal: {diagonal}");
                println!("A* path: {path:?}");
                visualize_grid(&grid, &start, &end);
            }
            assert_eq!(actual, expected);
        }
    }
}
