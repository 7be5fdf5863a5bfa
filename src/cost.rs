//! Integer cost model shared by the edge weights and the heuristic.
use grid_util::point::Point;
use itertools::Itertools;

/// Cost of a cardinal (straight) move when diagonal moves are enabled.
pub const STRAIGHT_COST: i32 = 100;
/// Cost of a diagonal move, an integer approximation of `STRAIGHT_COST * sqrt(2)`.
pub const DIAGONAL_COST: i32 = 141;

/// Sum of the absolute coordinate differences of two points. Always used to break ties between
/// open nodes with equal f-value.
pub fn manhattan_distance(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}

/// Cost of moving between two points. On a 4-grid this is the
/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), so every step costs 1.
/// On an 8-grid the cost is that of taking as many diagonal steps as possible before going
/// straight, with [STRAIGHT_COST] per straight step and [DIAGONAL_COST] per diagonal step.
///
/// The same function doubles as the heuristic when `p2` is the goal.
pub fn step_cost(p1: &Point, p2: &Point, allow_diagonal: bool) -> i32 {
    if allow_diagonal {
        let delta_x = (p1.x - p2.x).abs();
        let delta_y = (p1.y - p2.y).abs();
        let diagonal = delta_x.min(delta_y);
        let straight = (delta_x - delta_y).abs();
        diagonal * DIAGONAL_COST + straight * STRAIGHT_COST
    } else {
        manhattan_distance(p1, p2)
    }
}

/// Total cost of following a path, one [step_cost] per consecutive pair.
pub fn path_cost(path: &[Point], allow_diagonal: bool) -> i32 {
    path.iter()
        .tuple_windows()
        .map(|(p1, p2)| step_cost(p1, p2, allow_diagonal))
        .sum()
}

/// Converts the integer cost to an approximate floating point equivalent where cardinal
/// directions have cost 1.0.
pub fn unit_cost(cost: i32, allow_diagonal: bool) -> f64 {
    if allow_diagonal {
        (cost as f64) / (STRAIGHT_COST as f64)
    } else {
        cost as f64
    }
}
