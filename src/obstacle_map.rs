use crate::frontier::Frontier;
use core::fmt;
use grid_util::grid::Grid;
use grid_util::point::Point;
use smallvec::{smallvec, SmallVec};

/// Read-only view of a caller owned obstacle grid. A cell value of `0` is passable, any other
/// value is an obstacle.
#[derive(Clone, Copy, Debug)]
pub struct ObstacleMap<'a, G> {
    grid: &'a G,
}

impl<'a, G: Grid<u8>> ObstacleMap<'a, G> {
    pub fn new(grid: &'a G) -> ObstacleMap<'a, G> {
        ObstacleMap { grid }
    }
    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width()
            && (point.y as usize) < self.height()
    }
    pub fn is_passable(&self, point: Point) -> bool {
        self.in_bounds(point) && self.grid.get(point.x as usize, point.y as usize) == 0
    }
    pub(crate) fn can_expand(&self, point: Point, frontier: &Frontier) -> bool {
        self.is_passable(point) && !frontier.is_closed(point)
    }
    /// The candidate neighbours of a point, straight ones first (top, bottom, left, right) followed
    /// by the diagonals (top-left, bottom-left, top-right, bottom-right) if enabled. Discovery order
    /// decides ties between otherwise equal open nodes, so this order is observable in the paths
    /// returned.
    ///
    /// No corner cutting check is done: a diagonal move is offered even if both straight cells
    /// next to it are blocked.
    pub fn neighborhood_points(&self, point: &Point, allow_diagonal: bool) -> SmallVec<[Point; 8]> {
        let (x, y) = (point.x, point.y);
        let mut neighbours: SmallVec<[Point; 8]> = smallvec![
            Point::new(x, y + 1),
            Point::new(x, y - 1),
            Point::new(x - 1, y),
            Point::new(x + 1, y),
        ];
        if allow_diagonal {
            neighbours.extend([
                Point::new(x - 1, y + 1),
                Point::new(x - 1, y - 1),
                Point::new(x + 1, y + 1),
                Point::new(x + 1, y - 1),
            ]);
        }
        neighbours
    }
}

impl<G: Grid<u8>> fmt::Display for ObstacleMap<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.height() {
            let values = (0..self.width())
                .map(|x| (self.grid.get(x, y) != 0) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
