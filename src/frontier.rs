use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry of the open set. `tie` is the Manhattan distance to the goal and `index` the position
/// of the node in the node table, which is the order in which nodes were discovered.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub f: i32,
    pub tie: i32,
    pub index: usize,
    pub point: Point,
}

impl OpenEntry {
    fn key(&self) -> (i32, i32, usize) {
        (self.f, self.tie, self.index)
    }
}

impl Eq for OpenEntry {}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap yields the smallest f, then the node closest to the goal, then
        // the node discovered first. This picks the same node as a scan over the open list in
        // insertion order that only replaces its candidate on a strict improvement.
        other.key().cmp(&self.key())
    }
}

/// Open and closed sets of a search. Membership is tracked in two [BoolGrid]s sized to the map;
/// ordering uses a [BinaryHeap] from which outdated entries are dropped lazily.
#[derive(Clone, Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<OpenEntry>,
    open: BoolGrid,
    closed: BoolGrid,
    open_count: usize,
}

impl Frontier {
    /// Prepares the frontier for a search on a `width` x `height` map. If the size is unchanged
    /// only the `touched` cells of the previous search are cleared.
    pub fn reset<I>(&mut self, width: usize, height: usize, touched: I)
    where
        I: IntoIterator<Item = Point>,
    {
        self.heap.clear();
        self.open_count = 0;
        if self.open.width() == width && self.open.height() == height {
            for p in touched {
                self.open.set(p.x as usize, p.y as usize, false);
                self.closed.set(p.x as usize, p.y as usize, false);
            }
        } else {
            self.open = BoolGrid::new(width, height, false);
            self.closed = BoolGrid::new(width, height, false);
        }
    }
    pub fn is_empty(&self) -> bool {
        self.open_count == 0
    }
    pub fn is_open(&self, point: Point) -> bool {
        self.open.get(point.x as usize, point.y as usize)
    }
    pub fn is_closed(&self, point: Point) -> bool {
        self.closed.get(point.x as usize, point.y as usize)
    }
    /// Adds an entry for `point`, marking it open if it was not already. Pushing an open point
    /// again with a lower f supersedes its earlier entry.
    pub fn push(&mut self, point: Point, f: i32, tie: i32, index: usize) {
        debug_assert!(!self.is_closed(point));
        if !self.is_open(point) {
            self.open.set(point.x as usize, point.y as usize, true);
            self.open_count += 1;
        }
        self.heap.push(OpenEntry {
            f,
            tie,
            index,
            point,
        });
    }
    /// Removes and returns the best live entry. `current_f` gives the f-value a node currently has
    /// so that entries pushed before an improvement can be recognised and dropped.
    pub fn pop_best<F>(&mut self, mut current_f: F) -> Option<OpenEntry>
    where
        F: FnMut(usize) -> i32,
    {
        while let Some(entry) = self.heap.pop() {
            if self.is_closed(entry.point) || current_f(entry.index) != entry.f {
                continue;
            }
            return Some(entry);
        }
        None
    }
    /// Moves a point from the open to the closed set.
    pub fn close(&mut self, point: Point) {
        if self.is_open(point) {
            self.open.set(point.x as usize, point.y as usize, false);
            self.open_count -= 1;
        }
        self.closed.set(point.x as usize, point.y as usize, true);
    }
}
