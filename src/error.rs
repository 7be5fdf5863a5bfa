use grid_util::point::Point;
use thiserror::Error;

/// Reasons a search can fail. [find_path](crate::find_path) and
/// [Pathfinder::get_path](crate::Pathfinder::get_path) fold all of them into [None].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("{point} lies outside the {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },

    #[error("{goal} is not reachable from {start}")]
    Unreachable { start: Point, goal: Point },

    #[error("search gave up after {limit} expansions")]
    IterationLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, PathError>;
