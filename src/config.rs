/// Upper bound on node expansions used when none is configured.
pub const DEFAULT_ITERATION_LIMIT: usize = 1000;

/// Settings for a single search.
///
/// `iteration_limit` bounds the number of nodes popped from the open set. A search that hits it
/// fails even if the goal is reachable, which keeps the cost of a query on a large or pathological
/// map bounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub allow_diagonal_move: bool,
    pub iteration_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            allow_diagonal_move: false,
            iteration_limit: DEFAULT_ITERATION_LIMIT,
        }
    }
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        SearchConfig::default()
    }
    pub fn with_diagonal_move(mut self, allow_diagonal_move: bool) -> SearchConfig {
        self.allow_diagonal_move = allow_diagonal_move;
        self
    }
    pub fn with_iteration_limit(mut self, iteration_limit: usize) -> SearchConfig {
        self.iteration_limit = iteration_limit;
        self
    }
}
