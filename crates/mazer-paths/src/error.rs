use std::fmt;

/// Why a path search produced no path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `start` or `target` is out of bounds or a wall.
    InvalidPosition(usize),
    /// The search space was exhausted without reaching `target`.
    Unreachable { start: usize, target: usize },
    /// The greedy walk used up its step budget.
    StepLimit { limit: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition(i) => {
                write!(f, "search: invalid position {i} (out of bounds or wall)")
            }
            Self::Unreachable { start, target } => {
                write!(f, "search: no path from {start} to {target}")
            }
            Self::StepLimit { limit } => {
                write!(f, "search: gave up after {limit} steps")
            }
        }
    }
}

impl std::error::Error for SearchError {}
