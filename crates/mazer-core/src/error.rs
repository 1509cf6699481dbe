use std::fmt;

/// Errors raised while building or querying a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The row width is zero.
    ZeroWidth,
    /// The cell sequence does not split into whole rows.
    RaggedLength { len: usize, width: usize },
    /// A raw state value outside `0..=2`.
    InvalidState { index: usize, value: i32 },
    /// The index is out of bounds or names a wall.
    InvalidPosition(usize),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "grid: row width must be positive"),
            Self::RaggedLength { len, width } => {
                write!(f, "grid: {len} cells do not split into rows of {width}")
            }
            Self::InvalidState { index, value } => {
                write!(f, "grid: invalid cell state {value} at index {index}")
            }
            Self::InvalidPosition(index) => {
                write!(f, "grid: invalid position {index} (out of bounds or wall)")
            }
        }
    }
}

impl std::error::Error for GridError {}
