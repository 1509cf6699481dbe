use std::fmt;

use mazer_paths::SearchError;

/// Why the planner could not answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A search failed for a reason other than an unreachable target, such
    /// as an agent standing on a wall or outside the maze.
    Search(SearchError),
    /// The tiles passed in do not have the shape of the planner's maze.
    ViewMismatch {
        width: usize,
        len: usize,
        view_width: usize,
        view_len: usize,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(err) => write!(f, "planner: {err}"),
            Self::ViewMismatch {
                width,
                len,
                view_width,
                view_len,
            } => write!(
                f,
                "planner: view is {view_len} cells of width {view_width}, maze is {len} cells of width {width}"
            ),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(err) => Some(err),
            Self::ViewMismatch { .. } => None,
        }
    }
}

impl From<SearchError> for PlanError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}
