//! The [`Cell`] type: the state of a single maze position.

use crate::error::GridError;

/// State of one maze position.
///
/// The numeric encoding matches the raw maze format: `0` is a wall, `1` a
/// walkable cell still holding an item, `2` a walkable cell whose item was
/// consumed. The only forward transition is [`Item`](Cell::Item) →
/// [`Empty`](Cell::Empty).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Wall,
    Item,
    Empty,
}

impl Cell {
    /// Raw state value of this cell.
    #[inline]
    pub const fn state(self) -> i32 {
        match self {
            Cell::Wall => 0,
            Cell::Item => 1,
            Cell::Empty => 2,
        }
    }

    /// Decode a raw state value found at `index`.
    pub fn from_state(index: usize, value: i32) -> Result<Self, GridError> {
        match value {
            0 => Ok(Cell::Wall),
            1 => Ok(Cell::Item),
            2 => Ok(Cell::Empty),
            _ => Err(GridError::InvalidState { index, value }),
        }
    }

    /// Whether an agent may stand on this cell.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// Whether this cell still holds an uncollected item.
    #[inline]
    pub const fn has_item(self) -> bool {
        matches!(self, Cell::Item)
    }

    /// The state after an agent collects whatever is here.
    #[inline]
    pub const fn consumed(self) -> Self {
        match self {
            Cell::Item => Cell::Empty,
            other => other,
        }
    }
}
