//! Read-only access to cell states.
//!
//! [`Tiles`] lets scoring code run against either a real [`Grid`](crate::Grid)
//! or a lightweight layered view on top of one, without caring which.

use crate::cell::Cell;
use crate::geom::Point;

/// A read-only, row-major view of cell states.
pub trait Tiles {
    /// Row width.
    fn width(&self) -> usize;

    /// Total number of cells.
    fn len(&self) -> usize;

    /// Cell at `index`, or `None` if out of bounds.
    fn at(&self, index: usize) -> Option<Cell>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The (column, row) point of `index`.
    fn point(&self, index: usize) -> Point {
        let w = self.width().max(1);
        Point::new((index % w) as i32, (index / w) as i32)
    }

    /// Whether `index` still holds an item.
    fn has_item(&self, index: usize) -> bool {
        self.at(index).is_some_and(Cell::has_item)
    }

    /// Whether any item remains anywhere.
    fn any_items(&self) -> bool {
        (0..self.len()).any(|i| self.has_item(i))
    }
}
