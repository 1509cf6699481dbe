//! Copy-on-write view used for speculative item pickups.

use mazer_core::{Cell, Tiles};

/// A view of `base` in which the cell at `index` has had its item collected.
///
/// Views stack: each simulated pickup wraps the previous view, and dropping
/// the wrapper is all it takes to undo the pickup.
#[derive(Clone, Copy)]
pub struct Consumed<'a> {
    base: &'a dyn Tiles,
    index: usize,
}

impl<'a> Consumed<'a> {
    pub fn new(base: &'a dyn Tiles, index: usize) -> Self {
        Self { base, index }
    }

    /// The cell whose item this layer removes.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Tiles for Consumed<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.base.width()
    }

    #[inline]
    fn len(&self) -> usize {
        self.base.len()
    }

    #[inline]
    fn at(&self, index: usize) -> Option<Cell> {
        let cell = self.base.at(index)?;
        Some(if index == self.index {
            cell.consumed()
        } else {
            cell
        })
    }
}
