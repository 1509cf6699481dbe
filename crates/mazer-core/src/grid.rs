//! The [`Grid`] type: a flat, row-major maze of [`Cell`]s.
//!
//! Index ↔ coordinate conversion uses `row = index / width` and
//! `col = index % width`. Neighbour queries respect the row boundaries, so
//! moving left from column 0 never wraps onto the previous row.

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Direction, Point};
use crate::view::Tiles;

/// Row width of the reference maze layout.
pub const DEFAULT_WIDTH: usize = 20;

/// A maze of [`Cell`]s with a fixed row width.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
}

/// Unchecked wire form of a [`Grid`], validated through [`Grid::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cells: Vec<Cell>,
    width: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::new(raw.cells, raw.width)
    }
}

impl Grid {
    /// Create a grid from cells laid out in rows of `width`.
    pub fn new(cells: Vec<Cell>, width: usize) -> Result<Self, GridError> {
        if width == 0 {
            return Err(GridError::ZeroWidth);
        }
        if cells.len() % width != 0 {
            return Err(GridError::RaggedLength {
                len: cells.len(),
                width,
            });
        }
        Ok(Self { cells, width })
    }

    /// Decode a raw `0`/`1`/`2` state sequence.
    pub fn from_states(states: &[i32], width: usize) -> Result<Self, GridError> {
        let cells = states
            .iter()
            .enumerate()
            .map(|(i, &v)| Cell::from_state(i, v))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cells, width)
    }

    /// A `width` × `height` grid with every cell set to `cell`.
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            cells: vec![cell; width * height],
            width: width.max(1),
        }
    }

    /// Row width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Raw state encoding of every cell.
    pub fn states(&self) -> Vec<i32> {
        self.cells.iter().map(|c| c.state()).collect()
    }

    /// Read the cell at `index`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Overwrite the cell at `index`. No-op if out of bounds.
    pub fn set(&mut self, index: usize, cell: Cell) {
        if let Some(c) = self.cells.get_mut(index) {
            *c = cell;
        }
    }

    /// Collect the item at `index`, if any. Returns whether one was there.
    pub fn consume(&mut self, index: usize) -> bool {
        match self.cells.get_mut(index) {
            Some(c) if c.has_item() => {
                *c = c.consumed();
                true
            }
            _ => false,
        }
    }

    /// Whether `index` is in bounds and not a wall.
    #[inline]
    pub fn is_walkable(&self, index: usize) -> bool {
        self.at(index).is_some_and(Cell::is_walkable)
    }

    /// Fail with [`GridError::InvalidPosition`] unless `index` is walkable.
    pub fn check_walkable(&self, index: usize) -> Result<(), GridError> {
        if self.is_walkable(index) {
            Ok(())
        } else {
            Err(GridError::InvalidPosition(index))
        }
    }

    // -----------------------------------------------------------------------
    // Coordinates
    // -----------------------------------------------------------------------

    /// Convert a flat index to its (column, row) point.
    #[inline]
    pub fn point(&self, index: usize) -> Point {
        Point::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Convert a point back to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width {
            return None;
        }
        let i = p.y as usize * self.width + p.x as usize;
        (i < self.cells.len()).then_some(i)
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// The walkable cell one step from `index` in `dir`, or `None` if the step
    /// leaves the grid or lands on a wall.
    pub fn step(&self, index: usize, dir: Direction) -> Option<usize> {
        if index >= self.cells.len() {
            return None;
        }
        let n = self.idx(self.point(index) + dir.delta())?;
        self.is_walkable(n).then_some(n)
    }

    #[inline]
    pub fn left(&self, index: usize) -> Option<usize> {
        self.step(index, Direction::Left)
    }

    #[inline]
    pub fn right(&self, index: usize) -> Option<usize> {
        self.step(index, Direction::Right)
    }

    #[inline]
    pub fn up(&self, index: usize) -> Option<usize> {
        self.step(index, Direction::Up)
    }

    #[inline]
    pub fn down(&self, index: usize) -> Option<usize> {
        self.step(index, Direction::Down)
    }

    /// Walkable neighbours of `index` in left, right, up, down order.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(index, dir))
    }

    /// Whether `a` and `b` are exactly one orthogonal step apart.
    #[inline]
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.point(a).is_adjacent(self.point(b))
    }

    /// Classify a single step `from` → `to`. `None` unless the cells are
    /// orthogonally adjacent.
    pub fn direction(&self, from: usize, to: usize) -> Option<Direction> {
        Direction::between(self.point(from), self.point(to))
    }

    // -----------------------------------------------------------------------
    // Scans
    // -----------------------------------------------------------------------

    /// Indices of every walkable cell.
    pub fn walkable(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_walkable())
            .map(|(i, _)| i)
    }

    /// Indices of every cell still holding an item.
    pub fn items(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.has_item())
            .map(|(i, _)| i)
    }

    /// Number of uncollected items.
    pub fn item_count(&self) -> usize {
        self.items().count()
    }
}

impl Tiles for Grid {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn at(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_states(&[0, 1, 2, 1, 1, 0], 3).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn malformed_grid_is_rejected() {
        let zero = serde_json::from_str::<Grid>(r#"{"cells":["Item","Item","Item"],"width":0}"#);
        let err = zero.unwrap_err().to_string();
        assert!(err.contains(&GridError::ZeroWidth.to_string()), "{err}");

        let ragged = serde_json::from_str::<Grid>(r#"{"cells":["Item","Item","Item"],"width":2}"#);
        let err = ragged.unwrap_err().to_string();
        let expected = GridError::RaggedLength { len: 3, width: 2 }.to_string();
        assert!(err.contains(&expected), "{err}");
    }
}
