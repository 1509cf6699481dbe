use mazer_core::Grid;

use crate::error::SearchError;

// ---------------------------------------------------------------------------
// Adjacency
// ---------------------------------------------------------------------------

/// Fixed-capacity list of up to four neighbour indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Adjacency {
    slots: [usize; 4],
    len: u8,
}

impl Adjacency {
    fn push(&mut self, index: usize) {
        self.slots[self.len as usize] = index;
        self.len += 1;
    }

    /// Neighbours in left, right, up, down order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.slots[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// ---------------------------------------------------------------------------
// PathGraph
// ---------------------------------------------------------------------------

/// Directed adjacency over the walkable cells of a maze.
///
/// Built once from a grid snapshot: one [`Adjacency`] slot per cell, indexed
/// by the cell's flat index. Walls get an empty slot and are never a
/// neighbour. Later changes to the source grid (item consumption) are not
/// observed, which is fine since only walls block movement.
#[derive(Debug, Clone)]
pub struct PathGraph {
    pub(crate) grid: Grid,
    adjacency: Vec<Adjacency>,
}

impl PathGraph {
    /// Build the graph. Every walkable cell gets an edge to each walkable,
    /// in-bounds orthogonal neighbour; both directions are stored.
    pub fn new(grid: &Grid) -> Self {
        let mut adjacency = vec![Adjacency::default(); grid.len()];
        for i in grid.walkable() {
            for n in grid.neighbors(i) {
                adjacency[i].push(n);
            }
        }
        log::trace!(
            "path graph: {} cells, {} edges",
            grid.len(),
            adjacency.iter().map(Adjacency::len).sum::<usize>()
        );
        Self {
            grid: grid.clone(),
            adjacency,
        }
    }

    /// The grid snapshot this graph was built from.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of cells (walls included).
    #[inline]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Outgoing edges of `index`. Empty for walls and out-of-range indices.
    #[inline]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.adjacency
            .get(index)
            .map(Adjacency::as_slice)
            .unwrap_or(&[])
    }

    /// Whether there is an edge `from` → `to`.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Adjacency::len).sum()
    }

    /// Validate both endpoints of a query.
    pub(crate) fn check_endpoints(&self, start: usize, target: usize) -> Result<(), SearchError> {
        for i in [start, target] {
            if !self.grid.is_walkable(i) {
                return Err(SearchError::InvalidPosition(i));
            }
        }
        Ok(())
    }

    /// Append `next` to a walk, first backtracking along the walk until its
    /// tail is one step away from `next`.
    ///
    /// Each backtrack step re-appends the cell before the current cursor, so
    /// the result stays a sequence of single-tile moves, possibly with
    /// repeats.
    pub(crate) fn push_with_backtrack(&self, path: &mut Vec<usize>, next: usize) {
        if let Some(mut i) = path.len().checked_sub(1) {
            while !self.grid.is_adjacent(path[i], next) {
                if i == 0 {
                    log::warn!("backtrack: no cell on the walk is adjacent to {next}");
                    break;
                }
                path.push(path[i - 1]);
                i -= 1;
            }
        }
        path.push(next);
    }
}
