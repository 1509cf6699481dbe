use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::PathGraph;
use crate::error::SearchError;

/// Every edge of the maze costs the same.
const STEP_COST: u32 = 1;

/// A path together with its accumulated cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostPath {
    pub path: Vec<usize>,
    pub cost: u32,
}

impl CostPath {
    /// The first move along the path: the cell after the start, or the start
    /// itself when the path has a single cell.
    pub fn first_step(&self) -> Option<usize> {
        self.path.get(1).or(self.path.first()).copied()
    }
}

/// Frontier entry, ordered by `(cost, seq)` so that equal costs dequeue in
/// insertion order.
#[derive(Debug)]
struct Entry {
    cost: u32,
    seq: u64,
    path: Vec<usize>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PathGraph {
    /// Uniform-cost search from `start` to `target`.
    ///
    /// Each frontier entry carries its whole path. A cell is expanded at most
    /// once; since every step costs the same, the first entry to reach
    /// `target` is a shortest path by hop count.
    pub fn ucs_path(&self, start: usize, target: usize) -> Result<CostPath, SearchError> {
        self.check_endpoints(start, target)?;

        let mut expanded = vec![false; self.len()];
        let mut open = BinaryHeap::new();
        let mut seq = 0u64;
        open.push(Reverse(Entry {
            cost: 0,
            seq,
            path: vec![start],
        }));

        while let Some(Reverse(entry)) = open.pop() {
            let Some(&tail) = entry.path.last() else {
                continue;
            };
            if tail == target {
                log::trace!("ucs {start} -> {target}: cost {}", entry.cost);
                return Ok(CostPath {
                    path: entry.path,
                    cost: entry.cost,
                });
            }
            if expanded[tail] {
                continue;
            }
            expanded[tail] = true;

            for &n in self.neighbors(tail) {
                if expanded[n] {
                    continue;
                }
                seq += 1;
                let mut path = Vec::with_capacity(entry.path.len() + 1);
                path.extend_from_slice(&entry.path);
                path.push(n);
                open.push(Reverse(Entry {
                    cost: entry.cost + STEP_COST,
                    seq,
                    path,
                }));
            }
        }

        Err(SearchError::Unreachable { start, target })
    }

    /// The first cell of a uniform-cost path from `from` to `to`.
    ///
    /// Returns `from` itself when the two coincide.
    pub fn next_step(&self, from: usize, to: usize) -> Result<usize, SearchError> {
        let found = self.ucs_path(from, to)?;
        found
            .first_step()
            .ok_or(SearchError::Unreachable {
                start: from,
                target: to,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{hop_distances, is_stepwise, maze};
    use mazer_core::{Cell, Grid};

    #[test]
    fn ucs_is_shortest_for_all_pairs() {
        let grid = maze();
        let pg = PathGraph::new(&grid);
        let roads: Vec<_> = grid.walkable().collect();
        for &s in &roads {
            let dist = hop_distances(&grid, s);
            for &t in &roads {
                let Some(d) = dist[t] else {
                    assert!(pg.ucs_path(s, t).is_err());
                    continue;
                };
                let found = pg.ucs_path(s, t).unwrap();
                assert_eq!(found.cost as usize, d, "{s} -> {t}");
                assert_eq!(found.path.len(), d + 1);
                assert_eq!(found.path.first(), Some(&s));
                assert_eq!(found.path.last(), Some(&t));
                assert!(is_stepwise(&grid, &found.path));
            }
        }
    }

    #[test]
    fn ucs_ties_follow_neighbour_order() {
        // Open 2x2: 0 -> 3 can go via 1 (right) or 2 (down); right comes first.
        let grid = Grid::filled(2, 2, Cell::Item);
        let pg = PathGraph::new(&grid);
        let found = pg.ucs_path(0, 3).unwrap();
        assert_eq!(found.path, vec![0, 1, 3]);
        assert_eq!(found.cost, 2);
    }

    #[test]
    fn next_step_moves_one_tile() {
        let grid = Grid::filled(4, 1, Cell::Empty);
        let pg = PathGraph::new(&grid);
        assert_eq!(pg.next_step(0, 3), Ok(1));
        assert_eq!(pg.next_step(3, 0), Ok(2));
        assert_eq!(pg.next_step(2, 2), Ok(2));
    }

    #[test]
    fn ucs_reports_unreachable() {
        let grid = Grid::from_states(&[2, 0, 2], 3).unwrap();
        let pg = PathGraph::new(&grid);
        assert_eq!(
            pg.ucs_path(0, 2),
            Err(SearchError::Unreachable { start: 0, target: 2 })
        );
        assert!(pg.next_step(0, 2).is_err());
    }
}
