use std::collections::VecDeque;

use crate::PathGraph;
use crate::error::SearchError;

impl PathGraph {
    /// Breadth-first search from `start` until `target` is discovered.
    ///
    /// Cells are appended to the returned walk in discovery order, each one
    /// stitched to the walk with backtrack steps, so every consecutive pair
    /// is a single-tile move. The walk is not a shortest path.
    pub fn bfs_path(&self, start: usize, target: usize) -> Result<Vec<usize>, SearchError> {
        self.check_endpoints(start, target)?;
        if start == target {
            return Ok(vec![start]);
        }

        let mut visited = vec![false; self.len()];
        let mut queue = VecDeque::from([start]);
        let mut path = vec![start];
        visited[start] = true;

        while let Some(v) = queue.pop_front() {
            for &n in self.neighbors(v) {
                if visited[n] {
                    continue;
                }
                visited[n] = true;
                queue.push_back(n);
                self.push_with_backtrack(&mut path, n);
                if n == target {
                    log::trace!("bfs {start} -> {target}: {} steps", path.len() - 1);
                    return Ok(path);
                }
            }
        }

        Err(SearchError::Unreachable { start, target })
    }

    /// Hop distance from `source` to every cell; `None` where unreachable.
    pub fn distance_map(&self, source: usize) -> Vec<Option<u32>> {
        let mut dist = vec![None; self.len()];
        if !self.grid.is_walkable(source) {
            return dist;
        }
        dist[source] = Some(0);
        let mut queue = VecDeque::from([source]);

        while let Some(c) = queue.pop_front() {
            let d = dist[c].unwrap_or(0);
            for &n in self.neighbors(c) {
                if dist[n].is_none() {
                    dist[n] = Some(d + 1);
                    queue.push_back(n);
                }
            }
        }
        dist
    }
}
