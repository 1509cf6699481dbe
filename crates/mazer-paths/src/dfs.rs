use std::collections::VecDeque;

use crate::PathGraph;
use crate::error::SearchError;

impl PathGraph {
    /// Depth-first search from `start` until `target` is reached.
    ///
    /// The neighbours of each visited cell go to the front of the work list,
    /// so the most recently reached branch is explored first. A cell is
    /// skipped only if it is already on the walk. Like
    /// [`bfs_path`](Self::bfs_path) the result is a stitched walk of
    /// single-tile moves, not a shortest path.
    pub fn dfs_path(&self, start: usize, target: usize) -> Result<Vec<usize>, SearchError> {
        self.check_endpoints(start, target)?;

        let mut on_path = vec![false; self.len()];
        let mut work = VecDeque::from([start]);
        let mut path = Vec::new();

        while let Some(v) = work.pop_front() {
            if on_path[v] {
                continue;
            }
            self.push_with_backtrack(&mut path, v);
            on_path[v] = true;
            if v == target {
                log::trace!("dfs {start} -> {target}: {} steps", path.len() - 1);
                return Ok(path);
            }
            for &n in self.neighbors(v).iter().rev() {
                work.push_front(n);
            }
        }

        Err(SearchError::Unreachable { start, target })
    }
}
