use rand::Rng;
use rand::seq::IndexedRandom;

use crate::PathGraph;
use crate::error::SearchError;

/// Settings for [`PathGraph::greedy_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Steps the walk may take before giving up with
    /// [`SearchError::StepLimit`].
    pub max_steps: usize,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self { max_steps: 10_000 }
    }
}

impl PathGraph {
    /// Random walk from `target` back to `start`, returned start → target.
    ///
    /// Each step picks uniformly among the current cell's walkable grid
    /// neighbours that have not been visited yet. When all of them have,
    /// any neighbour except the one just left is allowed; at a dead end the
    /// walk steps back. The result is neither deterministic nor short.
    pub fn greedy_path<R: Rng + ?Sized>(
        &self,
        start: usize,
        target: usize,
        config: &GreedyConfig,
        rng: &mut R,
    ) -> Result<Vec<usize>, SearchError> {
        self.check_endpoints(start, target)?;
        if start == target {
            return Ok(vec![start]);
        }

        let mut visited = vec![false; self.len()];
        let mut path = vec![target];
        let mut candidates = Vec::with_capacity(4);
        let mut curr = target;
        let mut prev = target;
        visited[target] = true;

        for _ in 0..config.max_steps {
            candidates.clear();
            candidates.extend(self.neighbors(curr).iter().copied().filter(|&n| !visited[n]));
            if candidates.is_empty() {
                candidates.extend(self.neighbors(curr).iter().copied().filter(|&n| n != prev));
            }
            if candidates.is_empty() {
                candidates.extend(self.neighbors(curr).iter().copied());
            }
            let Some(&next) = candidates.choose(rng) else {
                // Isolated cell: nowhere to go.
                return Err(SearchError::Unreachable { start, target });
            };

            path.push(next);
            visited[next] = true;
            prev = curr;
            curr = next;

            if curr == start {
                path.reverse();
                log::trace!("greedy {start} -> {target}: {} steps", path.len() - 1);
                return Ok(path);
            }
        }

        Err(SearchError::StepLimit {
            limit: config.max_steps,
        })
    }
}
