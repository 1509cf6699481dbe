use std::fmt;

use rand::Rng;

use crate::PathGraph;
use crate::astar::AstarConfig;
use crate::error::SearchError;
use crate::greedy::GreedyConfig;

/// The available path search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Bfs,
    Dfs,
    Ucs,
    Greedy,
    Astar,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Ucs,
        Strategy::Greedy,
        Strategy::Astar,
    ];

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Ucs => "UCS",
            Strategy::Greedy => "Greedy",
            Strategy::Astar => "A*",
        }
    }

    /// Whether the strategy always returns a shortest path.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Strategy::Ucs | Strategy::Astar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-strategy settings used by [`PathGraph::search`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub greedy: GreedyConfig,
    pub astar: AstarConfig,
}

impl PathGraph {
    /// Run `strategy` from `start` to `target`.
    ///
    /// `rng` is only consulted by [`Strategy::Greedy`].
    pub fn search<R: Rng + ?Sized>(
        &self,
        strategy: Strategy,
        start: usize,
        target: usize,
        config: &SearchConfig,
        rng: &mut R,
    ) -> Result<Vec<usize>, SearchError> {
        match strategy {
            Strategy::Bfs => self.bfs_path(start, target),
            Strategy::Dfs => self.dfs_path(start, target),
            Strategy::Ucs => self.ucs_path(start, target).map(|found| found.path),
            Strategy::Greedy => self.greedy_path(start, target, &config.greedy, rng),
            Strategy::Astar => self.astar_path(start, target, &config.astar),
        }
    }
}
