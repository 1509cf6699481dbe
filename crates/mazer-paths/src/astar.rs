use mazer_core::Point;

use crate::PathGraph;
use crate::error::SearchError;

/// Distance estimate used to rank A* nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Straight-line distance between (column, row) points. Never exceeds
    /// the remaining hop count, so A* returns shortest paths.
    #[default]
    Euclidean,
    /// Squared straight-line distance. Pulls the search toward the target
    /// harder but can overestimate, so paths may be longer than necessary.
    SquaredEuclidean,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f64 {
        match self {
            Heuristic::Euclidean => from.distance(to),
            Heuristic::SquaredEuclidean => f64::from(from.distance_sq(to)),
        }
    }
}

/// Settings for [`PathGraph::astar_path`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstarConfig {
    pub heuristic: Heuristic,
}

/// A search node. `parent` indexes into the node arena.
#[derive(Debug, Clone, Copy)]
struct Node {
    pos: usize,
    parent: Option<usize>,
    g: u32,
    f: f64,
}

impl PathGraph {
    /// Compute a path from `start` to `target` using A*.
    ///
    /// The open list is scanned linearly for the lowest `f`; ties go to the
    /// node found first. A neighbour is only added when no node for the same
    /// cell with an equal or better `g` is already open or closed.
    pub fn astar_path(
        &self,
        start: usize,
        target: usize,
        config: &AstarConfig,
    ) -> Result<Vec<usize>, SearchError> {
        self.check_endpoints(start, target)?;
        if start == target {
            return Ok(vec![start]);
        }

        let goal = self.grid.point(target);
        let estimate = |i: usize| config.heuristic.estimate(self.grid.point(i), goal);

        let mut nodes = vec![Node {
            pos: start,
            parent: None,
            g: 0,
            f: estimate(start),
        }];
        let mut open: Vec<usize> = vec![0];
        let mut open_g: Vec<Option<u32>> = vec![None; self.len()];
        let mut closed_g: Vec<Option<u32>> = vec![None; self.len()];
        open_g[start] = Some(0);
        let mut expansions = 0usize;

        let found = 'search: loop {
            let Some(best) = lowest_f(&nodes, &open) else {
                break 'search None;
            };
            let ci = open.remove(best);
            let current = nodes[ci];

            // Superseded by a cheaper node for the same cell.
            if closed_g[current.pos].is_some_and(|g| g <= current.g) {
                continue;
            }
            closed_g[current.pos] = Some(current.g);
            if open_g[current.pos].is_some_and(|g| g >= current.g) {
                open_g[current.pos] = None;
            }

            if current.pos == target {
                break 'search Some(ci);
            }
            expansions += 1;

            for &n in self.neighbors(current.pos) {
                let g = current.g + 1;
                if closed_g[n].is_some_and(|cg| cg <= g) {
                    continue;
                }
                if open_g[n].is_some_and(|og| og <= g) {
                    continue;
                }
                open_g[n] = Some(g);
                nodes.push(Node {
                    pos: n,
                    parent: Some(ci),
                    g,
                    f: f64::from(g) + estimate(n),
                });
                open.push(nodes.len() - 1);
            }
        };

        let Some(goal_node) = found else {
            return Err(SearchError::Unreachable { start, target });
        };
        log::trace!("astar {start} -> {target}: {expansions} expansions");

        // Reconstruct path.
        let mut path = Vec::new();
        let mut cursor = Some(goal_node);
        while let Some(ci) = cursor {
            path.push(nodes[ci].pos);
            cursor = nodes[ci].parent;
        }
        path.reverse();
        Ok(path)
    }
}

/// Position in `open` of the node with the lowest `f`, first one on ties.
fn lowest_f(nodes: &[Node], open: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (k, &ni) in open.iter().enumerate() {
        match best {
            Some(b) if nodes[ni].f >= nodes[open[b]].f => {}
            _ => best = Some(k),
        }
    }
    best
}
