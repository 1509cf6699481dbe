//! Path search over tile mazes.
//!
//! A [`PathGraph`] is built once from a [`Grid`](mazer_core::Grid) snapshot
//! and answers five kinds of start → target queries:
//!
//! - **Breadth-first** ([`PathGraph::bfs_path`])
//! - **Depth-first** ([`PathGraph::dfs_path`])
//! - **Uniform-cost** ([`PathGraph::ucs_path`])
//! - **Greedy random walk** ([`PathGraph::greedy_path`])
//! - **A\*** ([`PathGraph::astar_path`])
//!
//! [`Strategy`] names them for table-driven dispatch through
//! [`PathGraph::search`].
//!
//! BFS and DFS return their *exploration order*, stitched into a walk of
//! single-tile steps by re-appending earlier cells whenever the next cell
//! is not adjacent to the current tail. Those paths may repeat cells and are
//! not shortest. Uniform-cost and A\* return shortest paths.

mod astar;
mod bfs;
mod dfs;
mod error;
mod graph;
mod greedy;
mod strategy;
mod ucs;

#[cfg(test)]
mod testutil;

pub use astar::{AstarConfig, Heuristic};
pub use error::SearchError;
pub use graph::{Adjacency, PathGraph};
pub use greedy::GreedyConfig;
pub use strategy::{SearchConfig, Strategy};
pub use ucs::CostPath;
