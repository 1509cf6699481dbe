//! Turn-based move selection for a maze chase.
//!
//! One collector (the maximizing side) walks toward the nearest item while
//! one or more pursuers (the minimizing side) walk toward the collector.
//! [`Planner`] scores the collector's next step with a fixed-depth
//! [`minimax`](Planner::minimax) line against each pursuer, using
//! uniform-cost search to pick every simulated step.
//!
//! Planning never mutates the caller's grid: speculative item pickups are
//! layered on top of it with [`Consumed`].

pub mod error;
pub mod eval;
pub mod overlay;
pub mod planner;

pub use error::PlanError;
pub use eval::{Outcome, closest_item, evaluate, is_end};
pub use overlay::Consumed;
pub use planner::{Decision, Planner, PlannerConfig, ScoredMove, Side};
