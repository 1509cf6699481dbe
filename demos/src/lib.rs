//! Shared maze and turn driver for the demo binaries.
//!
//! Demonstrates: building a grid from raw states, running every search
//! strategy between two roads, and driving a collector/pursuer chase with
//! the minimax planner.

use mazer_core::{DEFAULT_WIDTH, Direction, Grid, GridError};
use mazer_planner::{Decision, Outcome, PlanError, Planner, Side, evaluate};
use rand::Rng;
use rand::seq::IteratorRandom;

/// The reference 20×20 maze: `0` wall, `1` road with an item.
#[rustfmt::skip]
pub const MAZE: [i32; 400] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0,
    0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0,
    0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0,
    0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0,
    0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0,
    0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0,
    0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

pub fn reference_grid() -> Result<Grid, GridError> {
    Grid::from_states(&MAZE, DEFAULT_WIDTH)
}

/// A random walkable cell, skipping any in `taken`.
pub fn random_road<R: Rng + ?Sized>(grid: &Grid, taken: &[usize], rng: &mut R) -> Option<usize> {
    grid.walkable().filter(|i| !taken.contains(i)).choose(rng)
}

/// `a -> b -> c`
pub fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

// ---------------------------------------------------------------------------
// Chase
// ---------------------------------------------------------------------------

/// A committed single-tile move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub from: usize,
    pub to: usize,
    pub dir: Option<Direction>,
}

/// What happened during one [`Chase::turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: u32,
    pub collector: Option<Step>,
    pub pursuers: Vec<Option<Step>>,
    pub collected: bool,
    pub outcome: Outcome,
}

/// Turn driver: asks the planner for moves and commits them to the grid.
pub struct Chase {
    pub grid: Grid,
    pub collector: usize,
    pub pursuers: Vec<usize>,
    pub score: u32,
    pub turn: u32,
    planner: Planner,
}

impl Chase {
    /// Start a chase. The collector's starting cell counts as collected.
    pub fn new(mut grid: Grid, collector: usize, pursuers: Vec<usize>, planner: Planner) -> Self {
        grid.consume(collector);
        Self {
            grid,
            collector,
            pursuers,
            score: 0,
            turn: 0,
            planner,
        }
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.grid, self.collector, &self.pursuers)
    }

    /// Play one turn: the collector moves, then every pursuer. The pursuers
    /// stay put if the collector's move already ended the game.
    pub fn turn(&mut self) -> Result<TurnReport, PlanError> {
        self.turn += 1;
        let mut report = TurnReport {
            turn: self.turn,
            collector: None,
            pursuers: vec![None; self.pursuers.len()],
            collected: false,
            outcome: Outcome::Neutral,
        };

        if let Decision::Collector(Some(mv)) = self.planner.find_best_move(
            &self.grid,
            self.collector,
            &self.pursuers,
            Side::Collector,
        )? {
            report.collector = Some(self.commit(self.collector, mv.to));
            self.collector = mv.to;
            if self.grid.consume(mv.to) {
                self.score += 1;
                report.collected = true;
            }
        }

        if !self.outcome().is_terminal() {
            if let Decision::Pursuers(moves) = self.planner.find_best_move(
                &self.grid,
                self.collector,
                &self.pursuers,
                Side::Pursuers,
            )? {
                for (i, to) in moves.into_iter().enumerate() {
                    let Some(to) = to else { continue };
                    report.pursuers[i] = Some(self.commit(self.pursuers[i], to));
                    self.pursuers[i] = to;
                }
            }
        }

        report.outcome = self.outcome();
        Ok(report)
    }

    fn commit(&self, from: usize, to: usize) -> Step {
        Step {
            from,
            to,
            dir: self.grid.direction(from, to),
        }
    }
}
