//! Fixed-depth minimax over uniform-cost moves.

use mazer_core::{Grid, Tiles};
use mazer_paths::{PathGraph, SearchError};

use crate::error::PlanError;
use crate::eval::{Outcome, closest_item, evaluate};
use crate::overlay::Consumed;

/// Settings for [`Planner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Plies after which a line is scored as it stands.
    pub max_depth: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { max_depth: 100 }
    }
}

/// Which side to plan for in [`Planner::find_best_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Collector,
    Pursuers,
}

/// A collector step together with the score of its best line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub to: usize,
    pub score: i32,
}

/// Output of [`Planner::find_best_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The collector's step, or `None` if no item is reachable.
    Collector(Option<ScoredMove>),
    /// One entry per pursuer, in input order; `None` where the collector
    /// cannot be reached.
    Pursuers(Vec<Option<usize>>),
}

/// Move selection for the collector and its pursuers.
///
/// Holds the [`PathGraph`] of the maze, built once. Every call is otherwise
/// stateless: positions and item states come in as arguments and the
/// caller's cells are never modified.
#[derive(Debug, Clone)]
pub struct Planner {
    graph: PathGraph,
    config: PlannerConfig,
}

impl Planner {
    pub fn new(grid: &Grid, config: PlannerConfig) -> Self {
        Self::with_graph(PathGraph::new(grid), config)
    }

    pub fn with_graph(graph: PathGraph, config: PlannerConfig) -> Self {
        Self { graph, config }
    }

    #[inline]
    pub fn graph(&self) -> &PathGraph {
        &self.graph
    }

    #[inline]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Score the position as it stands.
    pub fn outcome(&self, view: &dyn Tiles, collector: usize, pursuers: &[usize]) -> Outcome {
        evaluate(view, collector, pursuers)
    }

    /// Fail unless `view` has the shape of the planner's maze.
    fn check_view(&self, view: &dyn Tiles) -> Result<(), PlanError> {
        let grid = self.graph.grid();
        if view.width() == grid.width() && view.len() == grid.len() {
            Ok(())
        } else {
            Err(PlanError::ViewMismatch {
                width: grid.width(),
                len: grid.len(),
                view_width: view.width(),
                view_len: view.len(),
            })
        }
    }

    /// Fail unless every agent stands on a walkable cell of the maze.
    fn check_agents(&self, collector: usize, pursuers: &[usize]) -> Result<(), PlanError> {
        let grid = self.graph.grid();
        match std::iter::once(&collector)
            .chain(pursuers)
            .find(|&&i| !grid.is_walkable(i))
        {
            Some(&i) => Err(SearchError::InvalidPosition(i).into()),
            None => Ok(()),
        }
    }

    /// One uniform-cost step from `from` toward `to`. `None` when `to`
    /// cannot be reached.
    fn step_toward(&self, from: usize, to: usize) -> Result<Option<usize>, PlanError> {
        match self.graph.next_step(from, to) {
            Ok(step) => Ok(Some(step)),
            Err(err @ SearchError::Unreachable { .. }) => {
                log::debug!("no move from {from}: {err}");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// One step from `collector` toward its closest item.
    fn collector_step(
        &self,
        view: &dyn Tiles,
        collector: usize,
    ) -> Result<Option<usize>, PlanError> {
        match closest_item(view, collector) {
            Some(item) => self.step_toward(collector, item),
            None => Ok(None),
        }
    }

    /// Score the line that follows from this position.
    ///
    /// Each ply has a single move: the collector steps toward its closest
    /// item (collecting it in a layered view), or the pursuer steps toward
    /// the collector. Positions advance down the line; pickups are dropped
    /// with the layer when the call returns. The line ends when
    /// [`evaluate`] is terminal or `depth` reaches the configured cap, and
    /// the evaluation at that point is returned. An agent with no move stays
    /// where it is for that ply.
    pub fn minimax(
        &self,
        view: &dyn Tiles,
        collector: usize,
        pursuer: usize,
        depth: u32,
        maximizing: bool,
    ) -> Result<i32, PlanError> {
        self.check_view(view)?;
        self.check_agents(collector, &[pursuer])?;

        let outcome = evaluate(view, collector, &[pursuer]);
        if outcome.is_terminal() || depth >= self.config.max_depth {
            return Ok(outcome.score());
        }

        if maximizing {
            let step = self.collector_step(view, collector)?.unwrap_or(collector);
            if view.has_item(step) {
                let picked = Consumed::new(view, step);
                self.minimax(&picked, step, pursuer, depth + 1, false)
            } else {
                self.minimax(view, step, pursuer, depth + 1, false)
            }
        } else {
            let step = self.step_toward(pursuer, collector)?.unwrap_or(pursuer);
            self.minimax(view, collector, step, depth + 1, true)
        }
    }

    /// The collector's next step, scored against every pursuer.
    ///
    /// The step itself is fixed by uniform-cost search toward the closest
    /// item; the score is the best minimax value over the pursuers (or the
    /// plain evaluation when there are none). `Ok(None)` when no item is
    /// reachable.
    pub fn collector_move(
        &self,
        view: &dyn Tiles,
        collector: usize,
        pursuers: &[usize],
    ) -> Result<Option<ScoredMove>, PlanError> {
        self.check_view(view)?;
        self.check_agents(collector, pursuers)?;
        let Some(to) = self.collector_step(view, collector)? else {
            return Ok(None);
        };

        let picked;
        let after: &dyn Tiles = if view.has_item(to) {
            picked = Consumed::new(view, to);
            &picked
        } else {
            view
        };

        let mut best: Option<i32> = None;
        for &p in pursuers {
            let score = self.minimax(after, to, p, 0, false)?;
            best = Some(best.map_or(score, |b| b.max(score)));
        }
        let score = best.unwrap_or_else(|| evaluate(after, to, &[]).score());

        log::debug!("collector {collector} -> {to} (score {score})");
        Ok(Some(ScoredMove { to, score }))
    }

    /// Each pursuer's next step toward the collector, chosen independently.
    /// `None` for a pursuer that cannot reach the collector.
    pub fn pursuer_moves(
        &self,
        collector: usize,
        pursuers: &[usize],
    ) -> Result<Vec<Option<usize>>, PlanError> {
        self.check_agents(collector, pursuers)?;
        pursuers
            .iter()
            .map(|&p| self.step_toward(p, collector))
            .collect()
    }

    /// Plan the next move for `side`.
    pub fn find_best_move(
        &self,
        view: &dyn Tiles,
        collector: usize,
        pursuers: &[usize],
        side: Side,
    ) -> Result<Decision, PlanError> {
        match side {
            Side::Collector => self
                .collector_move(view, collector, pursuers)
                .map(Decision::Collector),
            Side::Pursuers => {
                self.check_view(view)?;
                self.pursuer_moves(collector, pursuers)
                    .map(Decision::Pursuers)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::Cell;

    fn open_grid(width: usize, height: usize, items: &[usize]) -> Grid {
        let mut grid = Grid::filled(width, height, Cell::Empty);
        for &i in items {
            grid.set(i, Cell::Item);
        }
        grid
    }

    #[test]
    fn collector_steps_toward_diagonal_item() {
        let grid = open_grid(4, 4, &[15]);
        let planner = Planner::new(&grid, PlannerConfig::default());
        let item = grid.point(15);
        for pursuers in [&[][..], &[12][..], &[3, 12][..]] {
            let Decision::Collector(Some(mv)) = planner
                .find_best_move(&grid, 0, pursuers, Side::Collector)
                .unwrap()
            else {
                panic!("expected a collector move");
            };
            let before = grid.point(0).manhattan(item);
            let after = grid.point(mv.to).manhattan(item);
            assert_eq!(before - after, 1);
            assert!(grid.is_adjacent(0, mv.to));
        }
    }

    #[test]
    fn adjacent_pursuer_captures() {
        let grid = open_grid(4, 4, &[15]);
        let planner = Planner::new(&grid, PlannerConfig::default());
        let (collector, pursuer) = (5, 6);
        let Decision::Pursuers(moves) = planner
            .find_best_move(&grid, collector, &[pursuer], Side::Pursuers)
            .unwrap()
        else {
            panic!("expected pursuer moves");
        };
        assert_eq!(moves, vec![Some(collector)]);
        assert_eq!(evaluate(&grid, collector, &[collector]), Outcome::Loss);
        assert_eq!(Outcome::Loss.score(), -10);
    }

    #[test]
    fn pursuers_move_independently() {
        // Walls split the row so the right-hand pursuer cannot reach.
        let grid = Grid::from_states(&[2, 2, 2, 0, 2], 5).unwrap();
        let planner = Planner::new(&grid, PlannerConfig::default());
        assert_eq!(
            planner.pursuer_moves(0, &[2, 4, 0]).unwrap(),
            vec![Some(1), None, Some(0)]
        );
    }

    #[test]
    fn agents_off_the_roads_are_rejected() {
        let mut grid = open_grid(4, 4, &[15]);
        grid.set(5, Cell::Wall);
        let planner = Planner::new(&grid, PlannerConfig::default());
        let invalid =
            |i: usize| -> Result<Decision, PlanError> { Err(SearchError::InvalidPosition(i).into()) };

        assert_eq!(
            planner.find_best_move(&grid, 5, &[0], Side::Collector),
            invalid(5)
        );
        assert_eq!(
            planner.find_best_move(&grid, 0, &[5, 999], Side::Pursuers),
            invalid(5)
        );
        assert_eq!(
            planner.find_best_move(&grid, 0, &[999], Side::Collector),
            invalid(999)
        );
        assert_eq!(
            planner.minimax(&grid, 0, 999, 0, true),
            Err(PlanError::Search(SearchError::InvalidPosition(999)))
        );

        // Still rejected when there is nothing left to collect.
        let cleared = open_grid(4, 4, &[]);
        let planner = Planner::new(&cleared, PlannerConfig::default());
        assert!(planner.collector_move(&cleared, 16, &[0]).is_err());
    }

    #[test]
    fn mismatched_view_is_rejected() {
        let grid = open_grid(4, 4, &[15]);
        let planner = Planner::new(&grid, PlannerConfig::default());
        let small = open_grid(3, 3, &[8]);
        let mismatch = PlanError::ViewMismatch {
            width: 4,
            len: 16,
            view_width: 3,
            view_len: 9,
        };
        for side in [Side::Collector, Side::Pursuers] {
            assert_eq!(
                planner.find_best_move(&small, 0, &[4], side),
                Err(mismatch.clone())
            );
        }
        // Same length, different width.
        let wide = open_grid(8, 2, &[15]);
        assert!(matches!(
            planner.minimax(&wide, 0, 4, 0, true),
            Err(PlanError::ViewMismatch { view_width: 8, .. })
        ));
    }

    #[test]
    fn unreachable_item_is_not_an_error() {
        let grid = Grid::from_states(&[2, 2, 0, 1], 4).unwrap();
        let planner = Planner::new(&grid, PlannerConfig::default());
        assert_eq!(
            planner.find_best_move(&grid, 0, &[1], Side::Collector),
            Ok(Decision::Collector(None))
        );
    }

    #[test]
    fn minimax_terminal_scores() {
        let grid = open_grid(3, 1, &[2]);
        let planner = Planner::new(&grid, PlannerConfig::default());
        // Already caught.
        assert_eq!(planner.minimax(&grid, 1, 1, 0, true), Ok(-10));
        // Collector at 1 grabs the item at 2 before the pursuer at 0 acts.
        assert_eq!(planner.minimax(&grid, 1, 0, 0, true), Ok(10));
        // Pursuer to move first catches the collector.
        assert_eq!(planner.minimax(&grid, 1, 0, 0, false), Ok(-10));
    }

    #[test]
    fn minimax_depth_cap_scores_neutral() {
        // Pursuer is walled off and the item is unreachable, so nothing ever
        // happens and the line runs to the cap.
        let grid = Grid::from_states(&[2, 2, 0, 1, 0, 2], 6).unwrap();
        let planner = Planner::new(&grid, PlannerConfig { max_depth: 8 });
        assert_eq!(planner.minimax(&grid, 0, 5, 0, true), Ok(0));
        assert_eq!(planner.minimax(&grid, 0, 5, 8, true), Ok(0));
    }

    #[test]
    fn collector_race_is_scored() {
        // 1-wide corridor: collector at 1, items at 0 and 4, pursuer at 3.
        // The nearest item is 0, and the collector clears 0 then walks into
        // the pursuer on the way to 4.
        let grid = open_grid(5, 1, &[0, 4]);
        let planner = Planner::new(&grid, PlannerConfig::default());
        let mv = planner.collector_move(&grid, 1, &[3]).unwrap().unwrap();
        assert_eq!(mv.to, 0);
        assert_eq!(mv.score, -10);

        // With the pursuer out of reach the collector clears the board.
        let walled = Grid::from_states(&[1, 2, 2, 2, 1, 0, 2], 7).unwrap();
        let planner = Planner::new(&walled, PlannerConfig::default());
        let mv = planner.collector_move(&walled, 1, &[6]).unwrap();
        assert_eq!(mv, Some(ScoredMove { to: 0, score: 10 }));
    }

    #[test]
    fn planning_leaves_the_grid_untouched() {
        let grid = open_grid(4, 4, &[1, 2, 3, 7, 11, 15]);
        let before = grid.clone();
        let planner = Planner::new(&grid, PlannerConfig::default());
        let _ = planner.find_best_move(&grid, 0, &[12], Side::Collector);
        assert_eq!(grid, before);
    }

    #[test]
    fn no_items_means_no_collector_move() {
        let grid = open_grid(3, 3, &[]);
        let planner = Planner::new(&grid, PlannerConfig::default());
        assert_eq!(
            planner.find_best_move(&grid, 4, &[0], Side::Collector),
            Ok(Decision::Collector(None))
        );
        assert_eq!(planner.outcome(&grid, 4, &[0]), Outcome::Win);
    }

    #[test]
    fn last_item_pickup_wins() {
        let grid = open_grid(3, 3, &[5]);
        let planner = Planner::new(&grid, PlannerConfig::default());
        let mv = planner.collector_move(&grid, 4, &[0]).unwrap();
        assert_eq!(mv, Some(ScoredMove { to: 5, score: 10 }));
    }
}
