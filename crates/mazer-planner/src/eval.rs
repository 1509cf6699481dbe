//! Position scoring.

use mazer_core::Tiles;

/// Result of scoring a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Every item has been collected.
    Win,
    /// A pursuer stands on the collector's cell.
    Loss,
    Neutral,
}

impl Outcome {
    /// Minimax value: +10, -10 or 0.
    #[inline]
    pub const fn score(self) -> i32 {
        match self {
            Outcome::Win => 10,
            Outcome::Loss => -10,
            Outcome::Neutral => 0,
        }
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Neutral)
    }
}

/// Score a position. A cleared maze wins even if a pursuer has caught the
/// collector on the same turn.
pub fn evaluate<T: Tiles + ?Sized>(view: &T, collector: usize, pursuers: &[usize]) -> Outcome {
    if !view.any_items() {
        Outcome::Win
    } else if pursuers.contains(&collector) {
        Outcome::Loss
    } else {
        Outcome::Neutral
    }
}

/// Whether the game is over for this position.
pub fn is_end<T: Tiles + ?Sized>(view: &T, collector: usize, pursuers: &[usize]) -> bool {
    evaluate(view, collector, pursuers).is_terminal()
}

/// The item nearest to `collector` by straight-line distance over (column,
/// row) coordinates. Ties go to the first item in row-major order.
pub fn closest_item<T: Tiles + ?Sized>(view: &T, collector: usize) -> Option<usize> {
    let from = view.point(collector);
    let mut best: Option<(usize, i32)> = None;
    for i in (0..view.len()).filter(|&i| view.has_item(i)) {
        // Squared distance orders the same as distance.
        let d = from.distance_sq(view.point(i));
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}
