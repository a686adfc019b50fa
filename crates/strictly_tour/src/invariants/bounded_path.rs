//! Bounded path invariant: every visited square lies on the board.

use super::Invariant;
use crate::TourState;

/// Invariant: every visited square is inside the board.
pub struct BoundedPathInvariant;

impl Invariant<TourState> for BoundedPathInvariant {
    fn holds(tour: &TourState) -> bool {
        let board = tour.board();
        tour.visited().iter().all(|pos| board.contains(*pos))
    }

    fn description() -> &'static str {
        "Visited squares lie on the board"
    }
}
