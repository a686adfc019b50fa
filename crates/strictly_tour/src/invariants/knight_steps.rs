//! Knight step invariant: consecutive squares are one knight's move apart.

use super::Invariant;
use crate::TourState;
use crate::knight::is_knight_step;

/// Invariant: each square after the first is a knight's move from the one
/// before it.
pub struct KnightStepsInvariant;

impl Invariant<TourState> for KnightStepsInvariant {
    fn holds(tour: &TourState) -> bool {
        tour.visited()
            .as_slice()
            .windows(2)
            .all(|pair| is_knight_step(pair[0], pair[1]))
    }

    fn description() -> &'static str {
        "Consecutive visited squares are a knight's move apart"
    }
}
