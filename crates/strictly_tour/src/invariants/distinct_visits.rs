//! Distinct visits invariant: no square appears twice in the path.

use super::Invariant;
use crate::TourState;
use std::collections::HashSet;

/// Invariant: the visited path contains no duplicate square.
pub struct DistinctVisitsInvariant;

impl Invariant<TourState> for DistinctVisitsInvariant {
    fn holds(tour: &TourState) -> bool {
        let mut seen = HashSet::with_capacity(tour.visited().len());
        tour.visited().iter().all(|pos| seen.insert(*pos))
    }

    fn description() -> &'static str {
        "Visited path contains no duplicate squares"
    }
}
