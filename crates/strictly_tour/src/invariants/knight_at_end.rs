//! Knight position invariant: the knight sits on the last visited square.

use super::Invariant;
use crate::TourState;

/// Invariant: the knight is present exactly when the path is non-empty, and
/// then equals the path's last square.
pub struct KnightAtEndInvariant;

impl Invariant<TourState> for KnightAtEndInvariant {
    fn holds(tour: &TourState) -> bool {
        tour.knight() == tour.visited().last()
    }

    fn description() -> &'static str {
        "Knight stands on the last visited square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardDimensions, Position, VisitedPath};

    #[test]
    fn test_absent_knight_with_empty_path_holds() {
        let tour = TourState::not_started(BoardDimensions::chessboard());
        assert!(KnightAtEndInvariant::holds(&tour));
    }

    #[test]
    fn test_displaced_knight_detected() {
        let mut tour = TourState::new(
            BoardDimensions::chessboard(),
            VisitedPath::from(vec![Position::new(0, 0), Position::new(1, 2)]),
        );
        tour.knight = Some(Position::new(0, 0));
        assert!(!KnightAtEndInvariant::holds(&tour));
    }
}
