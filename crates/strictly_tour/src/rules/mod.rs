//! Tour rules.
//!
//! Pure functions that evaluate a board, path and knight square. Rules are
//! kept apart from storage so the typestate machine, the engine snapshot
//! and the invariants all derive phase the same way.

pub mod complete;
pub mod stuck;

pub use complete::is_complete;
pub use stuck::is_stuck;

use super::{BoardDimensions, Phase, Position, VisitedPath};
use tracing::instrument;

/// Derives the phase of a tour.
///
/// A full board is `Won` even though the knight necessarily has no moves
/// left, so completion is checked before being stuck.
#[instrument(skip(visited), fields(visited = visited.len()))]
pub fn phase_of(board: &BoardDimensions, visited: &VisitedPath, knight: Option<Position>) -> Phase {
    let Some(knight) = knight else {
        return Phase::NotStarted;
    };
    if is_complete(board, visited) {
        Phase::Won
    } else if is_stuck(board, visited, knight) {
        Phase::Lost
    } else {
        Phase::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_knight_is_not_started() {
        let board = BoardDimensions::chessboard();
        assert_eq!(phase_of(&board, &VisitedPath::new(), None), Phase::NotStarted);
    }

    #[test]
    fn test_single_square_board_is_won() {
        let board = BoardDimensions::new(1, 1).unwrap();
        let visited = VisitedPath::from(vec![Position::new(0, 0)]);
        assert_eq!(phase_of(&board, &visited, visited.last()), Phase::Won);
    }

    #[test]
    fn test_corner_start_is_in_progress() {
        let board = BoardDimensions::chessboard();
        let visited = VisitedPath::from(vec![Position::new(0, 0)]);
        assert_eq!(phase_of(&board, &visited, visited.last()), Phase::InProgress);
    }
}
