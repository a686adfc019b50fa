//! Warnsdorff move advice.
//!
//! The advisor reads a snapshot and never touches engine state. It ranks
//! each legal destination by its onward degree and suggests the one that
//! leaves the fewest onward options, so that loosely constrained squares
//! stay reachable for later. This is a heuristic: it can still walk into a
//! dead end.

use super::knight::{knight_targets, legal_moves_from};
use super::{BoardDimensions, Position, TourState, VisitedPath};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A candidate destination with its onward degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedMove {
    /// Destination square.
    pub square: Position,
    /// Unvisited squares reachable from `square` once the knight lands there.
    pub onward_degree: usize,
}

/// Greedy next-move advisor.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveAdvisor;

impl MoveAdvisor {
    /// Suggests the next square for the knight, or `None` if there is no
    /// knight or no legal move.
    ///
    /// Ties on onward degree go to the candidate that comes first in
    /// [`KNIGHT_OFFSETS`](crate::KNIGHT_OFFSETS) order.
    #[instrument(skip(state), fields(phase = %state.phase(), score = state.score()))]
    pub fn suggest(state: &TourState) -> Option<Position> {
        let knight = state.knight()?;
        Self::suggest_from(&state.board(), state.visited(), knight)
    }

    /// Suggests the next square from explicit parts of a tour.
    pub fn suggest_from(
        board: &BoardDimensions,
        visited: &VisitedPath,
        knight: Position,
    ) -> Option<Position> {
        let best = Self::rank_from(board, visited, knight)
            .into_iter()
            .min_by_key(|ranked| ranked.onward_degree)?;
        debug!(square = %best.square, degree = best.onward_degree, "Suggested move");
        Some(best.square)
    }

    /// Every legal destination with its onward degree, in canonical order.
    pub fn rank(state: &TourState) -> Vec<RankedMove> {
        match state.knight() {
            Some(knight) => Self::rank_from(&state.board(), state.visited(), knight),
            None => Vec::new(),
        }
    }

    fn rank_from(board: &BoardDimensions, visited: &VisitedPath, knight: Position) -> Vec<RankedMove> {
        legal_moves_from(knight, board, visited)
            .into_iter()
            .map(|square| RankedMove {
                square,
                onward_degree: Self::onward_degree(board, visited, square),
            })
            .collect()
    }

    /// Counts the unvisited squares one knight's move from `candidate`,
    /// treating `candidate` itself as visited.
    pub fn onward_degree(board: &BoardDimensions, visited: &VisitedPath, candidate: Position) -> usize {
        knight_targets(candidate, *board)
            .filter(|pos| *pos != candidate && !visited.contains(pos))
            .count()
    }

    /// Walks a whole tour from `start` by always taking the suggestion.
    ///
    /// Stops when no suggestion remains, which is either a full tour or a
    /// dead end. Returns an empty path if `start` is off the board.
    #[instrument]
    pub fn greedy_tour(board: BoardDimensions, start: Position) -> VisitedPath {
        let mut path = VisitedPath::new();
        if !board.contains(start) {
            return path;
        }

        path.push(start);
        let mut knight = start;
        while let Some(next) = Self::suggest_from(&board, &path, knight) {
            path.push(next);
            knight = next;
        }

        debug!(
            length = path.len(),
            complete = path.len() == board.square_count(),
            "Greedy tour finished"
        );
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_knight_no_suggestion() {
        let state = TourState::not_started(BoardDimensions::chessboard());
        assert_eq!(MoveAdvisor::suggest(&state), None);
        assert!(MoveAdvisor::rank(&state).is_empty());
    }

    #[test]
    fn test_onward_degree_from_corner_neighbour() {
        let board = BoardDimensions::chessboard();
        let visited = VisitedPath::from(vec![Position::new(0, 0)]);
        // (1,2) reaches (3,3),(3,1),(2,4),(0,4),(2,0),(0,0); (0,0) is visited.
        assert_eq!(MoveAdvisor::onward_degree(&board, &visited, Position::new(1, 2)), 5);
    }

    #[test]
    fn test_rank_in_canonical_order() {
        let board = BoardDimensions::chessboard();
        let state = TourState::new(board, VisitedPath::from(vec![Position::new(0, 0)]));
        let squares: Vec<_> = MoveAdvisor::rank(&state).iter().map(|r| r.square).collect();
        assert_eq!(squares, vec![Position::new(2, 1), Position::new(1, 2)]);
    }

    #[test]
    fn test_greedy_tour_off_board_start() {
        let path = MoveAdvisor::greedy_tour(BoardDimensions::chessboard(), Position::new(-1, 0));
        assert!(path.is_empty());
    }
}
