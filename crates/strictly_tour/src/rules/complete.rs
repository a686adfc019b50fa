//! Completion: every square visited.

use super::super::{BoardDimensions, VisitedPath};

/// Checks whether the path covers the whole board.
pub fn is_complete(board: &BoardDimensions, visited: &VisitedPath) -> bool {
    visited.len() == board.square_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_path_incomplete() {
        let board = BoardDimensions::new(1, 1).unwrap();
        assert!(!is_complete(&board, &VisitedPath::new()));
    }

    #[test]
    fn test_full_path_complete() {
        let board = BoardDimensions::new(1, 2).unwrap();
        let visited = VisitedPath::from(vec![Position::new(0, 0), Position::new(0, 1)]);
        assert!(is_complete(&board, &visited));
    }
}
