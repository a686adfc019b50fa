//! Dead ends: no unvisited square reachable from the knight.

use super::super::knight::knight_targets;
use super::super::{BoardDimensions, Position, VisitedPath};

/// Checks whether the knight has no legal move.
pub fn is_stuck(board: &BoardDimensions, visited: &VisitedPath, knight: Position) -> bool {
    knight_targets(knight, *board).all(|pos| visited.contains(&pos))
}
