//! Knight geometry shared by the engine and the advisor.

use super::{BoardDimensions, Position, VisitedPath};
use tracing::instrument;

/// The eight knight offsets, in the canonical order used for tie-breaks.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Checks whether `to` is exactly one knight's move from `from`.
pub fn is_knight_step(from: Position, to: Position) -> bool {
    let d_row = (i64::from(to.row) - i64::from(from.row)).abs();
    let d_col = (i64::from(to.col) - i64::from(from.col)).abs();
    matches!((d_row, d_col), (1, 2) | (2, 1))
}

/// On-board squares one knight's move from `from`, in canonical order.
pub fn knight_targets(
    from: Position,
    board: BoardDimensions,
) -> impl Iterator<Item = Position> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(move |&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(move |pos| board.contains(*pos))
}

/// On-board, unvisited squares one knight's move from `from`, in canonical
/// order.
///
/// This is the single legality query for both the engine and the advisor.
#[instrument(skip(visited), fields(visited = visited.len()))]
pub fn legal_moves_from(
    from: Position,
    board: &BoardDimensions,
    visited: &VisitedPath,
) -> Vec<Position> {
    knight_targets(from, *board)
        .filter(|pos| !visited.contains(pos))
        .collect()
}
