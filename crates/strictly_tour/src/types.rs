//! Core domain types for the knight's tour.

use super::action::TourError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::instrument;

/// A square on the board, as zero-based (row, column) coordinates.
///
/// Coordinates are signed so that an off-board click can still be
/// represented and rejected by the engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Zero-based row index.
    pub row: i32,
    /// Zero-based column index.
    pub col: i32,
}

impl Position {
    /// Creates a new position.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the position shifted by the given deltas, or `None` on overflow.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(d_row)?,
            col: self.col.checked_add(d_col)?,
        })
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Board size, fixed for the lifetime of one tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "DimensionsRepr")]
#[display("{rows}x{cols}")]
pub struct BoardDimensions {
    rows: i32,
    cols: i32,
}

impl BoardDimensions {
    /// Creates validated board dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InvalidDimensions`] if either side is not positive.
    #[instrument]
    pub fn new(rows: i32, cols: i32) -> Result<Self, TourError> {
        if rows <= 0 || cols <= 0 {
            return Err(TourError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Standard 8x8 chess board.
    pub const fn chessboard() -> Self {
        Self { rows: 8, cols: 8 }
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of squares, which is also the winning score.
    pub fn square_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Checks whether the position lies on this board.
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.rows).contains(&pos.row) && (0..self.cols).contains(&pos.col)
    }

    /// Iterates every square in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }
}

#[derive(Deserialize)]
struct DimensionsRepr {
    rows: i32,
    cols: i32,
}

impl TryFrom<DimensionsRepr> for BoardDimensions {
    type Error = TourError;

    fn try_from(repr: DimensionsRepr) -> Result<Self, Self::Error> {
        Self::new(repr.rows, repr.cols)
    }
}

impl Default for BoardDimensions {
    fn default() -> Self {
        Self::chessboard()
    }
}

/// Ordered, duplicate-free record of the squares the knight has visited.
///
/// The length of the path is the player's score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Position>", into = "Vec<Position>")]
pub struct VisitedPath {
    squares: Vec<Position>,
    seen: HashSet<Position>,
}

impl VisitedPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a square. Returns `false` and leaves the path untouched if
    /// the square was already visited.
    pub fn push(&mut self, pos: Position) -> bool {
        if !self.seen.insert(pos) {
            return false;
        }
        self.squares.push(pos);
        true
    }

    /// Checks whether the square has been visited.
    pub fn contains(&self, pos: &Position) -> bool {
        self.seen.contains(pos)
    }

    /// Number of visited squares.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Returns true if no square has been visited.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// The most recently visited square.
    pub fn last(&self) -> Option<Position> {
        self.squares.last().copied()
    }

    /// Visited squares in visiting order.
    pub fn as_slice(&self) -> &[Position] {
        &self.squares
    }

    /// Iterates visited squares in visiting order.
    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.squares.iter()
    }

    /// Ordinal (1-based) at which the square was visited.
    pub fn ordinal(&self, pos: &Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        self.squares.iter().position(|p| p == pos).map(|i| i + 1)
    }

    /// Builds a path that may contain duplicates, bypassing the distinctness
    /// check. Used to exercise invariant detection.
    #[cfg(test)]
    pub(crate) fn from_raw(squares: Vec<Position>) -> Self {
        let seen = squares.iter().copied().collect();
        Self { squares, seen }
    }
}

impl PartialEq for VisitedPath {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
    }
}

impl Eq for VisitedPath {}

impl From<Vec<Position>> for VisitedPath {
    fn from(squares: Vec<Position>) -> Self {
        let mut path = Self::new();
        for pos in squares {
            path.push(pos);
        }
        path
    }
}

impl From<VisitedPath> for Vec<Position> {
    fn from(path: VisitedPath) -> Self {
        path.squares
    }
}

impl<'a> IntoIterator for &'a VisitedPath {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lifecycle phase of a tour, derived from the board, path and knight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Phase {
    /// No square picked yet.
    #[strum(to_string = "not started")]
    NotStarted,
    /// Knight placed, unvisited squares still reachable.
    #[strum(to_string = "in progress")]
    InProgress,
    /// Every square visited.
    #[strum(to_string = "won")]
    Won,
    /// Tour incomplete and the knight has no legal move.
    #[strum(to_string = "lost")]
    Lost,
}

impl Phase {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// Immutable snapshot of a tour, handed to renderers and the advisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourState {
    pub(crate) board: BoardDimensions,
    pub(crate) knight: Option<Position>,
    pub(crate) visited: VisitedPath,
    pub(crate) phase: Phase,
}

impl TourState {
    /// Builds a snapshot, deriving the knight and phase from the path.
    #[instrument(skip(visited), fields(visited = visited.len()))]
    pub fn new(board: BoardDimensions, visited: VisitedPath) -> Self {
        let knight = visited.last();
        let phase = super::rules::phase_of(&board, &visited, knight);
        Self {
            board,
            knight,
            visited,
            phase,
        }
    }

    /// Snapshot of a tour that has not started.
    pub fn not_started(board: BoardDimensions) -> Self {
        Self::new(board, VisitedPath::new())
    }

    /// Board dimensions.
    pub fn board(&self) -> BoardDimensions {
        self.board
    }

    /// Current knight square, absent before the first pick.
    pub fn knight(&self) -> Option<Position> {
        self.knight
    }

    /// Visited path in order.
    pub fn visited(&self) -> &VisitedPath {
        &self.visited
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Score, the number of visited squares.
    pub fn score(&self) -> usize {
        self.visited.len()
    }
}
