//! First-class selection results and errors for the knight's tour.
//!
//! A click on the board is a domain event. Its effect is reported as a
//! [`Selection`] instead of through UI flags threaded through engine state.

use super::{Phase, Position};
use serde::{Deserialize, Serialize};

/// Error configuring a tour.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TourError {
    /// A board side was zero or negative.
    #[display("Invalid board dimensions {rows}x{cols}: both sides must be positive")]
    InvalidDimensions {
        /// Requested rows.
        rows: i32,
        /// Requested columns.
        cols: i32,
    },
}

impl std::error::Error for TourError {}

/// Reason a square selection was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The square lies outside the board.
    #[display("Square {} is off the board", _0)]
    OutOfBoundsSelection(Position),

    /// The square was visited earlier in the tour.
    #[display("Square {} has already been visited", _0)]
    AlreadyVisited(Position),

    /// The square is not one knight's move away.
    #[display("{to} is not a knight's move from {from}")]
    NotAKnightMove {
        /// Current knight square.
        from: Position,
        /// Requested square.
        to: Position,
    },

    /// The tour is won or lost and awaits a reset.
    #[display("Tour is already over")]
    TourOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// How a finished tour ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Every square was visited.
    #[display("won")]
    Won,
    /// The knight ran out of moves.
    #[display("lost")]
    Lost,
}

impl From<Outcome> for Phase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => Phase::Won,
            Outcome::Lost => Phase::Lost,
        }
    }
}

/// Final result handed to the leaderboard at the moment a tour ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{outcome} with score {score}")]
pub struct FinalScore {
    /// How the tour ended.
    pub outcome: Outcome,
    /// Number of visited squares.
    pub score: usize,
}

/// Effect of a single square selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// The knight was placed on its starting square.
    Started(Position),
    /// The knight's own square was re-selected; these are its legal moves.
    Revealed(Vec<Position>),
    /// The knight moved.
    Moved {
        /// Square the knight left.
        from: Position,
        /// Square the knight landed on.
        to: Position,
    },
    /// Nothing changed.
    Rejected(MoveError),
}

impl Selection {
    /// Returns true if the selection changed the tour.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Selection::Started(_) | Selection::Moved { .. })
    }
}
