//! Phase-specific typestate structs for the knight's tour.
//!
//! Each phase is its own type with phase-specific fields. A
//! [`TourInProgress`] always has a knight, and a [`TourFinished`] always has
//! an [`Outcome`], so neither needs an `Option` for them.

use super::action::{FinalScore, MoveError, Outcome};
use super::contracts::{Contract, OnBoard, StepContract};
use super::knight::legal_moves_from;
use super::{BoardDimensions, Position, TourState, VisitedPath, rules};
use tracing::{debug, info, instrument};

/// A transition that was refused, handing the unchanged tour back.
#[derive(Debug, Clone)]
pub struct Refused<T> {
    /// The tour, exactly as it was before the attempt.
    pub tour: T,
    /// Why the transition was refused.
    pub error: MoveError,
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Tour waiting for its starting square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourSetup {
    board: BoardDimensions,
}

impl TourSetup {
    /// Creates a tour in setup phase.
    #[instrument]
    pub fn new(board: BoardDimensions) -> Self {
        Self { board }
    }

    /// Returns the board.
    pub fn board(&self) -> BoardDimensions {
        self.board
    }

    /// Places the knight on its starting square.
    ///
    /// Any on-board square is a legal start. The tour may finish
    /// immediately: a 1x1 board is won, and a square with no knight moves
    /// is lost.
    ///
    /// # Errors
    ///
    /// Refuses off-board squares with [`MoveError::OutOfBoundsSelection`].
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn start(self, square: Position) -> Result<TourResult, Refused<Self>> {
        if let Err(error) = OnBoard::check(square, &self.board) {
            return Err(Refused { tour: self, error });
        }

        let mut path = VisitedPath::new();
        path.push(square);
        info!(%square, "Tour started");

        Ok(TourResult::classify(TourInProgress {
            board: self.board,
            knight: square,
            path,
        }))
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Tour in progress: the knight is on the board and can still move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourInProgress {
    pub(super) board: BoardDimensions,
    pub(super) knight: Position,
    pub(super) path: VisitedPath,
}

impl TourInProgress {
    /// Moves the knight, consuming self and transitioning to the next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always ([`StepContract`])
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(knight = %self.knight))]
    pub fn advance(self, to: Position) -> Result<TourResult, Refused<Self>> {
        if let Err(error) = StepContract::pre(&self, &to) {
            debug!(%error, "Step refused");
            return Err(Refused { tour: self, error });
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut tour = self;
        tour.path.push(to);
        tour.knight = to;

        #[cfg(debug_assertions)]
        {
            if let Err(error) = StepContract::post(&before, &tour) {
                return Err(Refused { tour, error });
            }
        }

        debug!(score = tour.path.len(), "Knight moved");
        Ok(TourResult::classify(tour))
    }

    /// Returns the board.
    pub fn board(&self) -> BoardDimensions {
        self.board
    }

    /// Returns the knight's square.
    pub fn knight(&self) -> Position {
        self.knight
    }

    /// Returns the visited path.
    pub fn visited(&self) -> &VisitedPath {
        &self.path
    }

    /// Legal destinations from the knight's square.
    pub fn legal_moves(&self) -> Vec<Position> {
        legal_moves_from(self.knight, &self.board, &self.path)
    }

    /// Snapshot of this tour.
    pub fn snapshot(&self) -> TourState {
        TourState::new(self.board, self.path.clone())
    }

    /// Rebuilds a tour by replaying a recorded path from setup.
    ///
    /// # Errors
    ///
    /// Returns the first refused step, or [`MoveError::TourOver`] if the
    /// path keeps going after the tour finished. An empty path is refused
    /// as [`MoveError::TourOver`] too, since there is no knight to place.
    #[instrument(skip(path), fields(steps = path.len()))]
    pub fn replay(board: BoardDimensions, path: &[Position]) -> Result<TourResult, MoveError> {
        let Some((&first, rest)) = path.split_first() else {
            return Err(MoveError::TourOver);
        };

        let mut result = TourSetup::new(board).start(first).map_err(|r| r.error)?;
        for &square in rest {
            result = match result {
                TourResult::InProgress(tour) => tour.advance(square).map_err(|r| r.error)?,
                TourResult::Finished(_) => return Err(MoveError::TourOver),
            };
        }
        Ok(result)
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Finished tour: the outcome is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourFinished {
    board: BoardDimensions,
    path: VisitedPath,
    outcome: Outcome,
}

impl TourFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> BoardDimensions {
        self.board
    }

    /// Returns the visited path.
    pub fn visited(&self) -> &VisitedPath {
        &self.path
    }

    /// Outcome and score for the leaderboard.
    pub fn final_score(&self) -> FinalScore {
        FinalScore {
            outcome: self.outcome,
            score: self.path.len(),
        }
    }

    /// Snapshot of this tour.
    pub fn snapshot(&self) -> TourState {
        TourState::new(self.board, self.path.clone())
    }

    /// Restarts on the same board (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> TourSetup {
        TourSetup::new(self.board)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of placing or moving the knight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourResult {
    /// Tour continues.
    InProgress(TourInProgress),
    /// Tour finished.
    Finished(TourFinished),
}

impl TourResult {
    /// Snapshot of the tour, whichever phase it is in.
    pub fn snapshot(&self) -> TourState {
        match self {
            TourResult::InProgress(tour) => tour.snapshot(),
            TourResult::Finished(tour) => tour.snapshot(),
        }
    }

    /// Sorts a freshly updated tour into its phase.
    fn classify(tour: TourInProgress) -> Self {
        let outcome = if rules::is_complete(&tour.board, &tour.path) {
            Outcome::Won
        } else if rules::is_stuck(&tour.board, &tour.path, tour.knight) {
            Outcome::Lost
        } else {
            return TourResult::InProgress(tour);
        };

        info!(%outcome, score = tour.path.len(), "Tour finished");
        TourResult::Finished(TourFinished {
            board: tour.board,
            path: tour.path,
            outcome,
        })
    }
}
