//! Tour engine: the single owner of an active tour.
//!
//! The engine wraps the typestate phases in one mutable slot so a UI can
//! forward clicks without tracking phases itself. Every call returns a
//! fresh [`TourState`] snapshot for rendering.

use super::action::{FinalScore, MoveError, Selection, TourError};
use super::advisor::MoveAdvisor;
use super::knight::legal_moves_from;
use super::typestate::{TourFinished, TourInProgress, TourResult, TourSetup};
use super::{BoardDimensions, Phase, Position, TourState, VisitedPath};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// A tour in any phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyTour {
    /// No square picked yet.
    Setup(TourSetup),
    /// Knight on the board with moves left.
    InProgress(TourInProgress),
    /// Won or lost.
    Finished(TourFinished),
}

impl AnyTour {
    /// Returns the board.
    pub fn board(&self) -> BoardDimensions {
        match self {
            AnyTour::Setup(tour) => tour.board(),
            AnyTour::InProgress(tour) => tour.board(),
            AnyTour::Finished(tour) => tour.board(),
        }
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        match self {
            AnyTour::Setup(_) => Phase::NotStarted,
            AnyTour::InProgress(_) => Phase::InProgress,
            AnyTour::Finished(tour) => tour.outcome().into(),
        }
    }

    /// Snapshot of the tour.
    pub fn snapshot(&self) -> TourState {
        match self {
            AnyTour::Setup(tour) => TourState::not_started(tour.board()),
            AnyTour::InProgress(tour) => tour.snapshot(),
            AnyTour::Finished(tour) => tour.snapshot(),
        }
    }
}

impl From<TourResult> for AnyTour {
    fn from(result: TourResult) -> Self {
        match result {
            TourResult::InProgress(tour) => AnyTour::InProgress(tour),
            TourResult::Finished(tour) => AnyTour::Finished(tour),
        }
    }
}

/// What a renderer needs after a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionReport {
    /// Effect of the selection.
    pub selection: Selection,
    /// Tour after the selection.
    pub state: TourState,
    /// Present only on the selection that ended the tour.
    pub finished: Option<FinalScore>,
}

/// Owns the active tour and applies the knight's tour rules to clicks.
#[derive(Debug, Clone)]
pub struct TourEngine {
    tour: AnyTour,
    revealing: bool,
}

impl TourEngine {
    /// Creates an engine with a not-yet-started tour on the given board.
    #[instrument]
    pub fn new(board: BoardDimensions) -> Self {
        Self {
            tour: AnyTour::Setup(TourSetup::new(board)),
            revealing: false,
        }
    }

    /// Creates an engine from raw dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InvalidDimensions`] for non-positive sides.
    pub fn with_size(rows: i32, cols: i32) -> Result<Self, TourError> {
        Ok(Self::new(BoardDimensions::new(rows, cols)?))
    }

    /// Starts over on a new board.
    #[instrument(skip(self))]
    pub fn start(&mut self, board: BoardDimensions) {
        info!(%board, "New tour configured");
        self.tour = AnyTour::Setup(TourSetup::new(board));
        self.revealing = false;
    }

    /// Validates raw dimensions and starts over on that board. On error the
    /// current tour is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InvalidDimensions`] for non-positive sides.
    #[instrument(skip(self))]
    pub fn configure(&mut self, rows: i32, cols: i32) -> Result<(), TourError> {
        let board = BoardDimensions::new(rows, cols)?;
        self.start(board);
        Ok(())
    }

    /// Returns to the not-started phase on the same board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let board = self.board();
        debug!(%board, "Tour reset");
        self.start(board);
    }

    /// Returns the board.
    pub fn board(&self) -> BoardDimensions {
        self.tour.board()
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.tour.phase()
    }

    /// Returns the tour in its typestate form.
    pub fn tour(&self) -> &AnyTour {
        &self.tour
    }

    /// Snapshot of the current tour.
    pub fn snapshot(&self) -> TourState {
        self.tour.snapshot()
    }

    /// Handles a click on a square.
    ///
    /// - Before the tour starts, any on-board square becomes the start.
    /// - Clicking the knight's own square reveals its legal moves.
    /// - Clicking a legal destination moves the knight.
    /// - Anything else is rejected and clears the reveal.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn select_square(&mut self, square: Position) -> SelectionReport {
        let placeholder = AnyTour::Setup(TourSetup::new(self.board()));
        let (tour, selection) = match std::mem::replace(&mut self.tour, placeholder) {
            AnyTour::Setup(setup) => match setup.start(square) {
                Ok(result) => (result.into(), Selection::Started(square)),
                Err(refused) => (AnyTour::Setup(refused.tour), Selection::Rejected(refused.error)),
            },
            AnyTour::InProgress(tour) if tour.knight() == square => {
                let moves = tour.legal_moves();
                (AnyTour::InProgress(tour), Selection::Revealed(moves))
            }
            AnyTour::InProgress(tour) => {
                let from = tour.knight();
                match tour.advance(square) {
                    Ok(result) => (result.into(), Selection::Moved { from, to: square }),
                    Err(refused) => (
                        AnyTour::InProgress(refused.tour),
                        Selection::Rejected(refused.error),
                    ),
                }
            }
            AnyTour::Finished(tour) => (
                AnyTour::Finished(tour),
                Selection::Rejected(MoveError::TourOver),
            ),
        };

        self.tour = tour;
        self.revealing = matches!(selection, Selection::Revealed(_));

        let finished = match &self.tour {
            AnyTour::Finished(done) if selection.is_mutating() => Some(done.final_score()),
            _ => None,
        };
        if let Selection::Rejected(error) = &selection {
            debug!(%error, "Selection rejected");
        }

        SelectionReport {
            selection,
            state: self.snapshot(),
            finished,
        }
    }

    /// Legal destinations from any square, given the current path.
    pub fn legal_moves_from(&self, square: Position) -> Vec<Position> {
        let empty = VisitedPath::new();
        let visited = match &self.tour {
            AnyTour::Setup(_) => &empty,
            AnyTour::InProgress(tour) => tour.visited(),
            AnyTour::Finished(tour) => tour.visited(),
        };
        legal_moves_from(square, &self.board(), visited)
    }

    /// Squares to highlight: the knight's legal moves while a reveal is
    /// active, otherwise none.
    pub fn highlighted(&self) -> Vec<Position> {
        match &self.tour {
            AnyTour::InProgress(tour) if self.revealing => tour.legal_moves(),
            _ => Vec::new(),
        }
    }

    /// Returns true while the knight's own square is selected.
    pub fn is_revealing(&self) -> bool {
        self.revealing
    }

    /// Asks the advisor for a move from the current tour.
    pub fn suggest(&self) -> Option<Position> {
        match &self.tour {
            AnyTour::InProgress(tour) => {
                MoveAdvisor::suggest_from(&tour.board(), tour.visited(), tour.knight())
            }
            _ => None,
        }
    }
}

impl Default for TourEngine {
    fn default() -> Self {
        Self::new(BoardDimensions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_then_move_clears_reveal() {
        let mut engine = TourEngine::default();
        engine.select_square(Position::new(0, 0));
        engine.select_square(Position::new(0, 0));
        assert!(engine.is_revealing());
        assert_eq!(engine.highlighted().len(), 2);

        engine.select_square(Position::new(2, 1));
        assert!(!engine.is_revealing());
        assert!(engine.highlighted().is_empty());
    }

    #[test]
    fn test_rejected_click_clears_reveal() {
        let mut engine = TourEngine::default();
        engine.select_square(Position::new(0, 0));
        engine.select_square(Position::new(0, 0));
        let report = engine.select_square(Position::new(7, 7));
        assert!(matches!(report.selection, Selection::Rejected(_)));
        assert!(!engine.is_revealing());
    }

    #[test]
    fn test_configure_rejects_without_touching_tour() {
        let mut engine = TourEngine::default();
        engine.select_square(Position::new(3, 3));
        assert!(engine.configure(0, 4).is_err());
        assert_eq!(engine.snapshot().score(), 1);
    }

    #[test]
    fn test_legal_moves_before_start_see_whole_board() {
        let engine = TourEngine::default();
        assert_eq!(engine.legal_moves_from(Position::new(4, 4)).len(), 8);
    }
}
