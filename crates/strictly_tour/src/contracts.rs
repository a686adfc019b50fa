//! Contract-based validation for knight steps.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::check_tour;
use super::knight::is_knight_step;
use super::typestate::TourInProgress;
use super::{BoardDimensions, Position, VisitedPath};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Step Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the square lies on the board.
pub struct OnBoard;

impl OnBoard {
    /// Rejects squares outside `[0, rows) x [0, cols)`.
    #[instrument]
    pub fn check(to: Position, board: &BoardDimensions) -> Result<(), MoveError> {
        if board.contains(to) {
            Ok(())
        } else {
            Err(MoveError::OutOfBoundsSelection(to))
        }
    }
}

/// Precondition: the square has not been visited.
pub struct Unvisited;

impl Unvisited {
    /// Rejects squares already in the path.
    #[instrument(skip(visited))]
    pub fn check(to: Position, visited: &VisitedPath) -> Result<(), MoveError> {
        if visited.contains(&to) {
            Err(MoveError::AlreadyVisited(to))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square is one knight's move from the knight.
pub struct KnightStep;

impl KnightStep {
    /// Rejects anything but an L-shaped step.
    #[instrument]
    pub fn check(from: Position, to: Position) -> Result<(), MoveError> {
        if is_knight_step(from, to) {
            Ok(())
        } else {
            Err(MoveError::NotAKnightMove { from, to })
        }
    }
}

/// Composite precondition: a step is legal if it stays on the board, lands
/// on an unvisited square and is shaped like a knight's move.
pub struct LegalStep;

impl LegalStep {
    /// Validates all preconditions for a step.
    #[instrument(skip(tour))]
    pub fn check(to: Position, tour: &TourInProgress) -> Result<(), MoveError> {
        OnBoard::check(to, &tour.board())?;
        Unvisited::check(to, tour.visited())?;
        KnightStep::check(tour.knight(), to)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Step Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for knight steps.
///
/// Preconditions:
/// - Target is on the board
/// - Target is unvisited
/// - Target is a knight's move away
///
/// Postconditions:
/// - Path grew by exactly one square
/// - All tour invariants still hold
pub struct StepContract;

impl Contract<TourInProgress, Position> for StepContract {
    fn pre(tour: &TourInProgress, to: &Position) -> Result<(), MoveError> {
        LegalStep::check(*to, tour)
    }

    fn post(before: &TourInProgress, after: &TourInProgress) -> Result<(), MoveError> {
        if after.visited().len() != before.visited().len() + 1 {
            warn!(
                before = before.visited().len(),
                after = after.visited().len(),
                "Path did not grow by one square"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: path must grow by exactly one square".to_string(),
            ));
        }

        check_tour(&after.snapshot()).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Tour invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
