//! One-shot reports for the `solve` and `hint` commands.

use crate::command::parse_position;
use crate::render::render_board;
use anyhow::{Context, Result};
use serde::Serialize;
use strictly_tour::{BoardDimensions, MoveAdvisor, Position, TourInProgress, TourState};
use tracing::{info, instrument};

/// Result of a greedy tour.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// Board the tour ran on.
    pub board: BoardDimensions,
    /// Whether every square was visited.
    pub complete: bool,
    /// Squares in visiting order.
    pub path: Vec<Position>,
}

/// Walks a greedy tour from `start`.
///
/// # Errors
///
/// Fails on invalid dimensions or an off-board start.
#[instrument]
pub fn solve(rows: i32, cols: i32, start: Position) -> Result<SolveReport> {
    let board = BoardDimensions::new(rows, cols)?;
    anyhow::ensure!(board.contains(start), "Start {} is off the {} board", start, board);

    let path = MoveAdvisor::greedy_tour(board, start);
    let complete = path.len() == board.square_count();
    info!(complete, length = path.len(), "Solve finished");
    Ok(SolveReport {
        board,
        complete,
        path: path.into(),
    })
}

impl SolveReport {
    /// Text board with visit order and a summary line.
    pub fn to_text(&self) -> String {
        let state = TourState::new(self.board, self.path.clone().into());
        let summary = if self.complete {
            format!("Complete tour: {}/{} squares", self.path.len(), self.board.square_count())
        } else {
            format!(
                "Dead end after {}/{} squares",
                self.path.len(),
                self.board.square_count()
            )
        };
        format!("{}{}", render_board(&state, &[], None), summary)
    }

    /// Pretty JSON.
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize solve report")
    }
}

/// Replays `path` and describes the advisor's suggestion.
///
/// # Errors
///
/// Fails on invalid dimensions, malformed squares, or an illegal path.
#[instrument(skip(path))]
pub fn hint(rows: i32, cols: i32, path: &[String]) -> Result<String> {
    let board = BoardDimensions::new(rows, cols)?;
    let squares = path
        .iter()
        .map(|token| parse_position(token))
        .collect::<Result<Vec<_>, _>>()?;

    let state = TourInProgress::replay(board, &squares)
        .context("Path is not a legal tour")?
        .snapshot();

    let ranked = MoveAdvisor::rank(&state)
        .iter()
        .map(|r| format!("  {} onward {}", r.square, r.onward_degree))
        .collect::<Vec<_>>();

    Ok(match MoveAdvisor::suggest(&state) {
        Some(next) => format!("Suggested move: {}\nCandidates:\n{}", next, ranked.join("\n")),
        None => format!("No suggestion: tour is {}", state.phase()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_rejects_off_board_start() {
        assert!(solve(8, 8, Position::new(8, 0)).is_err());
        assert!(solve(0, 8, Position::new(0, 0)).is_err());
    }

    #[test]
    fn test_solve_one_by_one() {
        let report = solve(1, 1, Position::new(0, 0)).unwrap();
        assert!(report.complete);
        assert_eq!(report.to_text(), "   0\n0  N\nComplete tour: 1/1 squares");
    }
}
