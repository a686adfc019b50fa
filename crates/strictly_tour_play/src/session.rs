//! Interactive play session.
//!
//! The session is a thin observer: it forwards commands to the
//! [`TourEngine`], re-renders from the returned snapshot, and records
//! final scores on the [`Leaderboard`] when a tour ends.

use crate::command::{HELP, SessionCommand};
use crate::config::{ConfigError, PlayConfig};
use crate::leaderboard::Leaderboard;
use crate::render::{render_board, render_status};
use std::io::{BufRead, Write};
use strictly_tour::{Position, Selection, SelectionReport, TourEngine};
use tracing::{debug, info, instrument, warn};

/// Text produced for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to show the player.
    pub text: String,
    /// Whether the session should end.
    pub quit: bool,
}

impl Reply {
    fn show(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

/// One player's session: an engine, a leaderboard and display settings.
#[derive(Debug, Clone)]
pub struct PlaySession {
    engine: TourEngine,
    leaderboard: Leaderboard,
    player: String,
    show_hints: bool,
}

impl PlaySession {
    /// Creates a session from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configured board is invalid.
    #[instrument(skip(config), fields(player = %config.player()))]
    pub fn new(config: &PlayConfig) -> Result<Self, ConfigError> {
        let board = config.board()?;
        info!(%board, "Play session created");
        Ok(Self {
            engine: TourEngine::new(board),
            leaderboard: Leaderboard::new(),
            player: config.player().clone(),
            show_hints: *config.show_hints(),
        })
    }

    /// Returns the engine.
    pub fn engine(&self) -> &TourEngine {
        &self.engine
    }

    /// Returns the leaderboard.
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Applies one command.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn handle(&mut self, command: SessionCommand) -> Reply {
        match command {
            SessionCommand::Select(square) => {
                let report = self.engine.select_square(square);
                Reply::show(self.describe_selection(report))
            }
            SessionCommand::Hint => match self.engine.suggest() {
                Some(hint) => Reply::show(format!(
                    "Suggested move: {}\n{}",
                    hint,
                    self.board_text(Some(hint))
                )),
                None => Reply::show("No suggestion available."),
            },
            SessionCommand::Moves => match self.engine.snapshot().knight() {
                Some(knight) => Reply::show(list_moves(&self.engine.legal_moves_from(knight))),
                None => Reply::show("Pick a starting square first."),
            },
            SessionCommand::Reset => {
                self.engine.reset();
                Reply::show(format!("Tour reset.\n{}", self.board_text(None)))
            }
            SessionCommand::Resize { rows, cols } => match self.engine.configure(rows, cols) {
                Ok(()) => Reply::show(format!(
                    "New {} board.\n{}",
                    self.engine.board(),
                    self.board_text(None)
                )),
                Err(e) => {
                    warn!(error = %e, "Resize refused");
                    Reply::show(e.to_string())
                }
            },
            SessionCommand::Board => Reply::show(self.board_text(None)),
            SessionCommand::Scores => Reply::show(self.scores_text()),
            SessionCommand::Help => Reply::show(HELP),
            SessionCommand::Quit => Reply {
                text: "Bye.".to_string(),
                quit: true,
            },
        }
    }

    fn describe_selection(&mut self, report: SelectionReport) -> String {
        let mut lines = vec![match &report.selection {
            Selection::Started(square) => format!("Knight placed on {}.", square),
            Selection::Revealed(moves) => list_moves(moves),
            Selection::Moved { from, to } => format!("Knight moved {} -> {}.", from, to),
            Selection::Rejected(error) => format!("Rejected: {}.", error),
        }];

        if let Some(result) = report.finished {
            let best = self.leaderboard.record(&self.player, result);
            info!(%result, best, "Tour finished");
            lines.push(format!("Tour {}! Final score: {}.", result.outcome, result.score));
            if best {
                lines.push("New personal best!".to_string());
            }
        }

        lines.push(self.board_text(None));
        lines.join("\n")
    }

    /// Board and status line, with the hint drawn when hints are on or
    /// one is passed in.
    fn board_text(&self, hint: Option<Position>) -> String {
        let state = self.engine.snapshot();
        let hint = hint.or_else(|| self.show_hints.then(|| self.engine.suggest()).flatten());
        format!(
            "{}{}",
            render_board(&state, &self.engine.highlighted(), hint),
            render_status(&state)
        )
    }

    fn scores_text(&self) -> String {
        if self.leaderboard.is_empty() {
            return "No finished tours yet.".to_string();
        }
        self.leaderboard
            .standings()
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {} {}", i + 1, s.player, s.score))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Runs the session over line-oriented input until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading or writing.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        writeln!(output, "{}", self.board_text(None))?;
        writeln!(output, "Type 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            let reply = match line.parse::<SessionCommand>() {
                Ok(command) => self.handle(command),
                Err(e) => {
                    debug!(error = %e, "Unparsed command");
                    Reply::show(e.to_string())
                }
            };
            writeln!(output, "{}", reply.text)?;
            output.flush()?;
            if reply.quit {
                break;
            }
        }

        info!("Session ended");
        Ok(())
    }
}

fn list_moves(moves: &[Position]) -> String {
    if moves.is_empty() {
        return "No legal moves.".to_string();
    }
    let squares = moves
        .iter()
        .map(|pos| pos.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Legal moves: {}", squares)
}
