//! Strictly Tour Play - terminal front end for the knight's tour.
//!
//! Everything here is a thin collaborator around [`strictly_tour`]: it reads
//! clicks as text commands, renders snapshots as text, and keeps a
//! leaderboard for the lifetime of one session.
//!
//! # Architecture
//!
//! - **Config**: TOML play settings with command-line overrides
//! - **Session**: line-oriented command loop over a [`TourEngine`](strictly_tour::TourEngine)
//! - **Leaderboard**: best score per player, ranked
//! - **Reports**: one-shot `solve` and `hint` output

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod config;
mod leaderboard;
mod render;
mod report;
mod session;

// Crate-level exports - Commands
pub use command::{CommandError, HELP, SessionCommand, parse_position};

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Leaderboard
pub use leaderboard::{Leaderboard, Standing};

// Crate-level exports - Rendering
pub use render::{render_board, render_status};

// Crate-level exports - Reports
pub use report::{SolveReport, hint, solve};

// Crate-level exports - Session
pub use session::{PlaySession, Reply};
