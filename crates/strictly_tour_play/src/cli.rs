//! Command-line interface for knights_tour.

use clap::{Parser, Subcommand};

/// Knight's Tour - visit every square with knight moves
#[derive(Parser, Debug)]
#[command(name = "knights_tour")]
#[command(about = "Knight's tour puzzle with Warnsdorff hints", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Path to a TOML play config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Board rows (overrides config)
        #[arg(long)]
        rows: Option<i32>,

        /// Board columns (overrides config)
        #[arg(long)]
        cols: Option<i32>,

        /// Player name for the leaderboard (overrides config)
        #[arg(short, long)]
        player: Option<String>,

        /// Draw the suggested move on every board
        #[arg(long)]
        hints: bool,
    },

    /// Walk a greedy Warnsdorff tour from a starting square
    Solve {
        /// Board rows
        #[arg(long, default_value = "8")]
        rows: i32,

        /// Board columns
        #[arg(long, default_value = "8")]
        cols: i32,

        /// Starting row
        #[arg(long, default_value = "0")]
        row: i32,

        /// Starting column
        #[arg(long, default_value = "0")]
        col: i32,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a path and print the advisor's next move
    Hint {
        /// Board rows
        #[arg(long, default_value = "8")]
        rows: i32,

        /// Board columns
        #[arg(long, default_value = "8")]
        cols: i32,

        /// Visited squares in order, each as row,col
        #[arg(required = true, allow_hyphen_values = true)]
        path: Vec<String>,
    },
}
