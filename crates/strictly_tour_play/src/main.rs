//! Knight's Tour - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_tour::Position;
use strictly_tour_play::{PlayConfig, PlaySession, hint, solve};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            rows,
            cols,
            player,
            hints,
        } => run_play(config, rows, cols, player, hints),
        Command::Solve {
            rows,
            cols,
            row,
            col,
            json,
        } => run_solve(rows, cols, Position::new(row, col), json),
        Command::Hint { rows, cols, path } => {
            println!("{}", hint(rows, cols, &path)?);
            Ok(())
        }
    }
}

/// Run an interactive session on stdin/stdout
#[instrument]
fn run_play(
    config: Option<std::path::PathBuf>,
    rows: Option<i32>,
    cols: Option<i32>,
    player: Option<String>,
    hints: bool,
) -> Result<()> {
    let config = PlayConfig::load(config.as_deref())?.with_overrides(rows, cols, player, hints);
    info!(?config, "Starting play session");

    let mut session = PlaySession::new(&config)?;
    let stdin = std::io::stdin();
    session.run(stdin.lock(), std::io::stdout())?;
    Ok(())
}

/// Print a greedy tour
#[instrument]
fn run_solve(rows: i32, cols: i32, start: Position, json: bool) -> Result<()> {
    let report = solve(rows, cols, start)?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}
