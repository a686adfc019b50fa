//! Line commands accepted by a play session.

use std::str::FromStr;
use strictly_tour::Position;
use tracing::instrument;

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Click a square.
    Select(Position),
    /// Ask the advisor for a move.
    Hint,
    /// List the knight's legal moves.
    Moves,
    /// Start the tour over on the same board.
    Reset,
    /// Start over on a new board.
    Resize {
        /// New row count.
        rows: i32,
        /// New column count.
        cols: i32,
    },
    /// Redraw the board.
    Board,
    /// Show the leaderboard.
    Scores,
    /// Show usage.
    Help,
    /// End the session.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Keyword {
    Hint,
    Moves,
    Reset,
    Size,
    Board,
    Scores,
    Help,
    #[strum(serialize = "quit", serialize = "exit", serialize = "q")]
    Quit,
}

/// Error parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,
    /// First word is neither a number nor a known command.
    #[display("Unknown command '{}'", _0)]
    Unknown(String),
    /// A coordinate or size was not an integer.
    #[display("'{}' is not a number", _0)]
    NotANumber(String),
    /// Wrong number of arguments.
    #[display("Usage: {}", _0)]
    Usage(&'static str),
}

impl std::error::Error for CommandError {}

/// Usage text listing every command.
pub const HELP: &str = "\
Commands:
  <row> <col>        select a square (also <row>,<col>)
  hint               suggest the next move
  moves              list the knight's legal moves
  reset              start the tour over
  size <rows> <cols> start over on a new board
  board              redraw the board
  scores             show the leaderboard
  help               show this message
  quit               end the session";

fn parse_number(token: &str) -> Result<i32, CommandError> {
    token
        .trim()
        .parse()
        .map_err(|_| CommandError::NotANumber(token.trim().to_string()))
}

/// Parses a square written as `row,col`.
#[instrument]
pub fn parse_position(token: &str) -> Result<Position, CommandError> {
    let (row, col) = token
        .split_once(',')
        .ok_or(CommandError::Usage("<row>,<col>"))?;
    Ok(Position::new(parse_number(row)?, parse_number(col)?))
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&first, args)) = tokens.split_first() else {
            return Err(CommandError::Empty);
        };

        if first.contains(',') && args.is_empty() {
            return parse_position(first).map(SessionCommand::Select);
        }

        if first.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
            return match args {
                [col] => Ok(SessionCommand::Select(Position::new(
                    parse_number(first)?,
                    parse_number(col)?,
                ))),
                _ => Err(CommandError::Usage("<row> <col>")),
            };
        }

        let keyword =
            Keyword::from_str(first).map_err(|_| CommandError::Unknown(first.to_string()))?;
        match (keyword, args) {
            (Keyword::Size, [rows, cols]) => Ok(SessionCommand::Resize {
                rows: parse_number(rows)?,
                cols: parse_number(cols)?,
            }),
            (Keyword::Size, _) => Err(CommandError::Usage("size <rows> <cols>")),
            (Keyword::Hint, []) => Ok(SessionCommand::Hint),
            (Keyword::Moves, []) => Ok(SessionCommand::Moves),
            (Keyword::Reset, []) => Ok(SessionCommand::Reset),
            (Keyword::Board, []) => Ok(SessionCommand::Board),
            (Keyword::Scores, []) => Ok(SessionCommand::Scores),
            (Keyword::Help, []) => Ok(SessionCommand::Help),
            (Keyword::Quit, []) => Ok(SessionCommand::Quit),
            _ => Err(CommandError::Usage("commands other than size take no arguments")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_select_forms() {
        let expected = SessionCommand::Select(Position::new(2, 3));
        assert_eq!("2 3".parse::<SessionCommand>(), Ok(expected.clone()));
        assert_eq!(" 2,3 ".parse::<SessionCommand>(), Ok(expected));
        assert_eq!(
            "-1 0".parse::<SessionCommand>(),
            Ok(SessionCommand::Select(Position::new(-1, 0)))
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("HINT".parse::<SessionCommand>(), Ok(SessionCommand::Hint));
        assert_eq!("exit".parse::<SessionCommand>(), Ok(SessionCommand::Quit));
        assert_eq!(
            "size 5 6".parse::<SessionCommand>(),
            Ok(SessionCommand::Resize { rows: 5, cols: 6 })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<SessionCommand>(), Err(CommandError::Empty));
        assert_eq!(
            "jump".parse::<SessionCommand>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert_eq!(
            "2 x".parse::<SessionCommand>(),
            Err(CommandError::NotANumber("x".to_string()))
        );
        assert!(matches!("size 5".parse::<SessionCommand>(), Err(CommandError::Usage(_))));
        assert!(matches!("2".parse::<SessionCommand>(), Err(CommandError::Usage(_))));
    }
}
