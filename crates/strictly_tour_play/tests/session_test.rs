//! Tests for interactive play sessions.

use std::io::Cursor;
use strictly_tour::{Phase, Position};
use strictly_tour_play::{PlayConfig, PlaySession, SessionCommand};

fn session(rows: i32, cols: i32, player: &str) -> PlaySession {
    let config = PlayConfig::default().with_overrides(Some(rows), Some(cols), Some(player.into()), false);
    PlaySession::new(&config).expect("Valid config")
}

fn run(session: &mut PlaySession, input: &str) -> String {
    let mut output = Vec::new();
    session
        .run(Cursor::new(input.to_string()), &mut output)
        .expect("In-memory I/O");
    String::from_utf8(output).expect("UTF-8 output")
}

#[test]
fn test_lost_tour_records_score() {
    let mut play = session(3, 3, "ada");
    let output = run(&mut play, "1 1\nscores\n");

    assert!(output.contains("Knight placed on (1, 1)."));
    assert!(output.contains("Tour lost! Final score: 1."));
    assert!(output.contains("New personal best!"));
    assert!(output.contains("1. ada 1"));
    assert_eq!(play.leaderboard().best("ada"), Some(1));
}

#[test]
fn test_reveal_hint_and_rejection() {
    let mut play = session(3, 3, "ada");
    let output = run(&mut play, "0 0\n0 0\nhint\n9 9\n");

    assert!(output.contains("Legal moves: (2, 1), (1, 2)"));
    assert!(output.contains("Suggested move: (2, 1)"));
    assert!(output.contains("Rejected: Square (9, 9) is off the board."));
    assert_eq!(play.engine().snapshot().score(), 1);
}

#[test]
fn test_quit_stops_reading() {
    let mut play = session(8, 8, "ada");
    let output = run(&mut play, "0 0\nquit\n2 1\n");

    assert!(output.ends_with("Bye.\n"));
    assert_eq!(play.engine().snapshot().knight(), Some(Position::new(0, 0)));
}

#[test]
fn test_bad_input_keeps_session_alive() {
    let mut play = session(8, 8, "ada");
    let output = run(&mut play, "fly away\n0 0\n");

    assert!(output.contains("Unknown command 'fly'"));
    assert_eq!(play.engine().phase(), Phase::InProgress);
}

#[test]
fn test_reset_and_resize() {
    let mut play = session(8, 8, "ada");
    play.handle(SessionCommand::Select(Position::new(4, 4)));

    let reply = play.handle(SessionCommand::Reset);
    assert!(reply.text.starts_with("Tour reset."));
    assert_eq!(play.engine().phase(), Phase::NotStarted);

    let reply = play.handle(SessionCommand::Resize { rows: 0, cols: 3 });
    assert!(reply.text.contains("Invalid board dimensions"));
    assert_eq!(play.engine().board().square_count(), 64);

    let reply = play.handle(SessionCommand::Resize { rows: 1, cols: 1 });
    assert!(reply.text.starts_with("New 1x1 board."));
    let reply = play.handle(SessionCommand::Select(Position::new(0, 0)));
    assert!(reply.text.contains("Tour won! Final score: 1."));
}

#[test]
fn test_best_score_survives_worse_tour() {
    let mut play = session(3, 3, "ada");
    // Around the outer ring: 8 squares before the dead end.
    for (row, col) in [(0, 0), (2, 1), (0, 2), (1, 0), (2, 2), (0, 1), (2, 0), (1, 2)] {
        play.handle(SessionCommand::Select(Position::new(row, col)));
    }
    assert_eq!(play.engine().phase(), Phase::Lost);
    play.handle(SessionCommand::Reset);
    let reply = play.handle(SessionCommand::Select(Position::new(1, 1)));

    assert!(reply.text.contains("Tour lost! Final score: 1."));
    assert!(!reply.text.contains("New personal best!"));
    assert_eq!(play.leaderboard().best("ada"), Some(8));
}

#[test]
fn test_moves_before_start() {
    let mut play = session(8, 8, "ada");
    let reply = play.handle(SessionCommand::Moves);
    assert_eq!(reply.text, "Pick a starting square first.");
}

#[test]
fn test_show_hints_draws_question_mark() {
    let config = PlayConfig::default().with_overrides(Some(5), Some(5), None, true);
    let mut play = PlaySession::new(&config).expect("Valid config");
    let reply = play.handle(SessionCommand::Select(Position::new(2, 2)));

    // Every candidate ties from the centre; (4,3) comes first.
    let row_four = reply.text.lines().find(|l| l.starts_with('4')).expect("Row 4");
    assert_eq!(row_four, "4  .  .  .  ?  .");
}
