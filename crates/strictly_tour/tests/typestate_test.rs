//! Tests for the typestate tour lifecycle.

use strictly_tour::{
    BoardDimensions, MoveError, Outcome, Position, TourInProgress, TourResult, TourSetup,
};

fn pos(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

#[test]
fn test_typestate_lifecycle() {
    let setup = TourSetup::new(BoardDimensions::chessboard());

    let tour = match setup.start(pos(0, 0)).expect("Valid start") {
        TourResult::InProgress(tour) => tour,
        TourResult::Finished(_) => panic!("Tour shouldn't finish on a chessboard start"),
    };
    assert_eq!(tour.knight(), pos(0, 0));

    let tour = match tour.advance(pos(2, 1)).expect("Valid step") {
        TourResult::InProgress(tour) => tour,
        TourResult::Finished(_) => panic!("Tour shouldn't finish after one step"),
    };
    assert_eq!(tour.knight(), pos(2, 1));
    assert_eq!(tour.visited().len(), 2);
}

#[test]
fn test_replay_from_path() {
    let path = [pos(0, 0), pos(2, 1), pos(4, 2), pos(6, 3)];
    match TourInProgress::replay(BoardDimensions::chessboard(), &path).expect("Valid replay") {
        TourResult::InProgress(tour) => {
            assert_eq!(tour.visited().as_slice(), &path);
            assert_eq!(tour.knight(), pos(6, 3));
        }
        TourResult::Finished(_) => panic!("Tour shouldn't finish"),
    }
}

#[test]
fn test_replay_reports_first_bad_step() {
    let path = [pos(0, 0), pos(2, 1), pos(0, 0)];
    assert_eq!(
        TourInProgress::replay(BoardDimensions::chessboard(), &path),
        Err(MoveError::AlreadyVisited(pos(0, 0)))
    );
}

#[test]
fn test_replay_past_finish_rejected() {
    let board = BoardDimensions::new(3, 3).unwrap();
    assert_eq!(
        TourInProgress::replay(board, &[pos(1, 1), pos(0, 0)]),
        Err(MoveError::TourOver)
    );
}

#[test]
fn test_replay_empty_path_rejected() {
    assert_eq!(
        TourInProgress::replay(BoardDimensions::chessboard(), &[]),
        Err(MoveError::TourOver)
    );
}

#[test]
fn test_dead_end_finishes_lost() {
    // 3x3: the outer ring is a single 8-cycle, so a walk round it dead-ends
    // with the centre unvisited.
    let path = [
        pos(0, 0),
        pos(2, 1),
        pos(0, 2),
        pos(1, 0),
        pos(2, 2),
        pos(0, 1),
        pos(2, 0),
        pos(1, 2),
    ];
    match TourInProgress::replay(BoardDimensions::new(3, 3).unwrap(), &path).expect("Valid replay") {
        TourResult::Finished(done) => {
            assert_eq!(done.outcome(), Outcome::Lost);
            assert_eq!(done.final_score().score, 8);
        }
        TourResult::InProgress(_) => panic!("Tour should be finished"),
    }
}

#[test]
fn test_restart_after_finish() {
    let board = BoardDimensions::new(1, 1).unwrap();
    let TourResult::Finished(done) = TourSetup::new(board).start(pos(0, 0)).expect("Valid start")
    else {
        panic!("1x1 tour should finish immediately");
    };
    assert_eq!(done.outcome(), Outcome::Won);

    let setup = done.restart();
    assert_eq!(setup.board(), board);
}
