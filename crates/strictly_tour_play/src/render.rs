//! Text rendering of tour snapshots.

use strictly_tour::{Position, TourState};

/// Renders the board as a text grid.
///
/// `N` marks the knight, numbers give the order of visited squares, `?`
/// marks the hint, `*` marks highlighted legal moves and `.` marks
/// everything else.
pub fn render_board(state: &TourState, highlighted: &[Position], hint: Option<Position>) -> String {
    let board = state.board();
    let cell = board.square_count().to_string().len().max(2);
    let label = (board.rows() - 1).to_string().len();

    let mut out = " ".repeat(label);
    for col in 0..board.cols() {
        out.push_str(&format!(" {:>cell$}", col));
    }
    out.push('\n');

    for row in 0..board.rows() {
        out.push_str(&format!("{:>label$}", row));
        for col in 0..board.cols() {
            let symbol = square_symbol(state, highlighted, hint, Position::new(row, col));
            out.push_str(&format!(" {:>cell$}", symbol));
        }
        out.push('\n');
    }
    out
}

fn square_symbol(
    state: &TourState,
    highlighted: &[Position],
    hint: Option<Position>,
    pos: Position,
) -> String {
    if state.knight() == Some(pos) {
        "N".to_string()
    } else if let Some(ordinal) = state.visited().ordinal(&pos) {
        ordinal.to_string()
    } else if hint == Some(pos) {
        "?".to_string()
    } else if highlighted.contains(&pos) {
        "*".to_string()
    } else {
        ".".to_string()
    }
}

/// One-line summary of phase, score and knight square.
pub fn render_status(state: &TourState) -> String {
    let knight = state
        .knight()
        .map(|pos| pos.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "Phase: {} | Score: {}/{} | Knight: {}",
        state.phase(),
        state.score(),
        state.board().square_count(),
        knight
    )
}
