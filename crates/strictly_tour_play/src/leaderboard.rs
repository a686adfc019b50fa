//! In-memory leaderboard for one play session.
//!
//! Keeps each player's best score and ranks players by it. Nothing is
//! persisted; the board lives as long as the session.

use serde::Serialize;
use strictly_tour::FinalScore;
use tracing::{debug, info, instrument};

/// A player's best result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_new::new)]
pub struct Standing {
    /// Player identifier.
    pub player: String,
    /// Best score so far.
    pub score: usize,
    /// Recording sequence number of the best score, for tie-breaks.
    #[serde(skip)]
    achieved_at: u64,
}

/// Best score per player.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    standings: Vec<Standing>,
    recorded: u64,
}

impl Leaderboard {
    /// Creates an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished tour. Returns true if it is the player's new best.
    #[instrument(skip(self))]
    pub fn record(&mut self, player: &str, result: FinalScore) -> bool {
        self.recorded += 1;
        let seq = self.recorded;

        match self.standings.iter_mut().find(|s| s.player == player) {
            Some(standing) if result.score <= standing.score => {
                debug!(best = standing.score, "Score below personal best");
                false
            }
            Some(standing) => {
                info!(previous = standing.score, score = result.score, "New personal best");
                standing.score = result.score;
                standing.achieved_at = seq;
                true
            }
            None => {
                info!(score = result.score, "First score for player");
                self.standings
                    .push(Standing::new(player.to_string(), result.score, seq));
                true
            }
        }
    }

    /// Best score for a player.
    pub fn best(&self, player: &str) -> Option<usize> {
        self.standings
            .iter()
            .find(|s| s.player == player)
            .map(|s| s.score)
    }

    /// Players ranked by best score, highest first. Equal scores keep the
    /// order in which they were reached.
    pub fn standings(&self) -> Vec<Standing> {
        let mut ranked = self.standings.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.achieved_at.cmp(&b.achieved_at)));
        ranked
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tour::Outcome;

    fn lost(score: usize) -> FinalScore {
        FinalScore {
            outcome: Outcome::Lost,
            score,
        }
    }

    #[test]
    fn test_keeps_best_score_only() {
        let mut board = Leaderboard::new();
        assert!(board.record("ada", lost(10)));
        assert!(!board.record("ada", lost(7)));
        assert!(board.record("ada", lost(12)));
        assert_eq!(board.best("ada"), Some(12));
        assert_eq!(board.standings().len(), 1);
    }

    #[test]
    fn test_ranked_descending() {
        let mut board = Leaderboard::new();
        board.record("ada", lost(10));
        board.record("bo", lost(30));
        board.record("cy", lost(20));
        let names: Vec<_> = board.standings().into_iter().map(|s| s.player).collect();
        assert_eq!(names, vec!["bo", "cy", "ada"]);
    }

    #[test]
    fn test_ties_go_to_first_to_reach_score() {
        let mut board = Leaderboard::new();
        board.record("ada", lost(5));
        board.record("bo", lost(9));
        board.record("ada", lost(9));
        let names: Vec<_> = board.standings().into_iter().map(|s| s.player).collect();
        assert_eq!(names, vec!["bo", "ada"]);
    }
}
