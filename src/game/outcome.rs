//! End-of-session results

use serde::{Deserialize, Serialize};

use super::{ScoreManager, Timer};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Reached the exit room
    Won,
    /// Ran out of time
    Lost,
}

/// Timer and score at the moment a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeSnapshot {
    /// How it ended
    pub outcome: GameOutcome,
    /// Whole seconds played
    pub time_elapsed_secs: u32,
    /// Whole seconds left on the clock
    pub time_left_secs: u32,
    /// Score from events
    pub score: i32,
    /// Score including the time bonus (equal to `score` on a loss)
    pub final_score: i32,
}

impl OutcomeSnapshot {
    /// Capture the current timer and score
    #[must_use]
    pub fn capture(
        outcome: GameOutcome,
        timer: &Timer,
        score: &ScoreManager,
        bonus_per_second: i32,
    ) -> Self {
        let final_score = match outcome {
            GameOutcome::Won => score.final_score(timer.time_left_secs(), bonus_per_second),
            GameOutcome::Lost => score.score(),
        };
        Self {
            outcome,
            time_elapsed_secs: timer.elapsed_secs(),
            time_left_secs: timer.time_left_secs(),
            score: score.score(),
            final_score,
        }
    }
}
