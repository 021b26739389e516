//! Score keeping

/// Running score for a session
#[derive(Debug, Clone, Default)]
pub struct ScoreManager {
    score: i32,
}

impl ScoreManager {
    /// Start at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `points` (may be negative)
    pub fn add(&mut self, points: i32) {
        self.score = self.score.saturating_add(points);
    }

    /// Remove `points`
    pub fn subtract(&mut self, points: i32) {
        self.score = self.score.saturating_sub(points);
    }

    /// One point for a good event
    pub fn add_event_point(&mut self) {
        self.add(1);
    }

    /// One point off for a bad event
    pub fn subtract_event_point(&mut self) {
        self.subtract(1);
    }

    /// Current score
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Score including the bonus for time left on the clock
    #[must_use]
    pub fn final_score(&self, time_left_secs: u32, bonus_per_second: i32) -> i32 {
        let bonus = i32::try_from(time_left_secs)
            .unwrap_or(i32::MAX)
            .saturating_mul(bonus_per_second);
        self.score.saturating_add(bonus)
    }

    /// Back to zero
    pub fn reset(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_deltas() {
        let mut score = ScoreManager::new();

        score.add(500);
        score.add_event_point();
        score.subtract(200);
        score.subtract_event_point();

        assert_eq!(score.score(), 300);

        score.reset();
        assert_eq!(score.score(), 0);
    }

    #[test]
    fn test_final_score_adds_time_bonus() {
        let mut score = ScoreManager::new();
        score.add(500);

        assert_eq!(score.final_score(120, 10), 1700);
        assert_eq!(score.final_score(0, 10), 500);
    }
}
