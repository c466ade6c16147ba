//! Score counter with a one-shot win threshold

use serde::{Deserialize, Serialize};

use crate::consts::WIN_SCORE;

/// Outcome of a single increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreChange {
    /// Score went up, threshold not (newly) crossed
    Counted(u32),
    /// Score just reached the target for the first time
    TargetReached(u32),
}

/// Catch counter driving the love meter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u32,
    target: u32,
    /// Latched once the target has been reported
    target_reported: bool,
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new(WIN_SCORE)
    }
}

impl ScoreTracker {
    pub fn new(target: u32) -> Self {
        Self {
            score: 0,
            target: target.max(1),
            target_reported: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn reached(&self) -> bool {
        self.target_reported
    }

    /// Add one point; reports `TargetReached` exactly once
    pub fn increment(&mut self) -> ScoreChange {
        self.score = self.score.saturating_add(1);
        if self.score >= self.target && !self.target_reported {
            self.target_reported = true;
            ScoreChange::TargetReached(self.score)
        } else {
            ScoreChange::Counted(self.score)
        }
    }

    /// Back to zero (game start only)
    pub fn reset(&mut self) {
        self.score = 0;
        self.target_reported = false;
    }

    /// Meter fill in percent, capped at 100
    pub fn meter_percent(&self) -> f32 {
        (self.score as f32 / self.target as f32 * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_reported_once() {
        let mut tracker = ScoreTracker::default();
        for i in 1..WIN_SCORE {
            assert_eq!(tracker.increment(), ScoreChange::Counted(i));
        }
        assert_eq!(tracker.increment(), ScoreChange::TargetReached(WIN_SCORE));
        assert_eq!(tracker.increment(), ScoreChange::Counted(WIN_SCORE + 1));
        assert!(tracker.reached());
    }

    #[test]
    fn test_meter_percent() {
        let mut tracker = ScoreTracker::new(4);
        assert_eq!(tracker.meter_percent(), 0.0);
        tracker.increment();
        assert_eq!(tracker.meter_percent(), 25.0);
        for _ in 0..10 {
            tracker.increment();
        }
        assert_eq!(tracker.meter_percent(), 100.0);
    }

    #[test]
    fn test_reset_rearms_threshold() {
        let mut tracker = ScoreTracker::new(1);
        assert_eq!(tracker.increment(), ScoreChange::TargetReached(1));
        tracker.reset();
        assert_eq!(tracker.score(), 0);
        assert!(!tracker.reached());
        assert_eq!(tracker.increment(), ScoreChange::TargetReached(1));
    }
}
