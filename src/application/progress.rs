use crate::domain::ScoreDelta;

/// Running totals for one game. Owned by the session, never by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameProgress {
    pub score: u64,
    pub level: u32,
    pub stars: u32,
}

impl Default for GameProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl GameProgress {
    pub const fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            stars: 0,
        }
    }

    pub fn record_clear(&mut self, delta: ScoreDelta, award_star: bool) {
        self.score += delta.points;
        if award_star {
            self.stars += 1;
        }
    }

    /// Score at which the current level completes
    pub fn level_target(&self, level_score_step: u64) -> u64 {
        u64::from(self.level) * level_score_step
    }

    /// Advance at most one level if the target is reached
    pub fn check_level_up(&mut self, level_score_step: u64, level_up_stars: u32) -> bool {
        if self.score < self.level_target(level_score_step) {
            return false;
        }
        self.level += 1;
        self.stars += level_up_stars;
        true
    }
}
