use crate::clock::SessionClock;

use super::ServedIds;

/// Per-session bookkeeping, reset whenever a new exploration starts
#[derive(Debug)]
pub struct SessionState {
    pub served_ids: ServedIds,
    pub score: u32,
    /// Consecutive correct answers within this session only
    pub streak: u32,
    pub answered: u32,
    pub clock: SessionClock,
}

impl SessionState {
    pub fn new(time_budget_secs: u32) -> Self {
        Self {
            served_ids: ServedIds::new(),
            score: 0,
            streak: 0,
            answered: 0,
            clock: SessionClock::new(time_budget_secs),
        }
    }

    /// Clear everything for a fresh session.
    ///
    /// The clock is reset rather than replaced so its epoch keeps advancing
    /// and ticks from an earlier session stay stale.
    pub fn restart(&mut self, time_budget_secs: u32) {
        self.served_ids.clear();
        self.score = 0;
        self.streak = 0;
        self.answered = 0;
        self.clock.reset(time_budget_secs);
    }

    pub fn remaining_secs(&self) -> u32 {
        self.clock.remaining_secs()
    }

    pub fn record_answer(&mut self, correct: bool, xp_gained: u32) {
        self.answered += 1;
        if correct {
            self.streak += 1;
            self.score = self.score.saturating_add(xp_gained);
        } else {
            self.streak = 0;
        }
    }
}
