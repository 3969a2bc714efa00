//! Streak continuity between sessions

use serde::{Deserialize, Serialize};

use crate::domain::UserStats;

/// Whether the persisted answer streak survives into a new session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakPolicy {
    /// The streak only breaks on a wrong answer, across sessions too
    #[default]
    CarryOver,
    /// Every session starts with a streak of zero
    ResetPerSession,
}

impl StreakPolicy {
    /// Stats to use at session start. `None` means nothing changed.
    pub fn on_session_start(&self, stats: &UserStats) -> Option<UserStats> {
        match self {
            Self::CarryOver => None,
            Self::ResetPerSession if stats.streak == 0 => None,
            Self::ResetPerSession => Some(UserStats {
                streak: 0,
                ..stats.clone()
            }),
        }
    }
}
