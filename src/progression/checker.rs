//! Badge unlock evaluation

use super::definitions::{BADGES, Badge};
use crate::domain::UserStats;

/// Badges whose rule holds for `stats` but which are not unlocked yet,
/// in table order
pub fn newly_unlocked(stats: &UserStats) -> Vec<&'static Badge> {
    BADGES
        .iter()
        .filter(|badge| !stats.has_badge(badge.id) && badge.rule.is_met(stats))
        .collect()
}
