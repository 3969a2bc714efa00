//! Progression: XP, levels, streaks and badges
//!
//! Everything here is pure. [`apply_answer`] takes the current stats and an
//! answer and returns the new stats plus everything that happened; storing
//! the result is the caller's job.

mod checker;
mod definitions;
mod engine;
mod levels;
mod streaks;

pub use checker::newly_unlocked;
pub use definitions::{BADGES, Badge, BadgeRule, BadgeStat};
pub use engine::{AnswerOutcome, ProgressionRules, apply_answer};
pub use levels::{LEVEL_TITLES, LevelInfo, XP_PER_LEVEL, XpRewards, level_for_xp};
pub use streaks::StreakPolicy;
