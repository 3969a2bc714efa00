//! Answer evaluation: the core progression rules

use super::checker::newly_unlocked;
use super::definitions::Badge;
use super::levels::{XpRewards, level_for_xp};
use crate::domain::{Notification, ShuffledQuestion, UserStats};

/// Tunables for the time bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionRules {
    /// A correct answer that brings the streak to a multiple of this grants
    /// bonus time. 0 disables the bonus.
    pub streak_bonus_interval: u32,
    pub streak_bonus_secs: u32,
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self {
            streak_bonus_interval: 5,
            streak_bonus_secs: 3,
        }
    }
}

impl ProgressionRules {
    fn grants_bonus(&self, correct: bool, new_streak: u32) -> bool {
        correct
            && self.streak_bonus_interval > 0
            && self.streak_bonus_secs > 0
            && new_streak > 0
            && new_streak % self.streak_bonus_interval == 0
    }
}

/// Everything that follows from one answer
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub xp_gained: u32,
    pub stats: UserStats,
    pub leveled_up: bool,
    /// Whether the answer earned bonus time for the session clock
    pub bonus_granted: bool,
    /// Seconds of bonus time (0 unless `bonus_granted`)
    pub bonus_secs: u32,
    pub new_badges: Vec<&'static Badge>,
}

impl AnswerOutcome {
    /// Feedback cues for this answer, in the order they should play
    pub fn notifications(&self) -> Vec<Notification> {
        let mut cues = vec![if self.is_correct {
            Notification::CorrectAnswer
        } else {
            Notification::WrongAnswer
        }];
        if self.leveled_up {
            cues.push(Notification::LevelUp {
                level: self.stats.level,
            });
        }
        if self.bonus_granted {
            cues.push(Notification::StreakBonus {
                seconds: self.bonus_secs,
            });
        }
        cues
    }
}

/// Apply one answer to `stats`. Deterministic; performs no I/O.
pub fn apply_answer(
    stats: &UserStats,
    chosen_index: usize,
    question: &ShuffledQuestion,
    rules: &ProgressionRules,
) -> AnswerOutcome {
    let is_correct = question.is_correct(chosen_index);
    let xp_gained = XpRewards::for_answer(is_correct, stats.streak);
    let new_streak = if is_correct { stats.streak + 1 } else { 0 };

    let xp = stats.xp.saturating_add(xp_gained);
    // Stored levels may lag behind hand-edited or partial stats files
    let level = level_for_xp(xp);
    let leveled_up = level > level_for_xp(stats.xp);

    let mut next = UserStats {
        xp,
        level,
        streak: new_streak,
        best_streak: stats.best_streak.max(new_streak),
        correct_answers: stats.correct_answers.saturating_add(u32::from(is_correct)),
        total_attempts: stats.total_attempts.saturating_add(1),
        unlocked_badges: stats.unlocked_badges.clone(),
    };

    let new_badges = newly_unlocked(&next);
    next.unlocked_badges
        .extend(new_badges.iter().map(|badge| badge.id.to_string()));

    let bonus_granted = rules.grants_bonus(is_correct, new_streak);

    AnswerOutcome {
        is_correct,
        xp_gained,
        stats: next,
        leveled_up,
        bonus_granted,
        bonus_secs: if bonus_granted {
            rules.streak_bonus_secs
        } else {
            0
        },
        new_badges,
    }
}
