//! Badge definitions
//!
//! Each badge is unlocked by a single declarative rule: a stat field and
//! the threshold it has to reach.

use crate::domain::UserStats;

/// Stat field a badge rule looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStat {
    CorrectAnswers,
    BestStreak,
}

impl BadgeStat {
    pub fn value(&self, stats: &UserStats) -> u32 {
        match self {
            Self::CorrectAnswers => stats.correct_answers,
            Self::BestStreak => stats.best_streak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CorrectAnswers => "correct answers",
            Self::BestStreak => "best streak",
        }
    }
}

/// Unlock condition: `stat >= threshold`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRule {
    pub stat: BadgeStat,
    pub threshold: u32,
}

impl BadgeRule {
    pub const fn new(stat: BadgeStat, threshold: u32) -> Self {
        Self { stat, threshold }
    }

    pub fn is_met(&self, stats: &UserStats) -> bool {
        self.stat.value(stats) >= self.threshold
    }

    /// Progress toward the threshold, capped at the threshold
    pub fn progress(&self, stats: &UserStats) -> (u32, u32) {
        (self.stat.value(stats).min(self.threshold), self.threshold)
    }
}

/// Badge definition with display metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rule: BadgeRule,
}

/// All badges, in display and unlock order
pub static BADGES: &[Badge] = &[
    Badge {
        id: "start",
        name: "Sprout of Wisdom",
        description: "Answer your first question correctly",
        icon: "🌱",
        rule: BadgeRule::new(BadgeStat::CorrectAnswers, 1),
    },
    Badge {
        id: "streak_5",
        name: "On a Roll",
        description: "Reach a streak of 5 correct answers",
        icon: "🔥",
        rule: BadgeRule::new(BadgeStat::BestStreak, 5),
    },
    Badge {
        id: "streak_10",
        name: "Unstoppable",
        description: "Reach a streak of 10 correct answers",
        icon: "⚡",
        rule: BadgeRule::new(BadgeStat::BestStreak, 10),
    },
    Badge {
        id: "junior",
        name: "Tree of Wisdom",
        description: "Answer 100 questions correctly",
        icon: "🌳",
        rule: BadgeRule::new(BadgeStat::CorrectAnswers, 100),
    },
    Badge {
        id: "senior",
        name: "Fruit of Wisdom",
        description: "Answer 500 questions correctly",
        icon: "🍎",
        rule: BadgeRule::new(BadgeStat::CorrectAnswers, 500),
    },
    Badge {
        id: "expert",
        name: "Forest of Wisdom",
        description: "Answer 1,000 questions correctly",
        icon: "🌲",
        rule: BadgeRule::new(BadgeStat::CorrectAnswers, 1_000),
    },
    Badge {
        id: "master",
        name: "Mountains of Wisdom",
        description: "Answer 3,000 questions correctly",
        icon: "🏔️",
        rule: BadgeRule::new(BadgeStat::CorrectAnswers, 3_000),
    },
    Badge {
        id: "legend",
        name: "Spirit of Wisdom",
        description: "Answer 5,000 questions correctly",
        icon: "✨",
        rule: BadgeRule::new(BadgeStat::CorrectAnswers, 5_000),
    },
];
