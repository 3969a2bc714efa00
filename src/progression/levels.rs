//! XP and level system
//!
//! Every level spans a flat 100 XP: `level = floor(xp / 100) + 1`.

/// XP needed to advance one level
pub const XP_PER_LEVEL: u32 = 100;

/// Level reached with the given total XP
pub fn level_for_xp(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

/// Display titles, keyed by the first level that earns them (sorted)
pub static LEVEL_TITLES: &[(u32, &str)] = &[
    (1, "Sprout Reader"),
    (3, "Page Turner"),
    (5, "Bookworm"),
    (10, "Story Seeker"),
    (15, "Library Explorer"),
    (20, "Sage of the Forest"),
    (30, "Legend of the Forest"),
];

/// Level breakdown for progress displays
#[derive(Debug, Clone, PartialEq)]
pub struct LevelInfo {
    pub level: u32,
    pub title: &'static str,
    /// XP earned inside the current level
    pub xp_into_level: u32,
    /// Total XP at which the next level starts
    pub next_level_xp: u32,
}

impl LevelInfo {
    pub fn for_xp(xp: u32) -> Self {
        let level = level_for_xp(xp);
        Self {
            level,
            title: Self::title_for(level),
            xp_into_level: xp % XP_PER_LEVEL,
            next_level_xp: level.saturating_mul(XP_PER_LEVEL),
        }
    }

    pub fn title_for(level: u32) -> &'static str {
        LEVEL_TITLES
            .iter()
            .rev()
            .find(|(min, _)| level >= *min)
            .map(|(_, title)| *title)
            .unwrap_or(LEVEL_TITLES[0].1)
    }

    /// Progress toward the next level (0.0 - 1.0)
    pub fn progress_to_next(&self) -> f32 {
        self.xp_into_level as f32 / XP_PER_LEVEL as f32
    }
}

/// XP rewards for answers
pub struct XpRewards;

impl XpRewards {
    /// XP for any correct answer
    pub const CORRECT: u32 = 20;

    /// Extra XP per answer already in the streak
    pub const PER_STREAK: u32 = 5;

    /// XP for an answer given the streak *before* this answer
    pub fn for_answer(correct: bool, prior_streak: u32) -> u32 {
        if correct {
            Self::CORRECT.saturating_add(Self::PER_STREAK.saturating_mul(prior_streak))
        } else {
            0
        }
    }
}
