use serde::{Deserialize, Serialize};

/// Persistent player progress, shared by every session.
///
/// Only the progression engine produces new values of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub xp: u32,
    pub level: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub correct_answers: u32,
    pub total_attempts: u32,
    pub unlocked_badges: Vec<String>,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            streak: 0,
            best_streak: 0,
            correct_answers: 0,
            total_attempts: 0,
            unlocked_badges: Vec::new(),
        }
    }
}

impl UserStats {
    pub fn has_badge(&self, id: &str) -> bool {
        self.unlocked_badges.iter().any(|b| b == id)
    }

    /// Share of attempts answered correctly (0.0 - 1.0)
    pub fn accuracy(&self) -> f32 {
        if self.total_attempts == 0 {
            0.0
        } else {
            self.correct_answers as f32 / self.total_attempts as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_at_level_one() {
        let stats = UserStats::default();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.xp, 0);
        assert!(stats.unlocked_badges.is_empty());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let stats: UserStats = serde_json::from_str(r#"{"xp":250,"bestStreak":4}"#).unwrap();
        assert_eq!(stats.xp, 250);
        assert_eq!(stats.best_streak, 4);
        assert_eq!(stats.level, 1);
    }

    #[test]
    fn test_accuracy() {
        let mut stats = UserStats::default();
        assert_eq!(stats.accuracy(), 0.0);
        stats.correct_answers = 3;
        stats.total_attempts = 4;
        assert!((stats.accuracy() - 0.75).abs() < f32::EPSILON);
    }
}
