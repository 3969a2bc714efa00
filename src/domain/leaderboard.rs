use serde::{Deserialize, Serialize};

/// One finished session recorded in the hall of fame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    /// Local date the entry was recorded (YYYY-MM-DD)
    pub date: String,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            date: date.into(),
        }
    }

    /// Entry stamped with today's local date
    pub fn today(name: impl Into<String>, score: u32) -> Self {
        Self::new(name, score, chrono::Local::now().format("%Y-%m-%d").to_string())
    }
}

/// Ranked entries, highest score first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Wrap entries that are already ranked (e.g. freshly loaded)
    pub fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<LeaderboardEntry> {
        self.entries
    }
}
