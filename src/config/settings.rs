//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::progression::StreakPolicy;
use crate::session::ExhaustionPolicy;

/// Session and progression rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Seconds on the clock when an exploration starts
    #[serde(default = "default_time_budget_secs")]
    pub time_budget_secs: u32,

    /// Every time the streak reaches a multiple of this, bonus time is granted.
    /// Set to 0 to disable the time bonus.
    #[serde(default = "default_streak_bonus_interval")]
    pub streak_bonus_interval: u32,

    /// Bonus seconds added to the clock
    #[serde(default = "default_streak_bonus_secs")]
    pub streak_bonus_secs: u32,

    /// Whether the answer streak carries over between sessions
    #[serde(default)]
    pub streak_policy: StreakPolicy,

    /// What happens once every question has been served
    #[serde(default)]
    pub exhaustion_policy: ExhaustionPolicy,
}

fn default_time_budget_secs() -> u32 {
    60
}

fn default_streak_bonus_interval() -> u32 {
    5
}

fn default_streak_bonus_secs() -> u32 {
    3
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            time_budget_secs: default_time_budget_secs(),
            streak_bonus_interval: default_streak_bonus_interval(),
            streak_bonus_secs: default_streak_bonus_secs(),
            streak_policy: StreakPolicy::default(),
            exhaustion_policy: ExhaustionPolicy::default(),
        }
    }
}

/// Hall of fame rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardSettings {
    /// Entries kept after each submission
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Player names are trimmed and cut to this many characters
    #[serde(default = "default_name_max_chars")]
    pub name_max_chars: usize,
}

fn default_max_entries() -> usize {
    15
}

fn default_name_max_chars() -> usize {
    10
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            name_max_chars: default_name_max_chars(),
        }
    }
}

/// Storage locations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory for stats.json and leaderboard.json (default: ~/.bookquiz)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Question pool source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolSettings {
    /// JSON file with an array of quiz items (default: built-in pool)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// External question generator program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Program that reads book JSON on stdin and prints a question as JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(default)]
    pub args: Vec<String>,

    /// Give up and use the fallback question after this many seconds
    #[serde(default = "default_generator_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_generator_timeout_secs() -> u64 {
    10
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            command: None,
            args: Vec::new(),
            timeout_secs: default_generator_timeout_secs(),
        }
    }
}
