//! Configuration loading and management

mod io;
mod settings;

pub use settings::{
    GameSettings, GeneratorSettings, LeaderboardSettings, PoolSettings, StorageSettings,
};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::pool::QuizPool;
use crate::progression::ProgressionRules;

/// Main configuration structure (`~/.bookquiz/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Session and progression rules
    #[serde(default)]
    pub game: GameSettings,

    /// Hall of fame size and name rules
    #[serde(default)]
    pub leaderboard: LeaderboardSettings,

    /// Where stats and the leaderboard are stored
    #[serde(default)]
    pub storage: StorageSettings,

    /// Question pool source
    #[serde(default)]
    pub pool: PoolSettings,

    /// Optional external question generator
    #[serde(default)]
    pub generator: GeneratorSettings,
}

impl Config {
    /// Directory holding stats and the leaderboard
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(Self::global_config_dir)
    }

    pub fn stats_path(&self) -> PathBuf {
        self.data_dir().join("stats.json")
    }

    pub fn leaderboard_path(&self) -> PathBuf {
        self.data_dir().join("leaderboard.json")
    }

    pub fn progression_rules(&self) -> ProgressionRules {
        ProgressionRules {
            streak_bonus_interval: self.game.streak_bonus_interval,
            streak_bonus_secs: self.game.streak_bonus_secs,
        }
    }

    /// Load the configured pool, falling back to the built-in one
    pub fn load_pool(&self) -> QuizPool {
        let Some(path) = &self.pool.path else {
            return QuizPool::builtin();
        };

        match QuizPool::from_json_file(path) {
            Ok(pool) => pool,
            Err(e) => {
                tracing::warn!(
                    "Failed to load question pool {}, using built-in pool: {}",
                    path.display(),
                    e
                );
                QuizPool::builtin()
            }
        }
    }
}
