//! Init command implementation

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

use bookquiz::config::Config;

/// Default configuration content for bookquiz init
pub const DEFAULT_CONFIG: &str = r#"# BookQuiz Configuration - Forest of Books
# =======================
#
# Every setting is optional; delete a line to fall back to its default.

# ============================================================================
# GAME - Session clock and progression rules
# ============================================================================
#
# Available options:
#   time_budget_secs      - Seconds on the clock for each exploration (default: 60)
#   streak_bonus_interval - Every N-th answer in a streak adds bonus time (default: 5, 0 = off)
#   streak_bonus_secs     - Seconds added by the streak bonus (default: 3)
#   streak_policy         - "carry_over" keeps your streak between sessions,
#                           "reset_per_session" starts every exploration from zero
#   exhaustion_policy     - Once every question has been asked:
#                           "reset_and_serve" starts over with the whole pool,
#                           "reset_and_retry" clears the asked list and selects again

[game]
time_budget_secs = 60
streak_bonus_interval = 5
streak_bonus_secs = 3
streak_policy = "carry_over"
exhaustion_policy = "reset_and_serve"

# ============================================================================
# LEADERBOARD - Hall of fame
# ============================================================================

[leaderboard]
# Entries kept, highest score first
max_entries = 15
# Names are trimmed and cut to this many characters
name_max_chars = 10

# ============================================================================
# STORAGE / POOL / GENERATOR
# ============================================================================

[storage]
# Where stats.json and leaderboard.json live (default: ~/.bookquiz)
# data_dir = "/home/me/.bookquiz"

[pool]
# JSON array of quiz items; the built-in pool is used when unset
# path = "/home/me/books/questions.json"

[generator]
# Program that reads {"title", "author", "description"} on stdin and prints
# one question as JSON. Used by `bookquiz generate`.
# command = "my-question-writer"
# args = ["--lang", "en"]
timeout_secs = 10
"#;

/// Write the default config to `config_path` (or the global config path)
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}
