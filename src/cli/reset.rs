//! Reset command implementation

use anyhow::Result;

use bookquiz::config::Config;
use bookquiz::store::JsonFileStore;
use bookquiz::{Leaderboard, UserStats};

/// Delete saved stats and the hall of fame
pub fn reset_command(config: &Config) -> Result<()> {
    JsonFileStore::<UserStats>::new(config.stats_path()).clear()?;
    JsonFileStore::<Leaderboard>::new(config.leaderboard_path()).clear()?;
    println!("Progress and hall of fame cleared in {}", config.data_dir().display());
    Ok(())
}
