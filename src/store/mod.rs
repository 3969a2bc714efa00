//! Persistence for player stats and the leaderboard
//!
//! The game core never touches storage directly; it is handed a [`Store`]
//! for each persisted value. Loading never fails: a missing or unreadable
//! value falls back to its default.

mod atomic;
mod json;
mod memory;

pub use atomic::write_atomic;
pub use json::JsonFileStore;
pub use memory::MemoryStore;

use anyhow::Result;

use crate::domain::{Leaderboard, UserStats};

/// Load/save access to one persisted value
pub trait Store<T>: Send {
    /// Current stored value, or the default when nothing usable is stored
    fn load(&self) -> T;

    fn save(&self, value: &T) -> Result<()>;
}

pub type StatsStore = Box<dyn Store<UserStats>>;
pub type LeaderboardStore = Box<dyn Store<Leaderboard>>;
