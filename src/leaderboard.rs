//! Hall of fame ledger
//!
//! A leaderboard only ever changes by appending one entry, re-ranking by
//! score and dropping whatever falls below the size limit. Dropped entries
//! are gone for good.

use crate::config::LeaderboardSettings;
use crate::domain::{Leaderboard, LeaderboardEntry};

/// Trim a player name and cut it to `max_chars` characters.
///
/// Returns `None` when nothing is left once the name is cut and trimmed.
pub fn normalize_name(raw: &str, max_chars: usize) -> Option<String> {
    let name: String = raw.trim_start().chars().take(max_chars).collect();
    let name = name.trim_end();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Merge `entry` into `board`.
///
/// Returns `None`, leaving the board as it was, when the entry's name is
/// blank. Equal scores keep their submission order.
pub fn submit(
    board: &Leaderboard,
    entry: LeaderboardEntry,
    settings: &LeaderboardSettings,
) -> Option<Leaderboard> {
    let name = normalize_name(&entry.name, settings.name_max_chars)?;

    let mut entries = board.entries().to_vec();
    entries.push(LeaderboardEntry { name, ..entry });
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(settings.max_entries);

    Some(Leaderboard::from_entries(entries))
}

/// 1-based rank of the best entry matching `name` and `score`
pub fn rank_of(board: &Leaderboard, name: &str, score: u32) -> Option<usize> {
    board
        .entries()
        .iter()
        .position(|e| e.name == name && e.score == score)
        .map(|i| i + 1)
}
