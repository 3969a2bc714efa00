//! Core domain types for the quiz game

mod leaderboard;
mod notification;
mod quiz;
mod stats;

pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use notification::Notification;
pub use quiz::{BookInfo, OPTION_COUNT, QuizItem, QuizItemId, ShuffledQuestion};
pub use stats::UserStats;
