use serde::{Deserialize, Serialize};

/// Screens of the game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppState {
    /// Resting state, where explorations start
    #[default]
    Home,
    /// A question is waiting for an answer
    Quiz,
    /// Feedback for the last answer
    Result,
    /// Time ran out; the score can be recorded
    GameOver,
    /// Hall of fame
    Leaderboard,
    /// Level and badge overview
    Achievements,
}

impl AppState {
    /// States during which the session clock runs
    pub fn is_timed(&self) -> bool {
        matches!(self, AppState::Quiz | AppState::Result)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppState::Home => "home",
            AppState::Quiz => "quiz",
            AppState::Result => "result",
            AppState::GameOver => "game_over",
            AppState::Leaderboard => "leaderboard",
            AppState::Achievements => "achievements",
        }
    }
}

impl std::fmt::Display for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
