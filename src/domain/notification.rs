/// Fire-and-forget feedback emitted by the game (sound cues, flashes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    CorrectAnswer,
    WrongAnswer,
    LevelUp { level: u32 },
    StreakBonus { seconds: u32 },
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notification::CorrectAnswer => write!(f, "correct"),
            Notification::WrongAnswer => write!(f, "wrong"),
            Notification::LevelUp { level } => write!(f, "level up ({})", level),
            Notification::StreakBonus { seconds } => write!(f, "streak bonus (+{}s)", seconds),
        }
    }
}
