//! Error types for the library seams

use std::time::Duration;

use crate::app::AppState;
use crate::domain::QuizItemId;

/// Problems found while loading or validating a question pool
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("Question pool is empty")]
    Empty,

    #[error("Duplicate quiz item id: {0}")]
    DuplicateId(QuizItemId),

    #[error("Quiz item {id}: correct answer index {index} is out of range")]
    CorrectIndexOutOfRange { id: QuizItemId, index: usize },

    #[error("Quiz item {0}: option texts must be distinct")]
    DuplicateOptions(QuizItemId),

    #[error("Failed to read pool file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse pool file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected state machine actions. The state is left untouched.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Cannot {action} while in {state} state")]
    InvalidAction {
        state: AppState,
        action: &'static str,
    },

    #[error("Answer index {0} is out of range")]
    AnswerOutOfRange(usize),
}

/// Failures of the external question generator
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Failed to run generator: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generator exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("Generator timed out after {0:?}")]
    Timeout(Duration),

    #[error("Generator returned {0} options, expected 4")]
    WrongOptionCount(usize),

    #[error("Generator returned malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Generator returned an invalid question: {0}")]
    Invalid(#[from] PoolError),
}
