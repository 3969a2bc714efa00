//! External question generation
//!
//! A generator turns book metadata into a fresh quiz item, typically by
//! asking some external service. It may be slow or fail outright, so callers
//! go through [`generate_or_fallback`], which always produces a usable item.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::config::GeneratorSettings;
use crate::domain::{BookInfo, OPTION_COUNT, QuizItem, QuizItemId};
use crate::error::GeneratorError;
use crate::pool::validate_item;

/// Id given to generated and fallback items; pool ids start at 1
pub const GENERATED_ITEM_ID: QuizItemId = 0;

#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, book: &BookInfo) -> Result<QuizItem, GeneratorError>;
}

/// Question as a generator returns it: no id, options not yet checked
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedQuestion {
    book_title: String,
    question: String,
    options: Vec<String>,
    correct_answer_index: usize,
    explanation: String,
}

/// Parse and validate generator output
pub fn parse_generated(json: &str) -> Result<QuizItem, GeneratorError> {
    let generated: GeneratedQuestion = serde_json::from_str(json.trim())?;

    let options: [String; OPTION_COUNT] = generated
        .options
        .try_into()
        .map_err(|options: Vec<String>| GeneratorError::WrongOptionCount(options.len()))?;

    let item = QuizItem {
        id: GENERATED_ITEM_ID,
        book_title: generated.book_title,
        question: generated.question,
        options,
        correct_answer_index: generated.correct_answer_index,
        explanation: generated.explanation,
    };
    validate_item(&item)?;
    Ok(item)
}

/// Deterministic stand-in used whenever generation fails
pub fn fallback_question(book: &BookInfo) -> QuizItem {
    QuizItem {
        id: GENERATED_ITEM_ID,
        book_title: book.title.clone(),
        question: format!("What stayed with you most after reading {}?", book.title),
        options: [
            "The hero's courage",
            "Friendship",
            "Sharing with others",
            "A new adventure",
        ]
        .map(String::from),
        correct_answer_index: 0,
        explanation: "What you felt while reading matters more than the right answer!"
            .to_string(),
    }
}

/// Ask `generator` for a question, substituting the fallback on failure or
/// when `timeout` elapses first
pub async fn generate_or_fallback(
    generator: &dyn QuestionGenerator,
    book: &BookInfo,
    timeout: Duration,
) -> QuizItem {
    let result = match tokio::time::timeout(timeout, generator.generate(book)).await {
        Ok(result) => result,
        Err(_) => Err(GeneratorError::Timeout(timeout)),
    };

    result.unwrap_or_else(|e| {
        tracing::warn!("Question generation for '{}' failed: {}", book.title, e);
        fallback_question(book)
    })
}

/// Generator that runs an external program.
///
/// The book is written to the program's stdin as JSON; the program prints
/// one question as JSON on stdout.
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from settings, if a command is configured
    pub fn from_settings(settings: &GeneratorSettings) -> Option<Self> {
        settings
            .command
            .as_ref()
            .map(|program| Self::new(program.clone(), settings.args.clone()))
    }
}

#[async_trait]
impl QuestionGenerator for CommandGenerator {
    async fn generate(&self, book: &BookInfo) -> Result<QuizItem, GeneratorError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let payload = serde_json::to_vec(book)?;
        if let Some(mut stdin) = child.stdin.take() {
            // Programs that ignore their input may exit before reading it
            if let Err(e) = stdin.write_all(&payload).await {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(GeneratorError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::debug!("Generator '{}' produced {} bytes", self.program, output.stdout.len());
        parse_generated(&String::from_utf8_lossy(&output.stdout))
    }
}
