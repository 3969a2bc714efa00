use serde::{Deserialize, Serialize};

/// Number of answer choices every quiz item carries
pub const OPTION_COUNT: usize = 4;

/// Stable identifier of a quiz item within its pool
pub type QuizItemId = u32;

/// A multiple-choice comprehension question about one book.
///
/// Read-only once it is part of a pool. The option array type pins the
/// choice count; the pool loader checks the remaining invariants
/// (correct index in range, distinct option texts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    pub id: QuizItemId,
    pub book_title: String,
    pub question: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer_index: usize,
    pub explanation: String,
}

impl QuizItem {
    /// Text of the correct option, if the index is in range
    pub fn correct_option(&self) -> Option<&str> {
        self.options
            .get(self.correct_answer_index)
            .map(String::as_str)
    }

    /// Whether two options share the same text
    pub fn has_duplicate_options(&self) -> bool {
        self.options
            .iter()
            .enumerate()
            .any(|(i, a)| self.options[i + 1..].contains(a))
    }
}

/// A quiz item as presented once: options permuted, correct index remapped.
///
/// Built fresh every time an item is served and owned by the running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledQuestion {
    pub item_id: QuizItemId,
    pub book_title: String,
    pub question: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer_index: usize,
    pub explanation: String,
}

impl ShuffledQuestion {
    pub fn is_correct(&self, chosen_index: usize) -> bool {
        chosen_index == self.correct_answer_index
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer_index]
    }
}

/// Book metadata handed to an external question generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInfo {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
}
