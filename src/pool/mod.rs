//! Question pool provider
//!
//! A pool is a finite, read-only collection of uniquely identified quiz items.
//! Pools are validated once when built so the session selector can rely on
//! every item having a correct index in range and distinct option texts.

mod seed;

use std::collections::HashSet;
use std::path::Path;

use crate::domain::{QuizItem, QuizItemId};
use crate::error::PoolError;

/// Validated, non-empty question pool
#[derive(Debug, Clone)]
pub struct QuizPool {
    items: Vec<QuizItem>,
}

impl QuizPool {
    /// Build a pool, rejecting empty input and malformed items
    pub fn new(items: Vec<QuizItem>) -> Result<Self, PoolError> {
        if items.is_empty() {
            return Err(PoolError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            validate_item(item)?;
            if !seen.insert(item.id) {
                return Err(PoolError::DuplicateId(item.id));
            }
        }

        Ok(Self { items })
    }

    /// Parse a JSON array of quiz items
    pub fn from_json_str(json: &str) -> Result<Self, PoolError> {
        let items: Vec<QuizItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Load a JSON array of quiz items from disk
    pub fn from_json_file(path: &Path) -> Result<Self, PoolError> {
        let content = std::fs::read_to_string(path)?;
        let pool = Self::from_json_str(&content)?;
        tracing::debug!("Loaded {} quiz items from {}", pool.len(), path.display());
        Ok(pool)
    }

    /// The pool that ships with the game
    pub fn builtin() -> Self {
        Self {
            items: seed::expand_seed_themes(),
        }
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn get(&self, id: QuizItemId) -> Option<&QuizItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed pool; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Check the per-item invariants the selector depends on
pub fn validate_item(item: &QuizItem) -> Result<(), PoolError> {
    if item.correct_option().is_none() {
        return Err(PoolError::CorrectIndexOutOfRange {
            id: item.id,
            index: item.correct_answer_index,
        });
    }
    if item.has_duplicate_options() {
        return Err(PoolError::DuplicateOptions(item.id));
    }
    Ok(())
}
