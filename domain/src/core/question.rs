//! Question value object

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Minimum question length, in characters, after trimming.
pub const MIN_QUESTION_CHARS: usize = 3;

/// Maximum question length, in characters, after trimming.
pub const MAX_QUESTION_CHARS: usize = 1000;

/// Why a raw input string was rejected as a question.
///
/// Only the first violated rule is reported; the `Display` strings are the
/// user-facing messages.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionError {
    #[error("Per favore, inserisci una domanda.")]
    Empty,

    #[error("La domanda deve contenere almeno 3 caratteri.")]
    TooShort,

    #[error("La domanda è troppo lunga. Limite: 1000 caratteri.")]
    TooLong,
}

/// A validated question to send to the agent (Value Object)
///
/// Holds the trimmed input text, guaranteed to be 3–1000 characters long.
/// Nothing about a question outlives the single request it is submitted
/// with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Validate a raw input string into a question.
    ///
    /// Rules, in order: empty or whitespace-only, then shorter than
    /// [`MIN_QUESTION_CHARS`], then longer than [`MAX_QUESTION_CHARS`].
    /// Lengths are counted in characters, not bytes.
    pub fn parse(raw: &str) -> Result<Self, QuestionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QuestionError::Empty);
        }

        let chars = trimmed.chars().count();
        if chars < MIN_QUESTION_CHARS {
            return Err(QuestionError::TooShort);
        }
        if chars > MAX_QUESTION_CHARS {
            return Err(QuestionError::TooLong);
        }

        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl FromStr for Question {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Question::parse(s)
    }
}
