//! Quiz questions and the repository that loads them.
//!
//! Questions are read once from a JSON data file and never modified.

mod repository;

pub use repository::{QuestionRepository, count_by_level, filter_by_level};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::level::Level;

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`
    pub correct_answer: usize,
    /// Trivia shown after the question is answered
    pub infos: String,
    pub difficulty: Level,
    pub category: String,
}

impl Question {
    /// Minimum number of options a question must offer
    pub const MIN_OPTIONS: usize = 2;

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Text of the correct option
    pub fn correct_option(&self) -> &str {
        self.options
            .get(self.correct_answer)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Check a zero-based choice against the correct answer
    pub fn is_correct(&self, choice_index: usize) -> bool {
        choice_index == self.correct_answer
    }

    /// Check the structural invariants of a decoded question.
    ///
    /// `index` is the position in the data file and only used for the error.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.options.len() < Self::MIN_OPTIONS {
            return Err(Error::InvalidQuestion {
                index,
                message: format!(
                    "needs at least {} options, has {}",
                    Self::MIN_OPTIONS,
                    self.options.len()
                ),
            });
        }
        if self.correct_answer >= self.options.len() {
            return Err(Error::InvalidQuestion {
                index,
                message: format!(
                    "correct answer {} out of range for {} options",
                    self.correct_answer,
                    self.options.len()
                ),
            });
        }
        Ok(())
    }
}
