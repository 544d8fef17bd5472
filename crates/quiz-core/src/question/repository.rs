use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::Question;
use crate::error::Result;
use crate::level::Level;

/// Read-only access to the bundled question file
#[derive(Debug, Clone)]
pub struct QuestionRepository {
    path: PathBuf,
}

impl QuestionRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load all questions, degrading to an empty list on any failure.
    pub fn load(&self) -> Vec<Question> {
        match self.try_load() {
            Ok(questions) => questions,
            Err(e) => {
                warn!(
                    "Failed to load questions from {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Load all questions, skipping entries that break the question invariants.
    pub fn try_load(&self) -> Result<Vec<Question>> {
        let content = fs::read_to_string(&self.path)?;
        let decoded: Vec<Question> = serde_json::from_str(&content)?;
        let total = decoded.len();

        let questions: Vec<Question> = decoded
            .into_iter()
            .enumerate()
            .filter_map(|(index, question)| match question.validate(index) {
                Ok(()) => Some(question),
                Err(e) => {
                    warn!("Skipping question: {}", e);
                    None
                }
            })
            .collect();

        info!(
            "Loaded {} of {} questions from {}",
            questions.len(),
            total,
            self.path.display()
        );
        Ok(questions)
    }

    /// Load the questions for one difficulty level.
    pub fn load_level(&self, level: Level) -> Vec<Question> {
        let questions = filter_by_level(self.load(), level);
        debug!("{} questions available for {}", questions.len(), level);
        questions
    }
}

/// Keep only questions of the given level, preserving order.
pub fn filter_by_level(questions: Vec<Question>, level: Level) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| q.difficulty == level)
        .collect()
}

/// Count questions per level, in level order.
pub fn count_by_level(questions: &[Question]) -> Vec<(Level, usize)> {
    Level::all()
        .map(|level| {
            let count = questions.iter().filter(|q| q.difficulty == level).count();
            (level, count)
        })
        .collect()
}
