//! # quiz-core
//!
//! Core library for the terminal quiz game.
//!
//! This crate provides:
//! - Question loading and difficulty filtering
//! - Quiz sessions driven through the [`Prompter`] trait
//! - Input validation for names, difficulty levels and answer choices
//! - Per-difficulty leaderboards with atomic JSON persistence

pub mod error;
pub mod leaderboard;
pub mod level;
pub mod prompt;
pub mod question;
pub mod session;
pub mod validation;

pub use error::{Error, Result};
pub use leaderboard::{
    JsonFileStore, Leaderboard, LeaderboardStore, Player, apply_result, assign_ranks,
    format_ranking_header, format_ranking_line,
};
pub use level::Level;
pub use prompt::{Prompter, prompt_until_valid};
pub use question::{Question, QuestionRepository, count_by_level, filter_by_level};
pub use session::{AnswerFeedback, QuizOutcome, QuizSession, ask_question};
pub use validation::{
    QUIT_INPUT, ValidationError, is_quit_request, validate_choice, validate_level,
    validate_name,
};
