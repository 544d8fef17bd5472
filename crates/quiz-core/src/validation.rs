//! Pure validators for everything the player types.
//!
//! Each validator takes one input line (without its terminator) and either
//! returns the parsed value or a [`ValidationError`] whose message is shown
//! before re-prompting.

use thiserror::Error;

use crate::level::Level;

/// Input that quits the replay loop
pub const QUIT_INPUT: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid name. Please enter a name containing only letters.")]
    EmptyName,

    #[error("Invalid name: '{0}' is not a letter. Please use letters only.")]
    InvalidNameCharacter(char),

    #[error("Invalid input: '{0}' is not a number.")]
    NotANumber(String),

    #[error("Invalid difficulty {0}. Please enter 1, 2 or 3.")]
    LevelOutOfRange(i64),

    #[error("Invalid choice {choice}. Please enter a number between 1 and {max}.")]
    ChoiceOutOfRange { choice: i64, max: usize },
}

/// Accept one or more ASCII letters and nothing else.
pub fn validate_name(input: &str) -> Result<String, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if let Some(c) = input.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidNameCharacter(c));
    }
    Ok(input.to_string())
}

/// Accept an integer between 1 and 3 inclusive.
pub fn validate_level(input: &str) -> Result<Level, ValidationError> {
    let value = parse_integer(input)?;
    u8::try_from(value)
        .ok()
        .and_then(Level::from_u8)
        .ok_or(ValidationError::LevelOutOfRange(value))
}

/// Accept a 1-based option number in `[1, option_count]`.
pub fn validate_choice(input: &str, option_count: usize) -> Result<usize, ValidationError> {
    let value = parse_integer(input)?;
    match usize::try_from(value) {
        Ok(choice) if (1..=option_count).contains(&choice) => Ok(choice),
        _ => Err(ValidationError::ChoiceOutOfRange {
            choice: value,
            max: option_count,
        }),
    }
}

/// Whether the answer to the replay question asks to quit.
pub fn is_quit_request(input: &str) -> bool {
    input.trim() == QUIT_INPUT
}

fn parse_integer(input: &str) -> Result<i64, ValidationError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))
}
