//! Console interaction seam.
//!
//! The quiz logic only talks to the player through [`Prompter`], so it can be
//! driven by a terminal in the CLI and by scripted input in tests.

use tracing::debug;

use crate::error::Result;
use crate::session::AnswerFeedback;
use crate::validation::ValidationError;

/// Line-based prompt/response interface
pub trait Prompter {
    /// Show `prompt` and read one line without its terminator.
    ///
    /// Returns [`Error::InputClosed`](crate::Error::InputClosed) at end of input.
    fn prompt_line(&mut self, prompt: &str) -> Result<String>;

    fn display_message(&mut self, message: &str);

    fn display_warning(&mut self, message: &str);

    /// Report the outcome of one answered question
    fn report_answer(&mut self, feedback: &AnswerFeedback<'_>) {
        for line in feedback.lines() {
            self.display_message(&line);
        }
    }
}

/// Prompt repeatedly until `validate` accepts the input.
///
/// There is no retry limit; only end of input stops the loop.
pub fn prompt_until_valid<P, T, F>(prompter: &mut P, prompt: &str, validate: F) -> Result<T>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> std::result::Result<T, ValidationError>,
{
    loop {
        let line = prompter.prompt_line(prompt)?;
        match validate(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!("Rejected input {:?}: {}", line, e);
                prompter.display_warning(&e.to_string());
            }
        }
    }
}
