//! Terminal implementation of [`Prompter`].

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use owo_colors::OwoColorize;
use quiz_core::{AnswerFeedback, Error, Prompter, Result};

/// Line-based prompter over any reader/writer pair
pub struct CliPrompter<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl CliPrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process stdin/stdout
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> CliPrompter<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    // Output failures (e.g. a closed stdout) are ignored; only input ends the game
    fn write_line(&mut self, line: &str) {
        writeln!(self.output, "{}", line).ok();
    }
}

impl<R: BufRead, W: Write> Prompter for CliPrompter<R, W> {
    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt).ok();
        self.output.flush().ok();

        // Invalid UTF-8 becomes U+FFFD and is rejected by validation like any bad input
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(Error::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(strip_line_ending(&line).to_string())
    }

    fn display_message(&mut self, message: &str) {
        self.write_line(message);
    }

    fn display_warning(&mut self, message: &str) {
        if self.color {
            let styled = message.yellow().to_string();
            self.write_line(&styled);
        } else {
            self.write_line(message);
        }
    }

    fn report_answer(&mut self, feedback: &AnswerFeedback<'_>) {
        let mut lines = feedback.lines().into_iter();
        if let Some(verdict) = lines.next() {
            let verdict = match (self.color, feedback.correct) {
                (false, _) => verdict,
                (true, true) => verdict.green().bold().to_string(),
                (true, false) => verdict.red().bold().to_string(),
            };
            self.write_line(SEPARATOR);
            self.write_line(&verdict);
        }
        for line in lines {
            self.write_line(&line);
        }
        self.write_line(SEPARATOR);
    }
}

pub const SEPARATOR: &str = "----------------------------------";

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}
