//! One playthrough of the quiz.
//!
//! Questions are asked in a random order drawn from the caller's RNG. Each
//! answer is scored and reported immediately; the final score is returned
//! once every question has been answered.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::error::Result;
use crate::prompt::{Prompter, prompt_until_valid};
use crate::question::Question;
use crate::validation::validate_choice;

/// Result of one answered question
#[derive(Debug, Clone, Copy)]
pub struct AnswerFeedback<'a> {
    pub question: &'a Question,
    pub correct: bool,
}

impl AnswerFeedback<'_> {
    /// Human-readable feedback, one entry per line
    pub fn lines(&self) -> Vec<String> {
        let verdict = if self.correct {
            "Correct answer!".to_string()
        } else {
            format!(
                "Wrong answer. The correct answer was: {}",
                self.question.correct_option()
            )
        };
        vec![verdict, format!("Infos: {}", self.question.infos)]
    }
}

/// Final tally of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: u32,
    pub question_count: usize,
}

pub struct QuizSession {
    questions: Vec<Question>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Ask every question once, in an order shuffled with `rng`.
    pub fn run<P, R>(&self, prompter: &mut P, rng: &mut R) -> Result<QuizOutcome>
    where
        P: Prompter + ?Sized,
        R: Rng + ?Sized,
    {
        let mut order: Vec<&Question> = self.questions.iter().collect();
        order.shuffle(rng);

        let mut score = 0u32;
        for (index, question) in order.into_iter().enumerate() {
            if ask_question(prompter, index + 1, question)? {
                score += 1;
            }
        }

        info!("Session finished: {}/{}", score, self.questions.len());
        Ok(QuizOutcome {
            score,
            question_count: self.questions.len(),
        })
    }
}

/// Display one question, read a valid choice, and report the outcome.
///
/// Returns whether the answer was correct.
pub fn ask_question<P>(prompter: &mut P, number: usize, question: &Question) -> Result<bool>
where
    P: Prompter + ?Sized,
{
    prompter.display_message(&format!("\nQuestion {}: {}", number, question.question));
    for (index, option) in question.options.iter().enumerate() {
        prompter.display_message(&format!("{}. {}", index + 1, option));
    }

    let option_count = question.option_count();
    let prompt = format!("Choose an answer (1-{}): ", option_count);
    let choice = prompt_until_valid(prompter, &prompt, |input| {
        validate_choice(input, option_count)
    })?;

    let correct = question.is_correct(choice - 1);
    debug!(
        "Question {:?}: picked {}, correct={}",
        question.question, choice, correct
    );

    prompter.report_answer(&AnswerFeedback { question, correct });
    Ok(correct)
}
