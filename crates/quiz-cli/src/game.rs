//! Console driver: name and difficulty prompts, one quiz round, ranking, replay.

use quiz_core::{
    Error, Leaderboard, LeaderboardStore, Level, Prompter, Question, QuizOutcome, QuizSession,
    Result, filter_by_level, format_ranking_header, format_ranking_line, is_quit_request,
    prompt_until_valid, validate_level, validate_name,
};
use rand::Rng;
use tracing::{debug, info};

use crate::prompter::SEPARATOR;

const NAME_PROMPT: &str = "Please enter your name (letters only): ";
const LEVEL_PROMPT: &str = "Select a difficulty level (1 = Easy, 2 = Medium, 3 = Hard): ";
const REPLAY_PROMPT: &str = "Enter 0 to quit, anything else to play again: ";

/// Question set and leaderboard shared by every round.
///
/// Questions are loaded once at startup and never re-read.
pub struct Game<S> {
    pub questions: Vec<Question>,
    pub leaderboard: Leaderboard<S>,
}

impl<S: LeaderboardStore> Game<S> {
    pub fn new(questions: Vec<Question>, store: S) -> Self {
        Self {
            questions,
            leaderboard: Leaderboard::new(store),
        }
    }

    /// Play rounds until the player quits or input ends.
    ///
    /// With `replay` off exactly one round is played.
    pub fn run<P, R>(&self, prompter: &mut P, rng: &mut R, replay: bool) -> Result<()>
    where
        P: Prompter + ?Sized,
        R: Rng + ?Sized,
    {
        loop {
            match self.play_round(prompter, rng) {
                Ok(_) => {}
                Err(Error::InputClosed) => {
                    info!("Input closed, exiting");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }

            if !replay {
                return Ok(());
            }

            match prompter.prompt_line(REPLAY_PROMPT) {
                Ok(answer) if is_quit_request(&answer) => {
                    prompter.display_message("Goodbye!");
                    return Ok(());
                }
                Ok(_) => debug!("Starting another round"),
                Err(Error::InputClosed) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    /// Play one full round.
    ///
    /// Returns `None` when the selected level has no questions.
    pub fn play_round<P, R>(&self, prompter: &mut P, rng: &mut R) -> Result<Option<QuizOutcome>>
    where
        P: Prompter + ?Sized,
        R: Rng + ?Sized,
    {
        prompter.display_message(SEPARATOR);
        prompter.display_message("Welcome to the quiz game!");
        prompter.display_message(SEPARATOR);

        let name = prompt_until_valid(prompter, NAME_PROMPT, validate_name)?;
        prompter.display_message(SEPARATOR);
        prompter.display_message(&format!("Hello, {}!", name));
        prompter.display_message(SEPARATOR);

        let level = prompt_until_valid(prompter, LEVEL_PROMPT, validate_level)?;
        prompter.display_message(SEPARATOR);
        prompter.display_message(&format!(
            "Selected difficulty: {} ({})",
            level.as_u8(),
            level
        ));

        let session = QuizSession::new(filter_by_level(self.questions.clone(), level));
        if session.is_empty() {
            prompter.display_message(SEPARATOR);
            prompter.display_message("No questions available for the selected difficulty.");
            prompter.display_message(SEPARATOR);
            return Ok(None);
        }

        info!(
            "{} starts a {} round with {} questions",
            name,
            level,
            session.len()
        );
        let outcome = session.run(prompter, rng)?;

        prompter.display_message(&format!(
            "\nYour final score is: {}/{}\n",
            outcome.score, outcome.question_count
        ));
        prompter.display_message(SEPARATOR);

        self.leaderboard
            .record_result(&name, outcome.score, level);

        prompter.display_message(&format!("Thanks for playing, {}!", name));
        prompter.display_message(SEPARATOR);
        self.show_ranking(prompter, level);
        prompter.display_message(&format!("\n{}", SEPARATOR));

        Ok(Some(outcome))
    }

    pub fn show_ranking<P: Prompter + ?Sized>(&self, prompter: &mut P, level: Level) {
        let players = self.leaderboard.ranking(level);
        prompter.display_message(&format!("\n{}", format_ranking_header(level)));
        if players.is_empty() {
            prompter.display_message("No players ranked yet.");
            return;
        }
        for player in &players {
            prompter.display_message(&format_ranking_line(player));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompter::CliPrompter;
    use quiz_core::{JsonFileStore, Player, QuestionRepository};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    const QUESTIONS: &str = r#"[
        {"question": "2+2?", "options": ["3", "4"], "correctAnswer": 1,
         "infos": "Two plus two is four", "difficulty": 1, "category": "Math"},
        {"question": "Largest moon of Saturn?", "options": ["Rhea", "Titan", "Mimas"], "correctAnswer": 1,
         "infos": "Titan has a thick atmosphere", "difficulty": 3, "category": "Science"}
    ]"#;

    fn setup() -> (TempDir, Game<JsonFileStore>) {
        let dir = tempfile::tempdir().unwrap();
        let questions_path = dir.path().join("questions.json");
        fs::write(&questions_path, QUESTIONS).unwrap();
        let game = Game::new(
            QuestionRepository::new(&questions_path).load(),
            JsonFileStore::new(dir.path().join("scores")),
        );
        (dir, game)
    }

    fn play(game: &Game<JsonFileStore>, input: &str, replay: bool) -> String {
        let mut prompter =
            CliPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false);
        let mut rng = StdRng::seed_from_u64(11);
        game.run(&mut prompter, &mut rng, replay).unwrap();
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_correct_answer_records_score() {
        let (_dir, game) = setup();
        let output = play(&game, "Bob\n1\n2\n", false);

        assert!(output.contains("Correct answer!"));
        assert!(output.contains("Your final score is: 1/1"));
        assert!(output.contains("Player: Bob - Score: 1 - Rank: 1"));

        let players = game.leaderboard.load(Level::Easy);
        assert_eq!(
            players,
            vec![Player {
                name: "Bob".to_string(),
                score: 1,
                rank: 1
            }]
        );
    }

    #[test]
    fn test_wrong_answer_scores_zero() {
        let (_dir, game) = setup();
        let output = play(&game, "Bob\n1\n1\n", false);

        assert!(output.contains("Wrong answer. The correct answer was: 4"));
        assert!(output.contains("Your final score is: 0/1"));
        assert_eq!(game.leaderboard.load(Level::Easy)[0].score, 0);
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (_dir, game) = setup();
        let output = play(&game, "Bob1\nBob\n0\n4\nx\n1\n9\nabc\n2\n", false);

        assert!(output.contains("Invalid name: '1' is not a letter"));
        assert!(output.contains("Invalid difficulty 0."));
        assert!(output.contains("Invalid difficulty 4."));
        assert!(output.contains("Invalid input: 'x' is not a number."));
        assert!(output.contains("Invalid choice 9."));
        assert!(output.contains("Invalid input: 'abc' is not a number."));
        assert!(output.contains("Your final score is: 1/1"));
    }

    #[test]
    fn test_level_without_questions() {
        let (_dir, game) = setup();
        let output = play(&game, "Bob\n2\n", false);

        assert!(output.contains("No questions available for the selected difficulty."));
        assert!(game.leaderboard.load(Level::Medium).is_empty());
    }

    #[test]
    fn test_replay_until_quit() {
        let (_dir, game) = setup();
        let output = play(&game, "Alice\n3\n2\n\nBob\n3\n1\n0\n", true);

        assert_eq!(output.matches("Welcome to the quiz game!").count(), 2);
        assert!(output.contains("Goodbye!"));

        let players = game.leaderboard.load(Level::Hard);
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].name, "Alice");
        assert_eq!(players[0].rank, 1);
        assert_eq!(players[1].name, "Bob");
        assert_eq!(players[1].rank, 2);
    }

    #[test]
    fn test_replay_overwrites_previous_score() {
        let (_dir, game) = setup();
        play(&game, "Bob\n1\n2\nagain\nBob\n1\n1\n0\n", true);

        let players = game.leaderboard.load(Level::Easy);
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].score, 0);
    }

    #[test]
    fn test_input_closed_exits_cleanly() {
        let (_dir, game) = setup();
        let output = play(&game, "Bob\n", true);
        assert!(output.contains("Hello, Bob!"));
        assert!(game.leaderboard.load(Level::Easy).is_empty());
    }

    #[test]
    fn test_missing_questions_file() {
        let dir = tempfile::tempdir().unwrap();
        let game = Game::new(
            QuestionRepository::new(dir.path().join("missing.json")).load(),
            JsonFileStore::new(dir.path()),
        );
        let output = play(&game, "Bob\n1\n", false);
        assert!(output.contains("No questions available for the selected difficulty."));
    }

    #[test]
    fn test_questions_not_reread_between_rounds() {
        let (dir, game) = setup();
        play(&game, "Bob\n1\n2\n", false);

        fs::write(dir.path().join("questions.json"), "[]").unwrap();
        let output = play(&game, "Bob\n1\n2\n", false);

        assert!(output.contains("Question 1: 2+2?"));
        assert!(output.contains("Your final score is: 1/1"));
        assert!(!output.contains("No questions available"));
    }

    #[test]
    fn test_invalid_utf8_answer_reprompts() {
        let (_dir, game) = setup();
        let input: &[u8] = b"Bob\n1\n\xff\xfe\n2\n";
        let mut prompter = CliPrompter::new(Cursor::new(input.to_vec()), Vec::new(), false);
        let mut rng = StdRng::seed_from_u64(11);
        game.run(&mut prompter, &mut rng, false).unwrap();
        let output = String::from_utf8(prompter.into_output()).unwrap();

        assert!(output.contains("Invalid input: '\u{fffd}\u{fffd}' is not a number."));
        assert!(output.contains("Your final score is: 1/1"));
        assert_eq!(game.leaderboard.load(Level::Easy)[0].score, 1);
    }

    #[test]
    fn test_bundled_questions_cover_every_level() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/questions.json");
        let questions = QuestionRepository::new(path).try_load().unwrap();
        for (level, count) in quiz_core::count_by_level(&questions) {
            assert!(count > 0, "no bundled questions for {}", level);
        }
    }

    #[test]
    fn test_empty_ranking_message() {
        let (_dir, game) = setup();
        let mut prompter = CliPrompter::new(Cursor::new(Vec::new()), Vec::new(), false);
        game.show_ranking(&mut prompter, Level::Medium);
        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.contains("Player ranking for difficulty 2 (Medium):"));
        assert!(output.contains("No players ranked yet."));
    }
}
