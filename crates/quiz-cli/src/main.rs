mod game;
mod prompter;

use anyhow::Result;
use clap::Parser;
use quiz_core::{JsonFileStore, QuestionRepository, count_by_level};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::game::Game;
use crate::prompter::CliPrompter;

#[derive(Parser)]
#[command(name = "quiz")]
#[command(about = "Terminal quiz game with per-difficulty leaderboards")]
struct Args {
    /// Question data file
    #[arg(short, long, env = "QUIZ_QUESTIONS", default_value = "data/questions.json")]
    questions: PathBuf,

    /// Directory holding the leaderboard files
    #[arg(short, long, env = "QUIZ_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Play a single round instead of offering a replay
    #[arg(long)]
    once: bool,

    /// Disable colored feedback
    #[arg(long)]
    no_color: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the game on stdout
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(format!(
            "quiz_core={level},quiz_cli={level}",
            level = args.log_level
        ))
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Quiz starting...");

    let questions = QuestionRepository::new(&args.questions).load();
    if questions.is_empty() {
        warn!("No questions loaded from {:?}", args.questions);
    }
    for (level, count) in count_by_level(&questions) {
        if count == 0 {
            warn!("No questions for level {}", level);
        } else {
            info!("{} questions for level {}", count, level);
        }
    }

    let game = Game::new(questions, JsonFileStore::new(&args.data_dir));
    let mut prompter = CliPrompter::stdio(!args.no_color);
    let mut rng = rand::thread_rng();

    game.run(&mut prompter, &mut rng, !args.once)?;

    info!("Quiz finished");
    Ok(())
}
