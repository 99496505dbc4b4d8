//! Wordle Practice - CLI
//!
//! Terminal Wordle practice game: interactive rounds with colored feedback,
//! plus an all-time statistics view over the persisted history.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_practice::{
    commands::{PlayConfig, run_play, run_stats},
    core::DEFAULT_MAX_GUESSES,
    lexicon::Lexicon,
    session::HistoryStore,
};

#[derive(Parser)]
#[command(
    name = "wordle_practice",
    about = "Terminal Wordle practice game with session statistics and persistent history",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Maximum guesses per round
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Path to the round history file
    #[arg(long, global = true, default_value = "wordle_history.json")]
    history: PathBuf,

    /// Custom word list file (one word per line; every word is guessable and
    /// solution-eligible). Defaults to the embedded lists.
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds interactively (default)
    Play,

    /// Print all-time statistics from the history file
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lexicon = match &cli.words {
        Some(path) => Lexicon::from_file(path)?,
        None => Lexicon::embedded(),
    };
    let store = HistoryStore::new(&cli.history);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let config = PlayConfig {
                max_guesses: cli.max_guesses,
            };
            run_play(&lexicon, &store, &config)
        }
        Commands::Stats => {
            run_stats(&store, cli.max_guesses);
            Ok(())
        }
    }
}
