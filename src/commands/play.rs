//! Interactive play mode
//!
//! Runs rounds until the player stops, input ends, or the solution pool runs
//! dry, then persists the combined history. The save happens at exactly one
//! place, after the last completed round.

use crate::core::{Round, RoundState, Word};
use crate::lexicon::Lexicon;
use crate::output::{
    print_guess, print_header, print_instructions, print_stats_block, print_unused_letters,
};
use crate::session::{HistoryStore, RoundRecord, Session, Stats};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Settings for an interactive session
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub max_guesses: usize,
}

/// Run the interactive game loop
///
/// # Errors
///
/// Returns an error on terminal I/O failure or when the final history write
/// fails; the latter is deliberately fatal rather than silently dropped.
pub fn run_play(lexicon: &Lexicon, store: &HistoryStore, config: &PlayConfig) -> Result<()> {
    let history = store.load();
    let mut session = Session::new();
    let mut rng = rand::rng();

    print_instructions(config.max_guesses);

    loop {
        let Some(solution) = session.pick_solution(lexicon, &mut rng) else {
            println!("\nYou have played every word in the list. Nothing left to guess!");
            break;
        };

        println!();
        print_header(&format!("ROUND {}", session.rounds_played() + 1));

        let Some(round) = play_round(lexicon, solution, config.max_guesses)? else {
            // Input ended mid-round; the unfinished round is not recorded
            break;
        };
        session.push(RoundRecord::from(&round));

        print_statistics(&session, &history, config.max_guesses);

        if !prompt_yes("Play another round? (y/n)")? {
            break;
        }
    }

    let mut combined = history;
    combined.extend(session.records().iter().cloned());
    store.save(&combined)?;

    println!("\n👋 Thanks for playing!");
    Ok(())
}

/// Play a single round to completion
///
/// Returns `None` if input ended (EOF) before the round finished.
fn play_round(lexicon: &Lexicon, solution: Word, max_guesses: usize) -> Result<Option<Round>> {
    let mut round = Round::new(solution, max_guesses);

    while round.state() == RoundState::InProgress {
        let Some(line) = prompt_line("Must be a valid 5-letter word")? else {
            return Ok(None);
        };

        let guess = match parse_guess(&line, lexicon) {
            Ok(guess) => guess,
            Err(reason) => {
                println!("{}", format!("❌ {reason}").red());
                continue;
            }
        };

        let feedback = round.apply_guess(guess.clone())?;
        print_guess(&guess, &feedback);
        print_unused_letters(round.guesses());
        println!();
    }

    match round.state() {
        RoundState::Won => println!("Congrats! You win! 🎉"),
        RoundState::Lost => println!(
            "Sorry, you lost. The correct answer was {}.",
            round.solution().text().bold()
        ),
        RoundState::InProgress => unreachable!("loop exits only on terminal state"),
    }

    Ok(Some(round))
}

/// Validate one line of input as a guess
///
/// Wrong shape or unknown words are rejected here, before the round sees
/// them, so they never consume a turn.
fn parse_guess(input: &str, lexicon: &Lexicon) -> Result<Word, String> {
    let word = Word::new(input).map_err(|e| e.to_string())?;

    if !lexicon.contains(&word) {
        return Err(format!("'{word}' is not in the word list"));
    }

    Ok(word)
}

/// Print session and all-time statistics blocks
fn print_statistics(session: &Session, history: &[RoundRecord], max_guesses: usize) {
    println!();
    print_header("STATISTICS");
    println!();
    print_stats_block(
        "This session",
        &Stats::compute(session.records(), max_guesses),
    );

    if !history.is_empty() {
        let mut all_time = history.to_vec();
        all_time.extend(session.records().iter().cloned());
        print_stats_block("All time", &Stats::compute(&all_time, max_guesses));
    }
}

/// Ask a yes/no question; `None` input (EOF) counts as no
fn prompt_yes(prompt: &str) -> Result<bool> {
    let answer = prompt_line(prompt)?.unwrap_or_default().to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}

/// Read one trimmed line of input, or `None` at end of input
fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
