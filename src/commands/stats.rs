//! All-time statistics mode
//!
//! Prints the statistics block for the persisted history without starting a
//! game.

use crate::output::{print_header, print_stats_block};
use crate::session::{HistoryStore, Stats};

/// Print all-time statistics from the history file
pub fn run_stats(store: &HistoryStore, max_guesses: usize) {
    let history = store.load();

    print_header("ALL-TIME STATISTICS");
    println!();

    if history.is_empty() {
        println!("No rounds on record yet. Play a game first!");
        return;
    }

    print_stats_block(
        &format!("{} recorded rounds", history.len()),
        &Stats::compute(&history, max_guesses),
    );
}
