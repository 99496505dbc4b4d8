//! Persistent round history
//!
//! Finished rounds are serialized as a JSON array and carried across program
//! runs. The store is append-only from the game's point of view: session
//! records are appended to the loaded history and written back as one
//! combined sequence when the session ends.

use crate::core::Round;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A finalized round, in the shape shared by session records and history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub solution: String,
    pub guesses: Vec<String>,
    pub won: bool,
}

impl From<&Round> for RoundRecord {
    fn from(round: &Round) -> Self {
        Self {
            solution: round.solution().text().to_string(),
            guesses: round
                .guesses()
                .iter()
                .map(|guess| guess.text().to_string())
                .collect(),
            won: round.won(),
        }
    }
}

/// File-backed store for past rounds
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all persisted rounds
    ///
    /// A missing or empty file yields an empty history. A malformed file also
    /// yields an empty history, with a warning on stderr.
    #[must_use]
    pub fn load(&self) -> Vec<RoundRecord> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };

        if content.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                eprintln!(
                    "{}",
                    format!(
                        "warning: ignoring malformed history file {}: {e}",
                        self.path.display()
                    )
                    .bright_black()
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the history file with the full combined sequence
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails. Callers
    /// must surface this rather than swallow it.
    pub fn save(&self, records: &[RoundRecord]) -> Result<()> {
        let json =
            serde_json::to_string_pretty(records).context("failed to serialize round history")?;

        fs::write(&self.path, json)
            .with_context(|| format!("failed to write history to {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::env;

    fn record(solution: &str, guesses: &[&str], won: bool) -> RoundRecord {
        RoundRecord {
            solution: solution.to_string(),
            guesses: guesses.iter().map(ToString::to_string).collect(),
            won,
        }
    }

    fn temp_store(name: &str) -> HistoryStore {
        let mut path = env::temp_dir();
        path.push(format!("wordle_practice_{name}_{}.json", std::process::id()));
        let _ = fs::remove_file(&path);
        HistoryStore::new(path)
    }

    #[test]
    fn record_from_round() {
        let mut round = Round::new(Word::new("think").unwrap(), 6);
        round.apply_guess(Word::new("crane").unwrap()).unwrap();
        round.apply_guess(Word::new("think").unwrap()).unwrap();

        let record = RoundRecord::from(&round);
        assert_eq!(record.solution, "think");
        assert_eq!(record.guesses, vec!["crane", "think"]);
        assert!(record.won);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let store = temp_store("missing");
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_empty_file_is_empty() {
        let store = temp_store("empty");
        fs::write(store.path(), "").unwrap();
        assert!(store.load().is_empty());
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn load_malformed_file_is_empty() {
        let store = temp_store("malformed");
        fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().is_empty());
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store("roundtrip");
        let records = vec![
            record("think", &["crane", "think"], true),
            record("witch", &["weary", "vague", "slate", "crane", "irate", "pride"], false),
        ];

        store.save(&records).unwrap();
        assert_eq!(store.load(), records);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn save_to_bad_path_is_an_error() {
        let store = HistoryStore::new("/nonexistent-dir/history.json");
        assert!(store.save(&[record("think", &["think"], true)]).is_err());
    }
}
