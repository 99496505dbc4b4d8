//! Word repository
//!
//! The lexicon holds every word accepted as a guess, plus the subset eligible
//! to be a round's hidden solution. Membership checks are hash-based, not
//! list scans.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// The set of valid guess words and the pool of solution candidates
#[derive(Debug, Clone)]
pub struct Lexicon {
    members: FxHashSet<Word>,
    solutions: Vec<Word>,
}

impl Lexicon {
    /// Build a lexicon from explicit word lists
    ///
    /// Solutions are always members, even if absent from `allowed`.
    #[must_use]
    pub fn new(allowed: Vec<Word>, solutions: Vec<Word>) -> Self {
        let mut members: FxHashSet<Word> = allowed.into_iter().collect();
        members.extend(solutions.iter().cloned());

        Self { members, solutions }
    }

    /// Build the lexicon from the embedded word lists
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(ALLOWED),
            loader::words_from_slice(SOLUTIONS),
        )
    }

    /// Load a custom lexicon from a file, one word per line
    ///
    /// Every word in the file is both guessable and solution-eligible.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let words = loader::load_from_file(path)?;
        Ok(Self::new(words.clone(), words))
    }

    /// Check whether `word` is an accepted guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.members.contains(word)
    }

    /// All solution-eligible words
    #[inline]
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Number of accepted guess words
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the lexicon has no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
