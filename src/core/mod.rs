//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and deterministic.

mod feedback;
mod round;
mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use round::{Round, RoundError, RoundState};
pub use word::{Word, WordError};

/// Number of letters in every word, guess, and solution.
pub const WORD_LENGTH: usize = 5;

/// Default number of guesses allowed per round.
pub const DEFAULT_MAX_GUESSES: usize = 6;
