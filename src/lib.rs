//! Wordle Practice
//!
//! A terminal Wordle practice game: guess a hidden 5-letter word in six
//! tries, with colored per-letter feedback, session statistics, and a
//! persistent round history.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_practice::core::{Feedback, LetterFeedback, Word};
//!
//! let guess = Word::new("weary").unwrap();
//! let solution = Word::new("witch").unwrap();
//!
//! let feedback = Feedback::score(&guess, &solution);
//! assert_eq!(feedback.letters()[0], LetterFeedback::Correct);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod lexicon;

// Session, statistics, and persisted history
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
