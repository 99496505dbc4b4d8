//! Guess feedback scoring
//!
//! Scoring a guess against the hidden solution produces one `LetterFeedback`
//! per position, following Wordle's exact rules for duplicate letters: a
//! repeated guess letter is credited at most as many times as it remains
//! unconsumed in the solution.

use super::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    /// Letter is in the solution at this exact position
    Correct,
    /// Letter is in the solution, but at a different position
    Present,
    /// Letter is not in the solution (or all its copies are spoken for)
    Absent,
}

/// Per-position feedback for one full guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// Score `guess` against `solution`
    ///
    /// Deterministic given the same inputs.
    ///
    /// # Algorithm
    /// 1. Count the solution's letters into a frequency map
    /// 2. First pass: mark exact position matches `Correct`, consuming from the map
    /// 3. Second pass: mark remaining positions `Present` while the letter has
    ///    unconsumed copies left, else `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_practice::core::{Feedback, LetterFeedback, Word};
    ///
    /// let guess = Word::new("weary").unwrap();
    /// let solution = Word::new("witch").unwrap();
    /// let feedback = Feedback::score(&guess, &solution);
    ///
    /// assert_eq!(feedback.letters()[0], LetterFeedback::Correct);
    /// assert!(!feedback.is_win());
    /// ```
    #[must_use]
    pub fn score(guess: &Word, solution: &Word) -> Self {
        let mut marks = [LetterFeedback::Absent; WORD_LENGTH];
        let mut remaining = solution.letter_counts();

        // First pass: exact position matches
        // Allow: index needed to compare guess[i] against solution[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.chars()[i] == solution.chars()[i] {
                marks[i] = LetterFeedback::Correct;

                // Consume from the remaining pool
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, while unconsumed copies remain
        // Allow: index needed to check/set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i] == LetterFeedback::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    marks[i] = LetterFeedback::Present;
                    *count -= 1;
                }
            }
        }

        Self(marks)
    }

    /// Get the per-position feedback values, in guess letter order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check whether every position is `Correct` (a winning guess)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&mark| mark == LetterFeedback::Correct)
    }

    /// Count the `Correct` positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&mark| mark == LetterFeedback::Correct)
            .count()
    }
}
