//! Terminal rendering for the game
//!
//! Headers, the instructions screen, colored per-letter feedback lines, the
//! unused-letters hint, and statistics blocks.

use super::formatters::distribution_bar;
use crate::core::{Feedback, LetterFeedback, Word};
use crate::session::Stats;
use colored::Colorize;

const DIVIDER_WIDTH: usize = 60;
const BAR_WIDTH: usize = 24;

/// Print a section title between blue dividers
pub fn print_header(title: &str) {
    let divider = "─".repeat(DIVIDER_WIDTH).blue();
    println!("{divider}");
    println!("{title}");
    println!("{divider}");
}

/// Print the instructions screen shown at startup
pub fn print_instructions(max_guesses: usize) {
    print_header("WORDLE PRACTICE");

    println!("\nGuess the word in {max_guesses} tries.\n");
    println!("Each guess must be a valid 5 letter word. Hit the Enter button to submit.\n");
    println!(
        "After each guess, you will see output that shows you how close your guess was to the word.\n"
    );

    println!("{}\n", "Examples:".underline());
    print_example(
        "weary",
        "witch",
        "The letter W is in the word and in the correct spot.",
    );
    print_example(
        "pills",
        "think",
        "The letter I is in the word but in the wrong spot.",
    );
    print_example(
        "vague",
        "think",
        "None of the letters are in the word in any spot.",
    );
}

fn print_example(guess: &str, solution: &str, explanation: &str) {
    let guess = Word::new(guess).expect("example words are valid");
    let solution = Word::new(solution).expect("example words are valid");

    print_guess(&guess, &Feedback::score(&guess, &solution));
    println!("{explanation}\n");
}

/// Print a guess as a row of colored letter cells
pub fn print_guess(guess: &Word, feedback: &Feedback) {
    let mut line = String::new();

    for (&ch, &mark) in guess.chars().iter().zip(feedback.letters()) {
        let cell = format!(" {} ", ch.to_ascii_uppercase() as char);
        let cell = match mark {
            LetterFeedback::Correct => cell.on_truecolor(66, 118, 70),
            LetterFeedback::Present => cell.on_truecolor(139, 128, 0),
            LetterFeedback::Absent => cell.on_bright_black(),
        };
        line.push_str(&cell.to_string());
    }

    println!("{line}");
}

/// Alphabet letters not yet tried in any of `guesses`, space separated
#[must_use]
pub fn unused_letters(guesses: &[Word]) -> String {
    let mut used = [false; 26];
    for guess in guesses {
        for &ch in guess.chars() {
            used[usize::from(ch - b'a')] = true;
        }
    }

    (b'a'..=b'z')
        .filter(|&ch| !used[usize::from(ch - b'a')])
        .map(|ch| (ch as char).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the dim unused-letters hint
pub fn print_unused_letters(guesses: &[Word]) {
    println!(
        "{}",
        format!("unused letters: {}", unused_letters(guesses)).bright_black()
    );
}

/// Print one labeled statistics block: win line plus guess distribution
pub fn print_stats_block(label: &str, stats: &Stats) {
    println!("{}\n", label.underline());
    println!(
        "{} / {} rounds won ({:.0}%)\n",
        stats.won,
        stats.played,
        stats.win_ratio() * 100.0
    );

    let max_count = stats.distribution.iter().copied().max().unwrap_or(0);
    for (index, &count) in stats.distribution.iter().enumerate() {
        let bar = distribution_bar(count, max_count, BAR_WIDTH);
        println!(
            "{}: {} {count}",
            (index + 1).to_string().bold(),
            bar.green()
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn unused_letters_full_alphabet_when_no_guesses() {
        let hint = unused_letters(&[]);
        assert_eq!(hint, "a b c d e f g h i j k l m n o p q r s t u v w x y z");
    }

    #[test]
    fn unused_letters_removes_guessed_letters() {
        let hint = unused_letters(&[word("crane")]);
        assert!(!hint.contains('c'));
        assert!(!hint.contains('r'));
        assert!(!hint.contains('a'));
        assert!(!hint.contains('n'));
        assert!(!hint.contains('e'));
        assert!(hint.contains('z'));
    }

    #[test]
    fn unused_letters_accumulates_across_guesses() {
        let hint = unused_letters(&[word("crane"), word("spilt")]);
        for tried in ['c', 'r', 'a', 'n', 'e', 's', 'p', 'i', 'l', 't'] {
            assert!(!hint.contains(tried), "letter '{tried}' should be used");
        }
        assert!(hint.contains('q'));
    }

    #[test]
    fn unused_letters_empty_when_alphabet_exhausted() {
        let guesses: Vec<Word> = [
            "abcde", "fghij", "klmno", "pqrst", "uvwxy", "zzzzz",
        ]
        .iter()
        .map(|&text| word(text))
        .collect();

        assert_eq!(unused_letters(&guesses), "");
    }
}
