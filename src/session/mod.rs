//! Session tracking
//!
//! A session is the ordered list of rounds finished in the current program
//! run. It also owns solution selection: a solution is drawn uniformly from
//! the lexicon's eligible words, excluding any already played this session.

mod history;
mod stats;

pub use history::{HistoryStore, RoundRecord};
pub use stats::Stats;

use crate::core::Word;
use crate::lexicon::Lexicon;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Rounds finished in the current program run
#[derive(Debug, Clone, Default)]
pub struct Session {
    records: Vec<RoundRecord>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finished rounds, in play order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    /// Number of rounds finished this session
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.records.len()
    }

    /// Record a finished round
    pub fn push(&mut self, record: RoundRecord) {
        self.records.push(record);
    }

    /// Draw a solution for the next round
    ///
    /// Uniformly random over the lexicon's solution-eligible words that have
    /// not been a solution this session. Returns `None` once the pool is
    /// exhausted.
    pub fn pick_solution<R: Rng + ?Sized>(&self, lexicon: &Lexicon, rng: &mut R) -> Option<Word> {
        let used: FxHashSet<&str> = self
            .records
            .iter()
            .map(|record| record.solution.as_str())
            .collect();

        let candidates: Vec<&Word> = lexicon
            .solutions()
            .iter()
            .filter(|word| !used.contains(word.text()))
            .collect();

        candidates.choose(rng).map(|&word| word.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn lexicon(solutions: &[&str]) -> Lexicon {
        let words: Vec<Word> = solutions.iter().map(|&text| word(text)).collect();
        Lexicon::new(words.clone(), words)
    }

    fn won_record(solution: &str) -> RoundRecord {
        RoundRecord {
            solution: solution.to_string(),
            guesses: vec![solution.to_string()],
            won: true,
        }
    }

    #[test]
    fn pick_solution_draws_from_pool() {
        let lexicon = lexicon(&["crane", "slate", "think"]);
        let session = Session::new();
        let mut rng = StdRng::seed_from_u64(7);

        let solution = session.pick_solution(&lexicon, &mut rng).unwrap();
        assert!(lexicon.contains(&solution));
    }

    #[test]
    fn pick_solution_never_repeats_within_session() {
        let lexicon = lexicon(&["crane", "slate", "think"]);
        let mut session = Session::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = FxHashSet::default();

        for _ in 0..3 {
            let solution = session.pick_solution(&lexicon, &mut rng).unwrap();
            assert!(
                seen.insert(solution.text().to_string()),
                "solution '{solution}' repeated"
            );
            session.push(won_record(solution.text()));
        }
    }

    #[test]
    fn pick_solution_exhausted_pool_is_none() {
        let lexicon = lexicon(&["crane"]);
        let mut session = Session::new();
        let mut rng = StdRng::seed_from_u64(1);

        session.push(won_record("crane"));
        assert!(session.pick_solution(&lexicon, &mut rng).is_none());
    }

    #[test]
    fn rounds_played_tracks_pushes() {
        let mut session = Session::new();
        assert_eq!(session.rounds_played(), 0);

        session.push(won_record("crane"));
        session.push(won_record("slate"));
        assert_eq!(session.rounds_played(), 2);
        assert_eq!(session.records()[0].solution, "crane");
    }
}
