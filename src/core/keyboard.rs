//! Aggregated per-letter feedback for keyboard coloring
//!
//! Tracks the strongest thing the player has learned about each letter
//! across all submitted attempts. A letter with no entry is unknown.

use super::{LetterStatus, Word};
use rustc_hash::FxHashMap;

/// Letter → strongest known status, aggregated across attempts
///
/// The stored status for a letter only ever increases in strength
/// (`Correct` > `Present` > `Absent`): once a letter is known to be in the
/// word, a later attempt placing it badly must not gray it out again.
#[derive(Debug, Clone, Default)]
pub struct KeyFeedback {
    statuses: FxHashMap<u8, LetterStatus>,
}

impl KeyFeedback {
    /// Create an empty map: every letter unknown
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the aggregated status of a letter
    ///
    /// `None` means the letter has not appeared in any submitted attempt.
    #[inline]
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<LetterStatus> {
        self.statuses.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Merge one submitted attempt into the map
    ///
    /// For each letter of the guess, its strongest status from this attempt
    /// is computed first (a duplicate letter can be e.g. `Correct` at one
    /// position and `Absent` at another), then merged: the stored entry is
    /// only overwritten if the new status outranks it.
    ///
    /// # Panics
    /// Panics if `statuses.len() != guess.len()`.
    pub fn record(&mut self, guess: &Word, statuses: &[LetterStatus]) {
        assert_eq!(statuses.len(), guess.len(), "status row width mismatch");

        // Strongest status per letter within this attempt
        let mut strongest: FxHashMap<u8, LetterStatus> = FxHashMap::default();
        for (i, &status) in statuses.iter().enumerate() {
            let entry = strongest.entry(guess.letter_at(i)).or_insert(status);
            if status > *entry {
                *entry = status;
            }
        }

        for (letter, status) in strongest {
            let entry = self.statuses.entry(letter).or_insert(status);
            if status > *entry {
                *entry = status;
            }
        }
    }
}
