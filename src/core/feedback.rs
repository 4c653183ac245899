//! Guess evaluation
//!
//! Classifies each letter of a guess against the secret word:
//! - `Correct` — right letter, right position
//! - `Present` — letter is in the word, wrong position
//! - `Absent` — letter is not in the word (or all its occurrences are
//!   already accounted for)
//!
//! Duplicate letters are handled with multiset accounting: a letter can
//! only be marked `Correct`/`Present` as many times as it occurs in the
//! secret.

use super::Word;

/// Feedback classification for one guessed letter
///
/// The ordering is by information strength: `Correct` outranks `Present`,
/// which outranks `Absent`. The keyboard aggregator relies on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

/// Evaluate a guess against the secret word
///
/// Returns one status per position. Pure: no state is read or written
/// outside the arguments, and equal inputs always produce equal output.
///
/// # Algorithm
/// 1. Build a letter → remaining-count map from the secret.
/// 2. First pass: exact position matches become `Correct` and consume one
///    occurrence from the pool.
/// 3. Second pass (remaining positions, left to right): `Present` if the
///    letter still has occurrences in the pool, else `Absent`.
///
/// A single pass would double-count repeated letters: a letter whose every
/// occurrence is matched exactly elsewhere must come out `Absent`, not
/// `Present`. Which of two duplicate guess letters wins the last pool slot
/// is fixed by the pass-1-then-pass-2 left-to-right order.
///
/// # Panics
/// Panics if `guess.len() != secret.len()`. Callers own the board geometry
/// and must only submit full rows.
///
/// # Examples
/// ```
/// use termle::core::{LetterStatus, Word, evaluate};
///
/// let secret = Word::new("plant").unwrap();
/// let guess = Word::new("alarm").unwrap();
///
/// assert_eq!(
///     evaluate(&secret, &guess),
///     vec![
///         LetterStatus::Present, // A is in PLANT, wrong spot
///         LetterStatus::Correct, // L matches
///         LetterStatus::Absent,  // second A: the only A is spent
///         LetterStatus::Absent,  // R not in PLANT
///         LetterStatus::Absent,  // M not in PLANT
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> Vec<LetterStatus> {
    assert_eq!(
        guess.len(),
        secret.len(),
        "guess length {} does not match secret length {}",
        guess.len(),
        secret.len()
    );

    let len = secret.len();
    let mut result = vec![LetterStatus::Absent; len];
    let mut remaining = secret.letter_counts();

    // First pass: exact matches consume from the pool
    for i in 0..len {
        if guess.letter_at(i) == secret.letter_at(i) {
            result[i] = LetterStatus::Correct;

            if let Some(count) = remaining.get_mut(&guess.letter_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters, while the pool lasts
    for i in 0..len {
        if result[i] == LetterStatus::Correct {
            continue;
        }

        if let Some(count) = remaining.get_mut(&guess.letter_at(i))
            && *count > 0
        {
            result[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn eval(secret: &str, guess: &str) -> Vec<LetterStatus> {
        evaluate(&word(secret), &word(guess))
    }

    use super::LetterStatus::{Absent, Correct, Present};

    #[test]
    fn all_absent() {
        assert_eq!(
            eval("abcde", "fghij"),
            vec![Absent, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn all_correct() {
        assert_eq!(
            eval("react", "react"),
            vec![Correct, Correct, Correct, Correct, Correct]
        );
    }

    #[test]
    fn plant_vs_alarm() {
        // Second A in ALARM is Absent: PLANT's single A is consumed by
        // the first A's Present in the left-to-right scan.
        assert_eq!(
            eval("plant", "alarm"),
            vec![Present, Correct, Absent, Absent, Absent]
        );
    }

    #[test]
    fn duplicate_guess_letter_consumed_by_correct_elsewhere() {
        // SPEED vs ERASE: S misplaced, both E's misplaced (ERASE has two),
        // P and D absent.
        assert_eq!(
            eval("erase", "speed"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn correct_match_starves_earlier_present() {
        // FLOOR vs ROBOT: first O yellow, second O green, T absent.
        assert_eq!(
            eval("floor", "robot"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn guess_has_more_duplicates_than_secret() {
        // Secret has one M; guess MUMMY gets exactly one Correct M, the
        // rest Absent.
        assert_eq!(
            eval("medal", "mummy"),
            vec![Correct, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn triple_letter_accounting() {
        // Secret LEVEL has two L's and two E's; guess LLLLL keeps only the
        // two positional L's as Correct, everything else Absent.
        assert_eq!(
            eval("level", "lllll"),
            vec![Correct, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn short_words() {
        assert_eq!(eval("ox", "xo"), vec![Present, Present]);
        assert_eq!(eval("ox", "ox"), vec![Correct, Correct]);
    }

    #[test]
    fn correct_count_matches_positional_equality() {
        // Property from the design contract: #Correct == #{i : guess[i] == secret[i]}
        let cases = [
            ("plant", "alarm"),
            ("erase", "speed"),
            ("floor", "robot"),
            ("level", "lllll"),
            ("crane", "slate"),
        ];

        for (secret, guess) in cases {
            let s = word(secret);
            let g = word(guess);
            let statuses = evaluate(&s, &g);

            let exact = (0..s.len())
                .filter(|&i| s.letter_at(i) == g.letter_at(i))
                .count();
            let corrects = statuses.iter().filter(|&&st| st == Correct).count();

            assert_eq!(corrects, exact, "{secret} vs {guess}");
        }
    }

    #[test]
    fn letter_count_conservation() {
        // For every letter, Correct + Present assigned to guess positions
        // holding it never exceeds its count in the secret.
        let cases = [
            ("plant", "alarm"),
            ("erase", "speed"),
            ("medal", "mummy"),
            ("level", "lllll"),
            ("aabba", "ababa"),
        ];

        for (secret, guess) in cases {
            let s = word(secret);
            let g = word(guess);
            let statuses = evaluate(&s, &g);
            let secret_counts = s.letter_counts();

            for (&letter, &limit) in &secret_counts {
                let scored = (0..g.len())
                    .filter(|&i| g.letter_at(i) == letter && statuses[i] != Absent)
                    .count();
                assert!(
                    scored <= usize::from(limit),
                    "{secret} vs {guess}: letter {} scored {scored} > {limit}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let secret = word("spend");
        let guess = word("super");

        let first = evaluate(&secret, &guess);
        for _ in 0..10 {
            assert_eq!(evaluate(&secret, &guess), first);
        }
    }

    #[test]
    #[should_panic(expected = "does not match secret length")]
    fn length_mismatch_panics() {
        evaluate(&word("plant"), &word("go"));
    }

    #[test]
    fn status_ordering_by_strength() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }
}
