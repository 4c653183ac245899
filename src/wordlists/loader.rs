//! Word list loading and secret selection
//!
//! The word source contract: a non-empty pool of valid words, sampled
//! exactly once per session to pick the secret. A bad pool is fatal at
//! startup, never a mid-game surprise.

use crate::core::{Word, WordError};
use rand::prelude::IndexedRandom;
use std::fmt;
use std::io;
use std::path::Path;

/// Error type for unusable word pools
#[derive(Debug)]
pub enum WordSourceError {
    /// The pool has no words to choose from
    EmptyPool,
    /// A line in a wordlist file is not a valid word
    InvalidWord { line: usize, source: WordError },
    /// The wordlist file could not be read
    Io(io::Error),
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "Word list is empty"),
            Self::InvalidWord { line, source } => {
                write!(f, "Invalid word on line {line}: {source}")
            }
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
        }
    }
}

impl std::error::Error for WordSourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::EmptyPool => None,
        }
    }
}

impl From<io::Error> for WordSourceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Load a word pool from a file, one word per line
///
/// Blank lines are skipped. Any other malformed line is fatal: a secret
/// pool with garbage in it means a broken session later, so it is rejected
/// up front.
///
/// # Errors
/// Returns `WordSourceError` if the file cannot be read, contains an
/// invalid word, or yields no words at all.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordSourceError> {
    let content = std::fs::read_to_string(path)?;

    let mut words = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| WordSourceError::InvalidWord {
            line: i + 1,
            source,
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(WordSourceError::EmptyPool);
    }

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// The embedded list is validated by tests; invalid entries would be a
/// build-time data bug, so they panic rather than vanish silently.
///
/// # Panics
/// Panics if any entry is not a valid word.
///
/// # Examples
/// ```
/// use termle::wordlists::{WORDS, loader::words_from_slice};
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice
        .iter()
        .map(|&s| Word::new(s).unwrap_or_else(|e| panic!("embedded word {s:?} invalid: {e}")))
        .collect()
}

/// Pick the secret word for a session
///
/// Uniform choice over the pool. Called exactly once, before the board is
/// created; the chosen word's length fixes the board width.
///
/// # Errors
/// Returns `WordSourceError::EmptyPool` if there is nothing to choose from.
pub fn select_secret<R: rand::Rng + ?Sized>(
    pool: &[Word],
    rng: &mut R,
) -> Result<Word, WordSourceError> {
    pool.choose(rng)
        .cloned()
        .ok_or(WordSourceError::EmptyPool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts() {
        let words = words_from_slice(&["crane", "slate", "ox"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[2].text(), "OX");
    }

    #[test]
    #[should_panic(expected = "invalid")]
    fn words_from_slice_panics_on_garbage() {
        words_from_slice(&["crane", "not a word"]);
    }

    #[test]
    fn select_secret_from_pool() {
        let pool = words_from_slice(&["plant", "react", "crane"]);
        let mut rng = rand::rng();

        for _ in 0..20 {
            let secret = select_secret(&pool, &mut rng).unwrap();
            assert!(pool.contains(&secret));
        }
    }

    #[test]
    fn select_secret_empty_pool_is_fatal() {
        let pool: Vec<Word> = Vec::new();
        let mut rng = rand::rng();

        assert!(matches!(
            select_secret(&pool, &mut rng),
            Err(WordSourceError::EmptyPool)
        ));
    }

    #[test]
    fn select_secret_single_word() {
        let pool = words_from_slice(&["plant"]);
        let mut rng = rand::rng();

        let secret = select_secret(&pool, &mut rng).unwrap();
        assert_eq!(secret.text(), "PLANT");
    }

    #[test]
    fn load_from_file_missing_is_io_error() {
        let err = load_from_file("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, WordSourceError::Io(_)));
    }
}
