//! Game session state machine
//!
//! `GameSession` owns everything one game needs: the secret word, the
//! attempt grid, the aggregated keyboard feedback, and the turn state. It
//! is the single gatekeeper for input: letters, backspace, and submission
//! all flow through it, and nothing mutates the board behind its back.
//!
//! There are no globals; independent sessions can run side by side, which
//! is also what makes the state machine directly testable.

use super::{Board, Cell, KeyFeedback, LetterStatus, Word, evaluate};
use std::fmt;

/// Where the session is in its lifecycle
///
/// Termination is permanent: there are no transitions out of `Won` or
/// `Lost`. Replay means constructing a fresh `GameSession`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won,
    Lost,
}

/// State changes produced by a successful submission, in order
///
/// Presentation layers replay these at their own pace (e.g. staggered cell
/// reveals); the session state itself has already committed by the time
/// they are returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    CellRevealed {
        attempt: usize,
        position: usize,
        status: LetterStatus,
    },
    TurnAdvanced {
        attempt: usize,
    },
    Won,
    Lost {
        secret: Word,
    },
}

/// Why a submission was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The current row is not full yet. Recoverable: prompt the player.
    IncompleteGuess { filled: usize, needed: usize },
    /// The game has already ended. Ignorable, like any other late input.
    NotAccepting,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess { filled, needed } => {
                write!(f, "Fill in all boxes before submitting ({filled}/{needed})")
            }
            Self::NotAccepting => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// One complete game, from an empty board to won or lost
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    board: Board,
    keys: KeyFeedback,
    attempt: usize,
    position: usize,
    phase: Phase,
}

impl GameSession {
    /// Start a session for the given secret with `max_attempts` rows
    ///
    /// # Panics
    /// Panics if `max_attempts` is zero.
    ///
    /// # Examples
    /// ```
    /// use termle::core::{GameSession, Phase, Word};
    ///
    /// let secret = Word::new("react").unwrap();
    /// let session = GameSession::new(secret, 6);
    ///
    /// assert_eq!(session.phase(), Phase::InProgress);
    /// assert_eq!(session.attempt(), 0);
    /// assert_eq!(session.position(), 0);
    /// ```
    #[must_use]
    pub fn new(secret: Word, max_attempts: usize) -> Self {
        let board = Board::new(max_attempts, secret.len());

        Self {
            secret,
            board,
            keys: KeyFeedback::new(),
            attempt: 0,
            position: 0,
            phase: Phase::InProgress,
        }
    }

    /// Type a letter into the current row
    ///
    /// Returns whether the letter was accepted. Rejected input (row full,
    /// game over, non-letter character) is a silent no-op by design, not
    /// an error.
    pub fn type_letter(&mut self, ch: char) -> bool {
        if self.phase != Phase::InProgress
            || self.position >= self.board.cols()
            || !ch.is_ascii_alphabetic()
        {
            return false;
        }

        let letter = (ch as u8).to_ascii_uppercase();
        self.board.set_letter(self.attempt, self.position, letter);
        self.position += 1;
        true
    }

    /// Delete the most recently typed letter of the current row
    ///
    /// Returns whether anything was deleted. A no-op at the start of a row
    /// and after the game has ended.
    pub fn backspace(&mut self) -> bool {
        if self.phase != Phase::InProgress || self.position == 0 {
            return false;
        }

        self.position -= 1;
        self.board.clear_letter(self.attempt, self.position);
        true
    }

    /// Submit the current row as a guess
    ///
    /// On success the evaluation is committed immediately: cell statuses
    /// and keyboard feedback are written, and the turn state advances (or
    /// terminates). The returned events describe the committed changes in
    /// order, for presentation layers to animate.
    ///
    /// # Errors
    /// - [`SubmitError::IncompleteGuess`] if the row is not full; no state
    ///   changes.
    /// - [`SubmitError::NotAccepting`] if the game has already ended.
    pub fn submit(&mut self) -> Result<Vec<SessionEvent>, SubmitError> {
        if self.phase != Phase::InProgress {
            return Err(SubmitError::NotAccepting);
        }

        if self.position < self.board.cols() {
            return Err(SubmitError::IncompleteGuess {
                filled: self.position,
                needed: self.board.cols(),
            });
        }

        let text = String::from_utf8(self.board.row_letters(self.attempt))
            .expect("row letters are uppercase ASCII by construction");
        let guess = Word::new(text).expect("row letters are validated on entry");

        let statuses = evaluate(&self.secret, &guess);
        self.board.apply_statuses(self.attempt, &statuses);
        self.keys.record(&guess, &statuses);

        let mut events: Vec<SessionEvent> = statuses
            .iter()
            .enumerate()
            .map(|(position, &status)| SessionEvent::CellRevealed {
                attempt: self.attempt,
                position,
                status,
            })
            .collect();

        if guess == self.secret {
            self.phase = Phase::Won;
            events.push(SessionEvent::Won);
        } else if self.attempt + 1 == self.board.rows() {
            self.phase = Phase::Lost;
            events.push(SessionEvent::Lost {
                secret: self.secret.clone(),
            });
        } else {
            self.attempt += 1;
            self.position = 0;
            events.push(SessionEvent::TurnAdvanced {
                attempt: self.attempt,
            });
        }

        Ok(events)
    }

    /// Read a cell of the attempt grid
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    #[inline]
    #[must_use]
    pub fn cell(&self, attempt: usize, position: usize) -> Cell {
        self.board.cell(attempt, position)
    }

    /// Aggregated keyboard status for a letter (`None` = not yet guessed)
    #[inline]
    #[must_use]
    pub fn key_status(&self, letter: u8) -> Option<LetterStatus> {
        self.keys.status(letter)
    }

    /// Index of the row currently being edited
    #[inline]
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    /// Cursor position within the current row
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Current lifecycle phase
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the session has terminated
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.phase, Phase::InProgress)
    }

    /// Total number of attempt rows
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.board.rows()
    }

    /// Letters per row (the secret's length)
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.board.cols()
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}
