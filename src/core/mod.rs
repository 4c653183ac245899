//! Core game engine
//!
//! The guess evaluator, the attempt grid, the keyboard feedback
//! aggregator, and the session state machine. Everything here is pure,
//! synchronous, and presentation-free; the TUI and CLI front ends consume
//! this module through `GameSession`.

mod board;
mod feedback;
mod keyboard;
mod session;
mod word;

pub use board::{Board, Cell};
pub use feedback::{LetterStatus, evaluate};
pub use keyboard::KeyFeedback;
pub use session::{GameSession, Phase, SessionEvent, SubmitError};
pub use word::{Word, WordError};
