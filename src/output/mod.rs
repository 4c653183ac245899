//! Terminal output formatting
//!
//! Display utilities shared by the CLI front ends.

pub mod display;
pub mod formatters;

pub use display::{print_loss, print_win};
