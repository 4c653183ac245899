//! Formatting utilities for terminal output

use crate::core::{GameSession, LetterStatus};
use colored::Colorize;

/// Format one evaluated row as emoji squares
#[must_use]
pub fn row_to_emoji(statuses: &[LetterStatus]) -> String {
    statuses
        .iter()
        .map(|status| match status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬜',
        })
        .collect()
}

/// Build the share-style emoji grid for a finished session
///
/// One emoji row per submitted attempt, newest last. Unsubmitted rows are
/// omitted.
#[must_use]
pub fn share_grid(session: &GameSession) -> String {
    let mut rows = Vec::new();

    for attempt in 0..session.max_attempts() {
        let statuses: Option<Vec<LetterStatus>> = (0..session.word_len())
            .map(|position| session.cell(attempt, position).status)
            .collect();

        match statuses {
            Some(row) => rows.push(row_to_emoji(&row)),
            None => break, // First unevaluated row ends the grid
        }
    }

    rows.join("\n")
}

/// Format one evaluated letter as a colored block for plain-terminal output
#[must_use]
pub fn colored_letter(letter: u8, status: LetterStatus) -> String {
    let text = format!(" {} ", letter as char);
    match status {
        LetterStatus::Correct => text.black().on_green().bold().to_string(),
        LetterStatus::Present => text.black().on_yellow().bold().to_string(),
        LetterStatus::Absent => text.white().on_bright_black().to_string(),
    }
}

/// Format a whole evaluated row as colored blocks
#[must_use]
pub fn colored_row(letters: &[u8], statuses: &[LetterStatus]) -> String {
    letters
        .iter()
        .zip(statuses)
        .map(|(&letter, &status)| colored_letter(letter, status))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line keyboard summary: known letters grouped by status
#[must_use]
pub fn keyboard_summary(session: &GameSession) -> String {
    let mut correct = String::new();
    let mut present = String::new();
    let mut absent = String::new();

    for letter in b'A'..=b'Z' {
        match session.key_status(letter) {
            Some(LetterStatus::Correct) => correct.push(letter as char),
            Some(LetterStatus::Present) => present.push(letter as char),
            Some(LetterStatus::Absent) => absent.push(letter as char),
            None => {}
        }
    }

    format!(
        "{} {}   {} {}   {} {}",
        "placed:".green(),
        if correct.is_empty() { "-".to_string() } else { correct },
        "misplaced:".yellow(),
        if present.is_empty() { "-".to_string() } else { present },
        "ruled out:".bright_black(),
        if absent.is_empty() { "-".to_string() } else { absent },
    )
}
