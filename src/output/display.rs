//! Outcome banners for the plain CLI mode

use super::formatters::share_grid;
use crate::core::GameSession;
use colored::Colorize;

/// Print the victory banner with the share grid
pub fn print_win(session: &GameSession, attempts_used: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());

    let verdict = match attempts_used {
        1 => "🎯 First try! Unbelievable!",
        2 => "🔥 Two guesses! Magnificent!",
        3 => "✨ Three guesses! Splendid!",
        4 => "👏 Four guesses! Great job!",
        5 => "🎉 Five guesses! Nice work!",
        _ => "😅 Phew! Got it!",
    };

    println!("{}", verdict.bright_green().bold());
    println!(
        "Solved in {} of {} attempts",
        attempts_used.to_string().bright_cyan().bold(),
        session.max_attempts()
    );

    println!("\n{}", share_grid(session));
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the defeat banner, revealing the secret
pub fn print_loss(session: &GameSession) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "❌ Out of attempts!".red().bold());
    println!(
        "The word was: {}",
        session.secret().text().bright_yellow().bold()
    );

    println!("\n{}", share_grid(session));
    println!("{}", "═".repeat(60).bright_cyan());
}
