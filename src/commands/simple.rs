//! Plain interactive CLI mode
//!
//! Line-based game loop without the TUI: type a whole word per turn, get
//! colored feedback. All input still flows through the `GameSession`
//! gatekeeper, so the rules are identical to the TUI mode.

use crate::core::{GameSession, Phase, SubmitError, Word};
use crate::output::formatters::{colored_row, keyboard_summary};
use crate::output::{print_loss, print_win};
use crate::wordlists::loader::select_secret;
use colored::Colorize;
use std::io::{self, Write};

/// Run the plain CLI game loop
///
/// Plays games until the player quits; each replay draws a fresh secret
/// from the pool (unless a fixed secret was supplied).
///
/// # Errors
///
/// Returns an error if reading user input fails or if the pool cannot
/// supply a secret word.
pub fn run_simple(
    pool: &[Word],
    max_attempts: usize,
    secret_override: Option<&Word>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  TERMLE - Guess the Word                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret word. After each guess you'll see:");
    println!("  {} letter in the right spot", " A ".black().on_green());
    println!("  {} letter in the word, wrong spot", " B ".black().on_yellow());
    println!("  {} letter not in the word\n", " C ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' to restart with a fresh word\n");

    let mut rng = rand::rng();

    loop {
        let secret = match secret_override {
            Some(word) => word.clone(),
            None => select_secret(pool, &mut rng).map_err(|e| e.to_string())?,
        };
        let mut session = GameSession::new(secret, max_attempts);

        println!(
            "New game: {} letters, {} attempts\n",
            session.word_len(),
            session.max_attempts()
        );

        match play_one_game(&mut session)? {
            GameExit::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            GameExit::NewGame => continue,
            GameExit::Finished => {
                let answer = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
                match answer.to_lowercase().as_str() {
                    "yes" | "y" => {}
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}

enum GameExit {
    Quit,
    NewGame,
    Finished,
}

fn play_one_game(session: &mut GameSession) -> Result<GameExit, String> {
    while session.phase() == Phase::InProgress {
        let remaining = session.max_attempts() - session.attempt();
        let prompt = format!(
            "Guess {}/{} ({} left)",
            session.attempt() + 1,
            session.max_attempts(),
            remaining
        );

        let Some(input) = get_user_input(&prompt)? else {
            return Ok(GameExit::Quit);
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(GameExit::Quit),
            "new" | "n" => {
                println!("\n🔄 New game started!\n");
                return Ok(GameExit::NewGame);
            }
            _ => {}
        }

        // Route the typed word through the controller; letters beyond the
        // row end and non-letter characters are dropped, same as the grid
        for ch in input.chars() {
            session.type_letter(ch);
        }

        let submitted = session.attempt();
        match session.submit() {
            Ok(_) => {
                println!("  {}", evaluated_row(session, submitted));
                println!("  {}\n", keyboard_summary(session));
            }
            Err(SubmitError::IncompleteGuess { filled, needed }) => {
                println!(
                    "{}\n",
                    format!("Need {needed} letters, got {filled}. Try again.").yellow()
                );
                // Drop the partial row
                while session.backspace() {}
            }
            Err(SubmitError::NotAccepting) => break,
        }
    }

    match session.phase() {
        Phase::Won => print_win(session, session.attempt() + 1),
        Phase::Lost => print_loss(session),
        Phase::InProgress => {}
    }

    Ok(GameExit::Finished)
}

/// Render a submitted row with its committed statuses
fn evaluated_row(session: &GameSession, attempt: usize) -> String {
    let mut letters = Vec::new();
    let mut statuses = Vec::new();

    for position in 0..session.word_len() {
        let cell = session.cell(attempt, position);
        if let (Some(letter), Some(status)) = (cell.letter, cell.status) {
            letters.push(letter);
            statuses.push(status);
        }
    }

    colored_row(&letters, &statuses)
}

/// Get user input with a prompt; `None` means stdin was closed
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
