//! Termle - CLI
//!
//! Terminal word-guessing game with TUI and plain CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use termle::{
    commands::run_simple,
    core::Word,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "termle",
    about = "Terminal word-guessing game: six attempts, colored feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, built-in list) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Number of attempts per game
    #[arg(short = 'n', long, global = true, default_value = "6")]
    attempts: usize,

    /// Play with a fixed secret word instead of drawing from the pool
    #[arg(short, long, global = true)]
    secret: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (line-based, no TUI)
    Simple,
}

/// Load the secret-word pool based on the -w flag
fn load_pool(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "all" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("loading wordlist from {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    anyhow::ensure!(cli.attempts > 0, "--attempts must be at least 1");

    let pool = load_pool(&cli.wordlist)?;

    let secret = cli
        .secret
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("invalid --secret word")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(pool, cli.attempts, secret),
        Commands::Simple => {
            run_simple(&pool, cli.attempts, secret.as_ref()).map_err(|e| anyhow::anyhow!(e))
        }
    }
}

fn run_play_command(pool: Vec<Word>, attempts: usize, secret: Option<Word>) -> Result<()> {
    use termle::interactive::{App, run_tui};

    let app = App::new(pool, attempts, secret).context("starting game")?;
    run_tui(app)
}
