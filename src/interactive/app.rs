//! TUI application state and logic

use crate::core::{GameSession, KeyFeedback, LetterStatus, Phase, SubmitError, Word};
use crate::wordlists::loader::{WordSourceError, select_secret};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Delay between consecutive cell flips when a row is revealed
const REVEAL_INTERVAL: Duration = Duration::from_millis(150);

/// How long the event loop waits for input before advancing animations
const TICK: Duration = Duration::from_millis(33);

/// What kind of input the app currently accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Letters, backspace, enter
    Typing,
    /// A row reveal is in flight; input is ignored until it finishes
    Revealing,
    /// The game ended; only new-game / quit are accepted
    GameOver,
}

/// A row reveal in progress: cells up to `shown` display their status
#[derive(Debug, Clone)]
struct RowReveal {
    attempt: usize,
    shown: usize,
    total: usize,
    next_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index i counts wins that took i+1 attempts
    pub guess_distribution: Vec<usize>,
}

/// Application state
pub struct App {
    pub session: GameSession,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pool: Vec<Word>,
    secret_override: Option<Word>,
    max_attempts: usize,
    reveal: Option<RowReveal>,
    /// Keyboard feedback as currently displayed: lags the session's by one
    /// attempt while a reveal is in flight, so keys flip with the last cell
    shown_keys: KeyFeedback,
    /// Guess and statuses of the row being revealed, merged into
    /// `shown_keys` when the reveal completes
    pending_keys: Option<(Word, Vec<LetterStatus>)>,
}

impl App {
    /// Create the app and start the first game
    ///
    /// # Errors
    /// Returns `WordSourceError` if the pool cannot supply a secret.
    pub fn new(
        pool: Vec<Word>,
        max_attempts: usize,
        secret_override: Option<Word>,
    ) -> Result<Self, WordSourceError> {
        let secret = match &secret_override {
            Some(word) => word.clone(),
            None => select_secret(&pool, &mut rand::rng())?,
        };

        let session = GameSession::new(secret, max_attempts);
        let mut app = Self {
            session,
            input_mode: InputMode::Typing,
            messages: Vec::new(),
            stats: Statistics {
                guess_distribution: vec![0; max_attempts],
                ..Statistics::default()
            },
            should_quit: false,
            pool,
            secret_override,
            max_attempts,
            reveal: None,
            shown_keys: KeyFeedback::new(),
            pending_keys: None,
        };

        app.add_message("Type a word and press Enter.", MessageStyle::Info);
        app.add_message("Esc quits.", MessageStyle::Info);
        Ok(app)
    }

    /// Start a fresh session with a new secret
    ///
    /// # Errors
    /// Returns `WordSourceError` if the pool cannot supply a secret.
    pub fn new_game(&mut self) -> Result<(), WordSourceError> {
        let secret = match &self.secret_override {
            Some(word) => word.clone(),
            None => select_secret(&self.pool, &mut rand::rng())?,
        };

        self.session = GameSession::new(secret, self.max_attempts);
        self.input_mode = InputMode::Typing;
        self.reveal = None;
        self.shown_keys = KeyFeedback::new();
        self.pending_keys = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    /// Handle one key press
    pub fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Typing => self.on_typing_key(code),
            InputMode::Revealing => {
                // Everything else waits for the reveal to finish
            }
            InputMode::GameOver => match code {
                KeyCode::Char('n' | 'N') => {
                    if let Err(e) = self.new_game() {
                        self.add_message(&e.to_string(), MessageStyle::Error);
                    }
                }
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                _ => {}
            },
        }
    }

    fn on_typing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                // Out-of-bounds and non-letter input is a silent no-op
                self.session.type_letter(c);
            }
            KeyCode::Backspace => {
                self.session.backspace();
            }
            KeyCode::Enter => self.submit_row(),
            _ => {}
        }
    }

    fn submit_row(&mut self) {
        let attempt = self.session.attempt();

        match self.session.submit() {
            Ok(_) => {
                // The session has committed; stage the presentation
                let statuses: Vec<LetterStatus> = (0..self.session.word_len())
                    .filter_map(|position| self.session.cell(attempt, position).status)
                    .collect();
                let letters: Vec<u8> = (0..self.session.word_len())
                    .filter_map(|position| self.session.cell(attempt, position).letter)
                    .collect();
                let guess = Word::new(String::from_utf8_lossy(&letters).as_ref())
                    .expect("submitted row holds valid letters");

                self.pending_keys = Some((guess, statuses));
                self.reveal = Some(RowReveal {
                    attempt,
                    shown: 0,
                    total: self.session.word_len(),
                    next_at: Instant::now() + REVEAL_INTERVAL,
                });
                self.input_mode = InputMode::Revealing;
            }
            Err(SubmitError::IncompleteGuess { filled, needed }) => {
                self.add_message(
                    &format!("Fill in all boxes before submitting ({filled}/{needed})"),
                    MessageStyle::Error,
                );
            }
            Err(SubmitError::NotAccepting) => {}
        }
    }

    /// Advance animations; called on every loop tick
    pub fn on_tick(&mut self) {
        let Some(reveal) = &mut self.reveal else {
            return;
        };

        let now = Instant::now();
        while reveal.shown < reveal.total && now >= reveal.next_at {
            reveal.shown += 1;
            reveal.next_at += REVEAL_INTERVAL;
        }

        if reveal.shown == reveal.total {
            self.finish_reveal();
        }
    }

    /// The last cell has flipped: update keys, stats, and mode
    fn finish_reveal(&mut self) {
        self.reveal = None;

        if let Some((guess, statuses)) = self.pending_keys.take() {
            self.shown_keys.record(&guess, &statuses);
        }

        match self.session.phase() {
            Phase::Won => {
                let used = self.session.attempt() + 1;
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(used - 1) {
                    *slot += 1;
                }

                let celebration = match used {
                    1 => "🎯 First try! Extraordinary!",
                    2 => "🔥 Two guesses! Magnificent!",
                    3 => "✨ Three guesses! Splendid!",
                    4 => "👏 Four guesses! Great job!",
                    5 => "🎉 Five guesses! Nice work!",
                    _ => "😅 Phew! Got it!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::GameOver;
            }
            Phase::Lost => {
                self.stats.total_games += 1;
                self.add_message(
                    &format!("Out of attempts! The word was {}.", self.session.secret()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::GameOver;
            }
            Phase::InProgress => {
                self.input_mode = InputMode::Typing;
            }
        }
    }

    /// The status a cell should display right now
    ///
    /// Committed statuses are hidden for cells whose reveal has not fired
    /// yet; everything else shows the session's state directly.
    #[must_use]
    pub fn visible_status(&self, attempt: usize, position: usize) -> Option<LetterStatus> {
        if let Some(reveal) = &self.reveal
            && attempt == reveal.attempt
            && position >= reveal.shown
        {
            return None;
        }

        self.session.cell(attempt, position).status
    }

    /// The keyboard status a key should display right now
    #[must_use]
    pub fn visible_key_status(&self, letter: u8) -> Option<LetterStatus> {
        self.shown_keys.status(letter)
    }

    /// Whether the given cell is the active typing target
    #[must_use]
    pub fn is_active_cell(&self, attempt: usize, position: usize) -> bool {
        self.input_mode == InputMode::Typing
            && attempt == self.session.attempt()
            && position == self.session.position()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.on_key(key.code, key.modifiers);
                }
            }
        }

        app.on_tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn app_with_secret(secret: &str) -> App {
        App::new(
            words_from_slice(&[secret]),
            6,
            Some(Word::new(secret).unwrap()),
        )
        .unwrap()
    }

    fn press_word(app: &mut App, word: &str) {
        for ch in word.chars() {
            app.on_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
        app.on_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    fn drain_reveal(app: &mut App) {
        // Force the reveal clock forward instead of sleeping
        while let Some(reveal) = &mut app.reveal {
            reveal.next_at = Instant::now() - REVEAL_INTERVAL;
            app.on_tick();
        }
    }

    #[test]
    fn typing_reaches_the_session() {
        let mut app = app_with_secret("plant");

        app.on_key(KeyCode::Char('p'), KeyModifiers::NONE);
        app.on_key(KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(app.session.position(), 2);

        app.on_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.session.position(), 1);
    }

    #[test]
    fn incomplete_submit_shows_message_not_reveal() {
        let mut app = app_with_secret("plant");
        app.messages.clear();

        app.on_key(KeyCode::Char('p'), KeyModifiers::NONE);
        app.on_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.input_mode, InputMode::Typing);
        assert!(app.messages.iter().any(|m| m.text.contains("1/5")));
    }

    #[test]
    fn submit_enters_revealing_and_blocks_input() {
        let mut app = app_with_secret("plant");
        press_word(&mut app, "alarm");

        assert_eq!(app.input_mode, InputMode::Revealing);

        // Typing during the reveal must not leak into the next row
        app.on_key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(app.session.position(), 0);
    }

    #[test]
    fn statuses_stay_hidden_until_their_cell_flips() {
        let mut app = app_with_secret("plant");
        press_word(&mut app, "alarm");

        // Committed in the session, not yet visible
        assert!(app.session.cell(0, 0).status.is_some());
        assert_eq!(app.visible_status(0, 0), None);

        drain_reveal(&mut app);
        assert!(app.visible_status(0, 0).is_some());
    }

    #[test]
    fn keyboard_updates_land_after_the_reveal() {
        let mut app = app_with_secret("plant");
        press_word(&mut app, "alarm");

        assert_eq!(app.visible_key_status(b'L'), None);
        drain_reveal(&mut app);
        assert_eq!(app.visible_key_status(b'L'), Some(LetterStatus::Correct));
    }

    #[test]
    fn winning_game_enters_game_over_and_counts_stats() {
        let mut app = app_with_secret("plant");
        press_word(&mut app, "plant");
        drain_reveal(&mut app);

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[0], 1);
    }

    #[test]
    fn new_game_resets_board_and_keys() {
        let mut app = app_with_secret("plant");
        press_word(&mut app, "plant");
        drain_reveal(&mut app);

        app.on_key(KeyCode::Char('n'), KeyModifiers::NONE);

        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.session.attempt(), 0);
        assert_eq!(app.session.phase(), Phase::InProgress);
        assert_eq!(app.visible_key_status(b'P'), None);
        // Stats survive the reset
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn losing_game_reveals_secret_in_messages() {
        let mut app = app_with_secret("ox");

        for _ in 0..6 {
            press_word(&mut app, "no");
            drain_reveal(&mut app);
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("OX")));
    }
}
