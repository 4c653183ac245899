//! TUI rendering with ratatui
//!
//! Board grid, on-screen keyboard, messages, and session statistics.

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board + keyboard
            Constraint::Percentage(40), // Messages + stats
        ])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("TERMLE - Guess the Word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let board_height = (app.session.max_attempts() * 2 + 1) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height.max(5)),
            Constraint::Length(5), // Keyboard
            Constraint::Min(0),
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for attempt in 0..app.session.max_attempts() {
        let mut spans: Vec<Span> = Vec::new();

        for position in 0..app.session.word_len() {
            let cell = app.session.cell(attempt, position);
            let letter = cell.letter.map_or(' ', |b| b as char);
            let text = format!(" {letter} ");

            let style = match app.visible_status(attempt, position) {
                Some(status) => status_style(status),
                None if app.is_active_cell(attempt, position) => Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
                None if cell.letter.is_some() => Style::default()
                    .fg(Color::White)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                None => Style::default().fg(Color::DarkGray).bg(Color::Black),
            };

            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for row in KEYBOARD_ROWS {
        let mut spans: Vec<Span> = Vec::new();

        for key in row.bytes() {
            let style = match app.visible_key_status(key) {
                Some(status) => status_style(status),
                None => Style::default().fg(Color::White),
            };
            spans.push(Span::styled(format!("{} ", key as char), style));
        }

        lines.push(Line::from(spans));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Messages
            Constraint::Length(9), // Statistics
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(message.text.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let win_rate = if stats.total_games == 0 {
        0.0
    } else {
        stats.games_won as f64 / stats.total_games as f64 * 100.0
    };

    let mut lines = vec![
        Line::from(format!(
            "Played: {}   Won: {}   Win rate: {win_rate:.0}%",
            stats.total_games, stats.games_won
        )),
        Line::default(),
    ];

    let max_count = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar_len = if max_count == 0 {
            0
        } else {
            count * 12 / max_count
        };
        lines.push(Line::from(format!(
            "{}: {}{}",
            i + 1,
            "█".repeat(bar_len),
            if count > 0 {
                format!(" {count}")
            } else {
                String::new()
            }
        )));
    }

    let stats_widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(stats_widget, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let hint = match app.input_mode {
        InputMode::Typing => "Type letters  |  Backspace deletes  |  Enter submits  |  Esc quits",
        InputMode::Revealing => "Revealing...",
        InputMode::GameOver => "'n' new game  |  'q' quit",
    };

    let status = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}
