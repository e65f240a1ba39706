//! TUI rendering with ratatui
//!
//! Draws the tile grid, the message log and a status bar.

use super::app::{App, MessageStyle};
use crate::core::Verdict;
use crate::game::{GameStatus, MAX_ROWS, Tile};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board + messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 TILE WORDLE 🟨")
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

fn tile_style(tile: &Tile, is_cursor: bool) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match tile.verdict() {
        Some(Verdict::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(Verdict::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Verdict::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None if is_cursor => base.fg(Color::Black).bg(Color::Gray),
        None => base.fg(Color::White),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let cursor = app.game.cursor();
    let in_progress = app.game.status() == GameStatus::InProgress;

    let mut lines = Vec::new();
    for (r, row) in app.game.board().rows().iter().enumerate() {
        let spans: Vec<Span> = row
            .iter()
            .enumerate()
            .flat_map(|(c, tile)| {
                let is_cursor = in_progress && r == cursor.row && c == cursor.tile;
                let letter = tile.letter().map_or('·', char::from);
                [
                    Span::styled(format!(" {letter} "), tile_style(tile, is_cursor)),
                    Span::raw(" "),
                ]
            })
            .collect();

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match app.game.status() {
        GameStatus::InProgress => format!(" Guess {} of {MAX_ROWS} ", cursor.row + 1),
        GameStatus::Won => " 🎉 SOLVED! 🎉 ".to_string(),
        GameStatus::Lost => format!(" The word was {} ", app.target),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let remaining = Paragraph::new(format!(
        "Guesses left: {}",
        app.game.remaining_attempts()
    ))
    .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.game.status().is_over() {
        "Esc: Quit | Ctrl+N: New Game"
    } else {
        "Esc: Quit | Enter: Submit | Backspace: Delete"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
