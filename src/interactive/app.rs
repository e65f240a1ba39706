//! TUI application state and logic

use crate::core::Word;
use crate::game::{GameController, GameError, GameStatus, Key, MAX_ROWS, Notice};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: GameController,
    pub target: Word,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_ROWS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(target: Word) -> Self {
        let mut app = Self {
            game: GameController::new(target),
            target,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message("Game initialized! Guess the 5-letter word.", MessageStyle::Info);
        app.add_message(
            "Type letters, Backspace to delete, Enter to submit.",
            MessageStyle::Info,
        );
        app
    }

    /// Feed one key to the game and turn the outcome into messages
    pub fn handle_key(&mut self, key: Key) {
        match self.game.dispatch(key) {
            Ok(notice) => self.on_notice(notice),
            Err(err) if err.is_user_facing() => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(GameError::GameAlreadyOver) => {
                self.add_message("Game is over! Ctrl+N for a new game.", MessageStyle::Info);
            }
            // Logged by the controller
            Err(_) => {}
        }
    }

    fn on_notice(&mut self, notice: Notice) {
        let Notice::GuessScored {
            row,
            guess,
            feedback,
            status,
        } = notice
        else {
            return;
        };

        let attempts = row + 1;
        match status {
            GameStatus::Won => {
                self.record_game(Some(attempts));

                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Ctrl+N for a new game, Esc to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.record_game(None);
                self.add_message(
                    &format!("Game Over! The word was \"{}\"", self.target),
                    MessageStyle::Error,
                );
                self.add_message("Ctrl+N for a new game, Esc to quit.", MessageStyle::Info);
            }
            GameStatus::InProgress => {
                self.add_message(
                    &format!(
                        "{guess} {} | {} guesses remaining",
                        feedback.to_emoji(),
                        self.game.remaining_attempts()
                    ),
                    MessageStyle::Info,
                );
            }
        }
    }

    fn record_game(&mut self, attempts: Option<usize>) {
        self.stats.total_games += 1;
        if let Some(attempts) = attempts {
            self.stats.games_won += 1;
            if attempts <= MAX_ROWS {
                self.stats.guess_distribution[attempts] += 1;
            }
        }
    }

    /// Start a fresh session with the same target
    pub fn new_game(&mut self) {
        if !self.game.status().is_over() {
            self.add_message("Finish the current game first!", MessageStyle::Error);
            return;
        }

        self.game = GameController::new(self.target);
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        info!("New game started");
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Handle a raw terminal key press
    pub fn on_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.handle_key(Key::Submit),
            KeyCode::Backspace => self.handle_key(Key::Delete),
            KeyCode::Char(c) => self.handle_key(Key::from_char(c)),
            other => debug!("Ignored key code {other:?}"),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
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

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.on_key_event(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Word::new("words").unwrap())
    }

    fn type_line(app: &mut App, line: &str) {
        for c in line.chars() {
            app.handle_key(Key::from_char(c));
        }
        app.handle_key(Key::Submit);
    }

    fn last_message(app: &App) -> &Message {
        app.messages.last().unwrap()
    }

    #[test]
    fn incomplete_guess_is_shown() {
        let mut app = app();
        type_line(&mut app, "wor");
        assert_eq!(last_message(&app).style, MessageStyle::Error);
        assert!(last_message(&app).text.contains("exactly 5 letters"));
    }

    #[test]
    fn silent_rejections_add_no_message() {
        let mut app = app();
        let before = app.messages.len();
        app.handle_key(Key::Delete);
        app.handle_key(Key::from_char('1'));
        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn win_records_statistics() {
        let mut app = app();
        type_line(&mut app, "crane");
        type_line(&mut app, "words");

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn loss_reveals_target() {
        let mut app = app();
        for _ in 0..MAX_ROWS {
            type_line(&mut app, "crane");
        }

        assert_eq!(app.game.status(), GameStatus::Lost);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("\"WORDS\"")));
    }

    #[test]
    fn new_game_only_after_game_over() {
        let mut app = app();
        type_line(&mut app, "cr");
        app.new_game();
        assert_eq!(app.game.current_guess(), "CR");

        app.handle_key(Key::Delete);
        app.handle_key(Key::Delete);
        type_line(&mut app, "words");
        app.new_game();
        assert_eq!(app.game.status(), GameStatus::InProgress);
        assert_eq!(app.game.attempts_used(), 0);
    }

    #[test]
    fn ctrl_c_and_escape_quit() {
        let mut app = app();
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = self::app();
        app.on_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn terminal_keys_map_to_game_keys() {
        let mut app = app();
        app.on_key_event(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE));
        app.on_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::SHIFT));
        app.on_key_event(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        app.on_key_event(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(app.game.current_guess(), "W");
    }
}
