//! Tile Wordle
//!
//! A terminal Wordle game: type letters into a 6 x 5 grid, submit guesses and
//! get duplicate-safe correct / present / absent feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use tile_wordle::core::Word;
//! use tile_wordle::game::{GameController, GameStatus, Key};
//!
//! let mut game = GameController::new(Word::new("words").unwrap());
//! for c in "words".chars() {
//!     game.dispatch(Key::from_char(c)).unwrap();
//! }
//! game.dispatch(Key::Submit).unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game session and input handling
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
