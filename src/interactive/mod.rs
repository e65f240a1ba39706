//! Interactive TUI interface
//!
//! Full-screen terminal game built on ratatui and crossterm.

pub mod app;
mod rendering;

pub use app::{App, run_tui};
