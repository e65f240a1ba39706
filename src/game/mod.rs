//! Game session: board, input keys and the turn controller

mod board;
mod controller;
mod input;

pub use board::{Board, BoardSurface, MAX_ROWS, Row, Tile};
pub use controller::{Cursor, GameController, GameError, GameStatus, Notice};
pub use input::Key;
