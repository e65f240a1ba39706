//! The 6 x 5 tile grid and the surface the controller draws on

use crate::core::{Verdict, WORD_LENGTH};

/// Number of attempts (rows) on the board
pub const MAX_ROWS: usize = 6;

/// Surface the game controller writes tile state to
///
/// The controller never reads verdicts back; it only needs letters to
/// assemble the submitted guess.
pub trait BoardSurface {
    fn tile_letter(&self, row: usize, col: usize) -> Option<u8>;
    fn set_tile_letter(&mut self, row: usize, col: usize, letter: u8);
    fn clear_tile(&mut self, row: usize, col: usize);
    fn set_tile_verdict(&mut self, row: usize, col: usize, verdict: Verdict);
}

/// A single letter tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    letter: Option<u8>,
    verdict: Option<Verdict>,
}

impl Tile {
    #[must_use]
    pub const fn letter(&self) -> Option<u8> {
        self.letter
    }

    /// `None` until the tile's row has been submitted
    #[must_use]
    pub const fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.letter.is_some()
    }
}

/// One attempt slot
pub type Row = [Tile; WORD_LENGTH];

/// In-memory board used by every front end
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: [Row; MAX_ROWS],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ROWS] {
        &self.rows
    }

    /// # Panics
    /// Panics if `row >= MAX_ROWS`
    #[must_use]
    pub const fn row(&self, row: usize) -> &Row {
        &self.rows[row]
    }

    /// Letters of a row as a string, skipping empty tiles
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.rows[row]
            .iter()
            .filter_map(Tile::letter)
            .map(char::from)
            .collect()
    }
}

impl BoardSurface for Board {
    fn tile_letter(&self, row: usize, col: usize) -> Option<u8> {
        self.rows[row][col].letter
    }

    fn set_tile_letter(&mut self, row: usize, col: usize, letter: u8) {
        self.rows[row][col].letter = Some(letter);
    }

    fn clear_tile(&mut self, row: usize, col: usize) {
        self.rows[row][col].letter = None;
    }

    fn set_tile_verdict(&mut self, row: usize, col: usize, verdict: Verdict) {
        // First verdict wins; submitted tiles never change
        self.rows[row][col].verdict.get_or_insert(verdict);
    }
}
