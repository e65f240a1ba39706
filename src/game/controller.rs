//! Turn-based game controller
//!
//! Owns the turn cursor, the game status and the board surface for a single
//! session. Every operation validates its preconditions before touching the
//! board, so a rejected event leaves the session exactly as it was.

use super::board::{Board, BoardSurface, MAX_ROWS};
use super::input::Key;
use crate::core::{Feedback, WORD_LENGTH, Word, evaluate};
use log::{debug, info, warn};
use thiserror::Error;

/// Game lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Position of the next tile to fill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub tile: usize,
}

/// Reasons an input event is rejected
///
/// None of these are fatal; the session continues unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Row is full! Cannot add more letters")]
    RowFull,
    #[error("No letters to delete in current row")]
    NothingToDelete,
    #[error("Please enter exactly 5 letters! ({filled} entered)")]
    IncompleteGuess { filled: usize },
    #[error("Game is over!")]
    GameAlreadyOver,
    #[error("Ignored key {0:?} (not a letter, Enter or Backspace)")]
    InvalidKey(char),
}

impl GameError {
    /// Whether this rejection should be shown to the player rather than just logged
    #[must_use]
    pub const fn is_user_facing(self) -> bool {
        matches!(self, Self::IncompleteGuess { .. })
    }
}

/// What an accepted input event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    LetterAdded { row: usize, col: usize, letter: u8 },
    LetterDeleted { row: usize, col: usize, letter: u8 },
    GuessScored {
        row: usize,
        guess: Word,
        feedback: Feedback,
        status: GameStatus,
    },
}

/// A single game session
pub struct GameController<S: BoardSurface = Board> {
    surface: S,
    target: Word,
    cursor: Cursor,
    status: GameStatus,
}

impl GameController<Board> {
    /// Start a session on a fresh in-memory board
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self::with_surface(target, Board::new())
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.surface
    }
}

impl<S: BoardSurface> GameController<S> {
    /// Start a session drawing onto `surface`
    #[must_use]
    pub fn with_surface(target: Word, surface: S) -> Self {
        debug!("New session started");
        Self {
            surface,
            target,
            cursor: Cursor::default(),
            status: GameStatus::InProgress,
        }
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Number of submitted guesses
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        if self.status.is_over() {
            self.cursor.row + 1
        } else {
            self.cursor.row
        }
    }

    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        MAX_ROWS - self.attempts_used()
    }

    /// Letters typed so far in the active row
    #[must_use]
    pub fn current_guess(&self) -> String {
        (0..self.cursor.tile)
            .filter_map(|col| self.surface.tile_letter(self.cursor.row, col))
            .map(char::from)
            .collect()
    }

    /// Route a key to the matching operation
    ///
    /// # Errors
    /// Returns the `GameError` of the routed operation, or
    /// `GameError::InvalidKey` for keys with no operation.
    pub fn dispatch(&mut self, key: Key) -> Result<Notice, GameError> {
        debug!("Key pressed: {key:?}");

        let result = match key {
            Key::Delete => self.on_delete(),
            Key::Submit => self.on_submit(),
            Key::Letter(letter) => self.on_letter(letter),
            Key::Other(c) => Err(GameError::InvalidKey(c)),
        };

        if let Err(err) = result {
            warn!("{err}");
        }
        result
    }

    /// Write a letter into the next free tile of the active row
    ///
    /// # Errors
    /// - `GameAlreadyOver` once the game is won or lost
    /// - `RowFull` if the active row already holds five letters
    /// - `InvalidKey` if `letter` is not an ASCII letter
    pub fn on_letter(&mut self, letter: u8) -> Result<Notice, GameError> {
        self.ensure_in_progress()?;

        if self.cursor.tile >= WORD_LENGTH {
            return Err(GameError::RowFull);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidKey(char::from(letter)));
        }

        let letter = letter.to_ascii_uppercase();
        let Cursor { row, tile: col } = self.cursor;
        self.surface.set_tile_letter(row, col, letter);
        self.cursor.tile += 1;

        debug!(
            "Added {} to position {col} in row {row}, progress: {:?}",
            char::from(letter),
            self.current_guess()
        );
        Ok(Notice::LetterAdded { row, col, letter })
    }

    /// Remove the most recently typed letter of the active row
    ///
    /// # Errors
    /// - `GameAlreadyOver` once the game is won or lost
    /// - `NothingToDelete` if the active row is empty
    pub fn on_delete(&mut self) -> Result<Notice, GameError> {
        self.ensure_in_progress()?;

        if self.cursor.tile == 0 {
            return Err(GameError::NothingToDelete);
        }

        self.cursor.tile -= 1;
        let Cursor { row, tile: col } = self.cursor;
        let letter = self.surface.tile_letter(row, col).unwrap_or(b' ');
        self.surface.clear_tile(row, col);

        debug!(
            "Deleted {} from position {col} in row {row}",
            char::from(letter)
        );
        Ok(Notice::LetterDeleted { row, col, letter })
    }

    /// Score the active row against the target
    ///
    /// # Errors
    /// - `GameAlreadyOver` once the game is won or lost
    /// - `IncompleteGuess` unless the active row holds exactly five letters
    pub fn on_submit(&mut self) -> Result<Notice, GameError> {
        self.ensure_in_progress()?;

        let filled = self.cursor.tile;
        if filled != WORD_LENGTH {
            return Err(GameError::IncompleteGuess { filled });
        }
        let guess = self
            .read_active_row()
            .ok_or(GameError::IncompleteGuess { filled })?;

        let row = self.cursor.row;
        info!("Submitting guess {guess} in row {row}");

        let feedback = evaluate(&guess, &self.target);
        for (col, &verdict) in feedback.verdicts().iter().enumerate() {
            self.surface.set_tile_verdict(row, col, verdict);
        }

        if guess == self.target {
            self.status = GameStatus::Won;
            info!("Game won in {} guesses", row + 1);
        } else if row + 1 >= MAX_ROWS {
            self.status = GameStatus::Lost;
            info!("Game lost, used all {MAX_ROWS} rows");
        } else {
            self.cursor = Cursor {
                row: row + 1,
                tile: 0,
            };
            debug!(
                "Moving to row {}, {} guesses remaining",
                self.cursor.row,
                self.remaining_attempts()
            );
        }

        Ok(Notice::GuessScored {
            row,
            guess,
            feedback,
            status: self.status,
        })
    }

    const fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status.is_over() {
            Err(GameError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }

    fn read_active_row(&self) -> Option<Word> {
        let row = self.cursor.row;
        let mut letters = [0u8; WORD_LENGTH];
        for (col, slot) in letters.iter_mut().enumerate() {
            *slot = self.surface.tile_letter(row, col)?;
        }
        Word::from_letters(letters).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;

    fn game(target: &str) -> GameController {
        GameController::new(Word::new(target).unwrap())
    }

    fn type_word(game: &mut GameController, word: &str) {
        for c in word.chars() {
            game.dispatch(Key::from_char(c)).unwrap();
        }
    }

    fn play(game: &mut GameController, word: &str) -> Result<Notice, GameError> {
        type_word(game, word);
        game.on_submit()
    }

    #[test]
    fn letters_fill_active_row() {
        let mut game = game("words");
        let notice = game.on_letter(b'c').unwrap();

        assert_eq!(
            notice,
            Notice::LetterAdded {
                row: 0,
                col: 0,
                letter: b'C'
            }
        );
        assert_eq!(game.cursor(), Cursor { row: 0, tile: 1 });
        assert_eq!(game.board().row(0)[0].letter(), Some(b'C'));
        assert_eq!(game.current_guess(), "C");
    }

    #[test]
    fn row_full_rejects_sixth_letter() {
        let mut game = game("words");
        type_word(&mut game, "crane");
        let before = game.board().clone();

        assert_eq!(game.on_letter(b'X'), Err(GameError::RowFull));
        assert_eq!(game.cursor(), Cursor { row: 0, tile: 5 });
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn delete_clears_last_letter() {
        let mut game = game("words");
        type_word(&mut game, "cr");

        let notice = game.on_delete().unwrap();
        assert_eq!(
            notice,
            Notice::LetterDeleted {
                row: 0,
                col: 1,
                letter: b'R'
            }
        );
        assert_eq!(game.cursor().tile, 1);
        assert!(!game.board().row(0)[1].is_filled());
        assert_eq!(game.board().row(0)[1].verdict(), None);
        assert_eq!(game.current_guess(), "C");
    }

    #[test]
    fn nothing_to_delete_on_empty_row() {
        let mut game = game("words");
        assert_eq!(game.on_delete(), Err(GameError::NothingToDelete));
        assert_eq!(game.cursor(), Cursor::default());
    }

    #[test]
    fn incomplete_guess_is_rejected_without_mutation() {
        let mut game = game("words");
        type_word(&mut game, "cra");

        let err = game.on_submit().unwrap_err();
        assert_eq!(err, GameError::IncompleteGuess { filled: 3 });
        assert!(err.is_user_facing());
        assert_eq!(game.cursor(), Cursor { row: 0, tile: 3 });
        assert!(game.board().row(0).iter().all(|t| t.verdict().is_none()));
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn miss_advances_to_next_row() {
        let mut game = game("words");
        let notice = play(&mut game, "crane").unwrap();

        let Notice::GuessScored {
            row,
            feedback,
            status,
            ..
        } = notice
        else {
            panic!("expected a scored guess, got {notice:?}");
        };
        assert_eq!(row, 0);
        assert_eq!(status, GameStatus::InProgress);
        // Only R appears in WORDS, at a different position
        assert_eq!(feedback.count(Verdict::Present), 1);
        assert_eq!(game.cursor(), Cursor { row: 1, tile: 0 });
        assert_eq!(game.attempts_used(), 1);
        assert_eq!(game.remaining_attempts(), 5);
        assert_eq!(game.board().row(0)[1].verdict(), Some(Verdict::Present));
    }

    #[test]
    fn exact_guess_wins_and_locks_the_game() {
        let mut game = game("words");
        let notice = play(&mut game, "words").unwrap();

        assert!(matches!(
            notice,
            Notice::GuessScored {
                status: GameStatus::Won,
                feedback: Feedback::PERFECT,
                ..
            }
        ));
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.attempts_used(), 1);

        let cursor = game.cursor();
        assert_eq!(game.on_letter(b'A'), Err(GameError::GameAlreadyOver));
        assert_eq!(game.on_delete(), Err(GameError::GameAlreadyOver));
        assert_eq!(game.on_submit(), Err(GameError::GameAlreadyOver));
        assert_eq!(game.cursor(), cursor);
    }

    #[test]
    fn six_misses_lose() {
        let mut game = game("words");
        for _ in 0..5 {
            play(&mut game, "crane").unwrap();
            assert_eq!(game.status(), GameStatus::InProgress);
        }

        let notice = play(&mut game, "crane").unwrap();
        assert!(matches!(
            notice,
            Notice::GuessScored {
                row: 5,
                status: GameStatus::Lost,
                ..
            }
        ));
        assert_eq!(game.remaining_attempts(), 0);
        assert_eq!(game.on_submit(), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let mut game = game("words");
        for _ in 0..5 {
            play(&mut game, "crane").unwrap();
        }
        play(&mut game, "words").unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn dispatch_routes_keys() {
        let mut game = game("words");
        assert!(game.dispatch(Key::Letter(b'W')).is_ok());
        assert!(game.dispatch(Key::Delete).is_ok());
        assert_eq!(
            game.dispatch(Key::Submit),
            Err(GameError::IncompleteGuess { filled: 0 })
        );
        assert_eq!(
            game.dispatch(Key::Other('1')),
            Err(GameError::InvalidKey('1'))
        );
        assert_eq!(game.cursor(), Cursor::default());
    }

    #[test]
    fn non_letter_byte_is_rejected() {
        let mut game = game("words");
        assert_eq!(game.on_letter(b'3'), Err(GameError::InvalidKey('3')));
        assert_eq!(game.cursor().tile, 0);
    }

    /// Surface that records every call made by the controller
    #[derive(Default)]
    struct RecordingSurface {
        board: Board,
        calls: Vec<String>,
    }

    impl BoardSurface for RecordingSurface {
        fn tile_letter(&self, row: usize, col: usize) -> Option<u8> {
            self.board.tile_letter(row, col)
        }

        fn set_tile_letter(&mut self, row: usize, col: usize, letter: u8) {
            self.calls
                .push(format!("set {row},{col}={}", char::from(letter)));
            self.board.set_tile_letter(row, col, letter);
        }

        fn clear_tile(&mut self, row: usize, col: usize) {
            self.calls.push(format!("clear {row},{col}"));
            self.board.clear_tile(row, col);
        }

        fn set_tile_verdict(&mut self, row: usize, col: usize, verdict: Verdict) {
            self.calls.push(format!("verdict {row},{col}={verdict}"));
            self.board.set_tile_verdict(row, col, verdict);
        }
    }

    #[test]
    fn controller_drives_custom_surface() {
        let target = Word::new("speed").unwrap();
        let mut game = GameController::with_surface(target, RecordingSurface::default());

        for c in "erasx".chars() {
            game.dispatch(Key::from_char(c)).unwrap();
        }
        game.dispatch(Key::Delete).unwrap();
        game.dispatch(Key::from_char('e')).unwrap();
        game.dispatch(Key::Submit).unwrap();

        let calls = &game.surface().calls;
        assert_eq!(calls[4], "set 0,4=X");
        assert_eq!(calls[5], "clear 0,4");
        assert_eq!(
            &calls[7..],
            [
                "verdict 0,0=present",
                "verdict 0,1=absent",
                "verdict 0,2=absent",
                "verdict 0,3=present",
                "verdict 0,4=present",
            ]
        );
    }
}
