//! Key categories accepted by the game controller

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// An ASCII letter, already uppercase
    Letter(u8),
    Delete,
    Submit,
    /// Anything else; carries the raw character for reporting
    Other(char),
}

impl Key {
    /// Classify a raw character
    ///
    /// Letters are case-insensitive. Non-ASCII input is never a letter.
    ///
    /// # Examples
    /// ```
    /// use tile_wordle::game::Key;
    ///
    /// assert_eq!(Key::from_char('q'), Key::Letter(b'Q'));
    /// assert_eq!(Key::from_char('\n'), Key::Submit);
    /// assert_eq!(Key::from_char('é'), Key::Other('é'));
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Self {
        match c {
            '\n' | '\r' => Self::Submit,
            '\x08' | '\x7f' => Self::Delete,
            c if c.is_ascii_alphabetic() => Self::Letter(c.to_ascii_uppercase() as u8),
            c => Self::Other(c),
        }
    }
}
