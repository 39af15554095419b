//! Functions for parsing and formatting move sequences.
//!
//! Every move is a single character, so a sequence may be written with or
//! without whitespace between moves: `"RUru"` and `"R U r u"` are the same.

use itertools::Itertools;

use crate::Move;

/// Formats a sequence of moves as a space-separated string.
pub fn format_moves(moves: impl IntoIterator<Item = Move>) -> String {
    moves.into_iter().join(" ")
}

/// Parses a sequence of moves, skipping whitespace. Each invalid character
/// produces an error carrying its byte offset in `s`.
pub fn parse_moves(s: &str) -> impl '_ + Iterator<Item = Result<Move, MoveParseError>> {
    s.char_indices()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, notation)| {
            Move::from_char(notation).ok_or(MoveParseError::BadMove { notation, position })
        })
}

/// Parses a sequence of moves, returning the first error if any character is
/// invalid.
pub fn parse_moves_strict(s: &str) -> Result<Vec<Move>, MoveParseError> {
    parse_moves(s).collect()
}

/// Error encountered while parsing move notation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// No move was given.
    #[error("empty move notation")]
    Empty,
    /// Character that is not one of the 24 move notations.
    #[error("bad move {notation:?} at position {position}")]
    BadMove {
        /// Offending character.
        notation: char,
        /// Byte offset of the character in the input.
        position: usize,
    },
    /// More than one character where a single move was expected.
    #[error("expected a single move, got {0:?}")]
    NotSingle(String),
}
