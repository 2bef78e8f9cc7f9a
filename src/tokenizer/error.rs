//! Tokenization error contracts.

use thiserror::Error;

/// Failure raised while scanning input text into tokens.
///
/// Tokenization aborts at the first offending position; every variant
/// carries the byte offset where scanning stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// A character outside the token alphabet was encountered.
    #[error("unsupported character {character:?} at byte {offset}")]
    UnsupportedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the offending character.
        offset: usize,
    },
    /// A string literal reached end of input before its closing quote.
    #[error("unterminated string starting at byte {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },
    /// A backslash escape was not followed by any character.
    #[error("escape at byte {offset} is not followed by a character")]
    DanglingEscape {
        /// Byte offset of the backslash.
        offset: usize,
    },
    /// A digit run does not fit the integer value range.
    #[error("integer literal at byte {offset} is out of range")]
    IntegerOutOfRange {
        /// Byte offset of the first digit.
        offset: usize,
    },
}

impl TokenizeError {
    /// Returns the byte offset where tokenization stopped.
    pub fn offset(&self) -> usize {
        match self {
            Self::UnsupportedCharacter { offset, .. }
            | Self::UnterminatedString { offset }
            | Self::DanglingEscape { offset }
            | Self::IntegerOutOfRange { offset } => *offset,
        }
    }
}
