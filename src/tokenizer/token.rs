//! Token model contracts for the pattern engine's input alphabet.

use std::fmt;

/// Punctuation characters accepted as [`Token::Symbol`] payloads.
pub const SYMBOL_SET: &[char] = &[
    '!', '~', '&', '^', '$', '%', '#', '@', '=', '+', '-', '*', '/', '\\', '|', '_', ';', ':',
    '?', ',', '.', '[', '{', '(', '<', ']', '}', ')', '>',
];

/// Returns `true` when `character` belongs to [`SYMBOL_SET`].
pub fn is_symbol_char(character: char) -> bool {
    SYMBOL_SET.contains(&character)
}

/// Quoting mode of a string token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringMode {
    /// Double-quoted string.
    Strong,
    /// Single-quoted string.
    Weak,
}

/// Numeric payload of a number token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    /// Whole number scanned from a plain digit run.
    Integer(i64),
    /// Decimal number scanned from `digits '.' digits`.
    Decimal(f64),
}

/// A lexical unit with a kind and payload.
///
/// Two tokens are equal iff they have the same kind and the same payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Maximal run of whitespace characters, emitted only when retained.
    Whitespace(String),
    /// Identifier text.
    Label(String),
    /// Quoted text with its quoting mode preserved.
    Str(String, StringMode),
    /// Integer or decimal number.
    Number(NumberValue),
    /// Single character from [`SYMBOL_SET`].
    Symbol(char),
}

impl Token {
    /// Returns `true` for whitespace tokens.
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace(_))
    }

    /// Returns `true` for label tokens.
    pub fn is_label(&self) -> bool {
        matches!(self, Self::Label(_))
    }

    /// Returns `true` for string tokens.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::Str(..))
    }

    /// Returns `true` for number tokens.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns `true` for symbol tokens.
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    /// Returns the label text when this is a label token.
    pub fn label_text(&self) -> Option<&str> {
        match self {
            Self::Label(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the string text when this is a string token.
    pub fn string_text(&self) -> Option<&str> {
        match self {
            Self::Str(text, _) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric payload when this is a number token.
    pub fn number_value(&self) -> Option<NumberValue> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer payload when this is an integer number token.
    pub fn integer_value(&self) -> Option<i64> {
        match self {
            Self::Number(NumberValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the symbol character when this is a symbol token.
    pub fn symbol_char(&self) -> Option<char> {
        match self {
            Self::Symbol(symbol) => Some(*symbol),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whitespace(text) => write!(f, "{text}"),
            Self::Label(text) => write!(f, "{text}"),
            Self::Str(text, StringMode::Strong) => write!(f, "\"{text}\""),
            Self::Str(text, StringMode::Weak) => write!(f, "'{text}'"),
            Self::Number(NumberValue::Integer(value)) => write!(f, "{value}"),
            Self::Number(NumberValue::Decimal(value)) => write!(f, "{value}"),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}
