//! Character-level tokenizer defining the engine's input alphabet.
//!
//! The tokenizer turns a source string into the flat [`Token`] list that
//! matcher instances index by position. Behavior toggles live in
//! [`TokenizerOptions`]; any character outside the alphabet aborts the scan
//! with a [`TokenizeError`] carrying the offending byte offset.

mod cursor;
pub mod error;
pub mod token;

use crate::tokenizer::cursor::Cursor;

pub use error::TokenizeError;
pub use token::{NumberValue, SYMBOL_SET, StringMode, Token, is_symbol_char};

/// Tokenizer behavior options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Emits [`Token::Whitespace`] tokens instead of discarding runs.
    pub include_whitespace: bool,
    /// Allows digits after the first character of a label.
    pub labels_have_digits: bool,
    /// Scans `digits '.' digits` as one decimal number token.
    pub capture_decimal_numbers: bool,
    /// Replaces in-string `\X` escapes with the bare `X`.
    pub resolve_escaped_string_characters: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            include_whitespace: false,
            labels_have_digits: false,
            capture_decimal_numbers: false,
            resolve_escaped_string_characters: false,
        }
    }
}

/// Configurable scanner from source text to a token list.
pub struct Tokenizer<'a> {
    input: &'a str,
    options: TokenizerOptions,
    cursor: Cursor,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer for the provided input and options.
    pub fn new(input: &'a str, options: TokenizerOptions) -> Self {
        Self {
            input,
            options,
            cursor: Cursor::new(),
        }
    }

    /// Scans the whole input into a token list.
    ///
    /// Lexical classes are decided by the first character:
    /// - whitespace starts a maximal whitespace run
    /// - a letter starts a label
    /// - a digit starts a number
    /// - `"` or `'` starts a strong or weak string
    /// - a character from [`SYMBOL_SET`] is a one-character symbol token
    ///
    /// Anything else is a tokenization error at that position.
    pub fn tokenize(mut self) -> Result<Vec<Token>, TokenizeError> {
        let mut tokens = Vec::new();

        while let Some(character) = self.cursor.peek_char(self.input) {
            if character.is_whitespace() {
                let run = self.scan_whitespace();
                if self.options.include_whitespace {
                    tokens.push(Token::Whitespace(run));
                }
            } else if character.is_alphabetic() {
                tokens.push(Token::Label(self.scan_label()));
            } else if character.is_ascii_digit() {
                tokens.push(Token::Number(self.scan_number()?));
            } else if character == '"' || character == '\'' {
                tokens.push(self.scan_string()?);
            } else if is_symbol_char(character) {
                let _ = self.cursor.advance_char(self.input);
                tokens.push(Token::Symbol(character));
            } else {
                return Err(TokenizeError::UnsupportedCharacter {
                    character,
                    offset: self.cursor.offset(),
                });
            }
        }

        Ok(tokens)
    }

    fn scan_whitespace(&mut self) -> String {
        let mut run = String::new();
        while let Some(character) = self.cursor.peek_char(self.input) {
            if !character.is_whitespace() {
                break;
            }
            let _ = self.cursor.advance_char(self.input);
            run.push(character);
        }
        run
    }

    fn scan_label(&mut self) -> String {
        let mut text = String::new();
        while let Some(character) = self.cursor.peek_char(self.input) {
            let accepted = character.is_alphabetic()
                || (self.options.labels_have_digits
                    && !text.is_empty()
                    && character.is_ascii_digit());
            if !accepted {
                break;
            }
            let _ = self.cursor.advance_char(self.input);
            text.push(character);
        }
        text
    }

    fn scan_number(&mut self) -> Result<NumberValue, TokenizeError> {
        let start = self.cursor.offset();
        let mut digits = self.scan_digit_run();

        let has_fraction = self.options.capture_decimal_numbers
            && self.cursor.peek_char(self.input) == Some('.')
            && self
                .cursor
                .peek_next_char(self.input)
                .is_some_and(|next| next.is_ascii_digit());

        if has_fraction {
            let _ = self.cursor.advance_char(self.input);
            digits.push('.');
            digits.push_str(&self.scan_digit_run());
            let value = digits
                .parse::<f64>()
                .map_err(|_| TokenizeError::IntegerOutOfRange { offset: start })?;
            return Ok(NumberValue::Decimal(value));
        }

        let value = digits
            .parse::<i64>()
            .map_err(|_| TokenizeError::IntegerOutOfRange { offset: start })?;
        Ok(NumberValue::Integer(value))
    }

    fn scan_digit_run(&mut self) -> String {
        let mut digits = String::new();
        while let Some(character) = self.cursor.peek_char(self.input) {
            if !character.is_ascii_digit() {
                break;
            }
            let _ = self.cursor.advance_char(self.input);
            digits.push(character);
        }
        digits
    }

    fn scan_string(&mut self) -> Result<Token, TokenizeError> {
        let start = self.cursor.offset();
        let quote = self
            .cursor
            .advance_char(self.input)
            .expect("caller peeked the opening quote");
        let mode = if quote == '"' {
            StringMode::Strong
        } else {
            StringMode::Weak
        };

        let mut text = String::new();
        loop {
            let escape_offset = self.cursor.offset();
            let Some(character) = self.cursor.advance_char(self.input) else {
                return Err(TokenizeError::UnterminatedString { offset: start });
            };

            if character == '\\' {
                let Some(escaped) = self.cursor.advance_char(self.input) else {
                    return Err(TokenizeError::DanglingEscape {
                        offset: escape_offset,
                    });
                };
                if !self.options.resolve_escaped_string_characters {
                    text.push('\\');
                }
                text.push(escaped);
            } else if character == quote {
                return Ok(Token::Str(text, mode));
            } else {
                text.push(character);
            }
        }
    }
}
