//! Pure token tests used by single-token patterns.

use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;

use crate::tokenizer::{NumberValue, StringMode, Token};

/// A pure `Token -> bool` test.
///
/// Predicates carry no hidden state; cloning shares the underlying
/// function.
#[derive(Clone)]
pub struct TokenPredicate {
    test: Rc<dyn Fn(&Token) -> bool>,
}

impl TokenPredicate {
    /// Wraps an arbitrary token test.
    pub fn new(test: impl Fn(&Token) -> bool + 'static) -> Self {
        Self {
            test: Rc::new(test),
        }
    }

    /// Applies the test to a token.
    pub fn accepts(&self, token: &Token) -> bool {
        (self.test)(token)
    }

    /// Accepts every token.
    pub fn any() -> Self {
        Self::new(|_| true)
    }

    /// Accepts tokens structurally equal to `token`.
    pub fn exactly(token: Token) -> Self {
        Self::new(move |candidate| *candidate == token)
    }

    /// Accepts whitespace tokens.
    pub fn whitespace() -> Self {
        Self::new(Token::is_whitespace)
    }

    /// Accepts any label token.
    pub fn any_label() -> Self {
        Self::new(Token::is_label)
    }

    /// Accepts the label token with exactly `text`.
    pub fn label(text: &str) -> Self {
        let text = text.to_string();
        Self::new(move |candidate| candidate.label_text() == Some(text.as_str()))
    }

    /// Accepts any string token, strong or weak.
    pub fn any_string() -> Self {
        Self::new(Token::is_string)
    }

    /// Accepts string tokens with the given quoting mode.
    pub fn string_in_mode(mode: StringMode) -> Self {
        Self::new(move |candidate| matches!(candidate, Token::Str(_, m) if *m == mode))
    }

    /// Accepts any number token.
    pub fn any_number() -> Self {
        Self::new(Token::is_number)
    }

    /// Accepts integer number tokens.
    pub fn integer() -> Self {
        Self::new(|candidate| matches!(candidate, Token::Number(NumberValue::Integer(_))))
    }

    /// Accepts decimal number tokens.
    pub fn decimal() -> Self {
        Self::new(|candidate| matches!(candidate, Token::Number(NumberValue::Decimal(_))))
    }

    /// Accepts integer number tokens whose value lies in `range`.
    pub fn integer_in(range: RangeInclusive<i64>) -> Self {
        Self::new(move |candidate| {
            candidate
                .integer_value()
                .is_some_and(|value| range.contains(&value))
        })
    }

    /// Accepts any symbol token.
    pub fn any_symbol() -> Self {
        Self::new(Token::is_symbol)
    }

    /// Accepts the symbol token for `symbol`.
    pub fn symbol(symbol: char) -> Self {
        Self::new(move |candidate| candidate.symbol_char() == Some(symbol))
    }
}

impl fmt::Debug for TokenPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenPredicate(..)")
    }
}
