//! Primitive patterns: the empty match and single-token matches.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::pattern::pattern::{BoxMatcher, Matcher, PatternNode};
use crate::pattern::predicate::TokenPredicate;
use crate::pattern::result::MatchResult;
use crate::tokenizer::Token;

/// Pattern matching zero tokens exactly once.
pub(crate) struct EmptyPattern<T, F> {
    _marker: PhantomData<(T, F)>,
}

impl<T, F> EmptyPattern<T, F> {
    pub(crate) fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: 'static, F: 'static> PatternNode<T, F> for EmptyPattern<T, F> {
    fn matcher(&self, _tokens: &Rc<[Token]>, pos: usize) -> BoxMatcher<T, F> {
        Box::new(EmptyMatcher {
            end: Some(pos),
            _marker: PhantomData,
        })
    }
}

struct EmptyMatcher<T, F> {
    end: Option<usize>,
    _marker: PhantomData<(T, F)>,
}

impl<T: 'static, F: 'static> Matcher<T, F> for EmptyMatcher<T, F> {
    fn end(&self) -> Option<usize> {
        self.end
    }

    fn try_again(&mut self) {
        self.end = None;
    }

    fn result(&self, _flags: &F) -> MatchResult<T> {
        assert!(
            self.end.is_some(),
            "result() called on a non-matching empty matcher"
        );
        MatchResult::Compound(Vec::new())
    }
}

/// Pattern matching one token accepted by its predicate.
pub(crate) struct TokenPattern<T, F> {
    predicate: TokenPredicate,
    _marker: PhantomData<(T, F)>,
}

impl<T, F> TokenPattern<T, F> {
    pub(crate) fn new(predicate: TokenPredicate) -> Self {
        Self {
            predicate,
            _marker: PhantomData,
        }
    }
}

impl<T: 'static, F: 'static> PatternNode<T, F> for TokenPattern<T, F> {
    fn matcher(&self, tokens: &Rc<[Token]>, pos: usize) -> BoxMatcher<T, F> {
        let matched = tokens
            .get(pos)
            .filter(|token| self.predicate.accepts(token))
            .cloned();
        let end = matched.is_some().then_some(pos + 1);
        Box::new(TokenMatcher {
            matched,
            end,
            _marker: PhantomData,
        })
    }
}

struct TokenMatcher<T, F> {
    matched: Option<Token>,
    end: Option<usize>,
    _marker: PhantomData<(T, F)>,
}

impl<T: 'static, F: 'static> Matcher<T, F> for TokenMatcher<T, F> {
    fn end(&self) -> Option<usize> {
        self.end
    }

    fn try_again(&mut self) {
        self.end = None;
    }

    fn result(&self, _flags: &F) -> MatchResult<T> {
        assert!(
            self.end.is_some(),
            "result() called on a non-matching token matcher"
        );
        let token = self
            .matched
            .clone()
            .expect("a matching token matcher holds its token");
        MatchResult::Token(token)
    }
}
