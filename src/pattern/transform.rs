//! Result construction wrappers: flag transforms, result transforms, and
//! fixed values.
//!
//! All wrappers here delegate matching (including backtracking) to their
//! inner pattern unchanged; they only take part when a result tree is
//! built.

use std::rc::Rc;

use crate::pattern::pattern::{BoxMatcher, Matcher, Pattern, PatternNode};
use crate::pattern::result::MatchResult;
use crate::tokenizer::Token;

/// Passes a different flags type down to the inner pattern.
pub(crate) struct FlagTransformPattern<T, Fo, Fi> {
    inner: Pattern<T, Fi>,
    map: Rc<dyn Fn(&Fo) -> Fi>,
}

impl<T, Fo, Fi> FlagTransformPattern<T, Fo, Fi> {
    pub(crate) fn new(inner: Pattern<T, Fi>, map: impl Fn(&Fo) -> Fi + 'static) -> Self {
        Self {
            inner,
            map: Rc::new(map),
        }
    }
}

impl<T: 'static, Fo: 'static, Fi: 'static> PatternNode<T, Fo> for FlagTransformPattern<T, Fo, Fi> {
    fn matcher(&self, tokens: &Rc<[Token]>, pos: usize) -> BoxMatcher<T, Fo> {
        Box::new(FlagTransformMatcher {
            inner: self.inner.node_matcher(tokens, pos),
            map: Rc::clone(&self.map),
        })
    }
}

struct FlagTransformMatcher<T, Fo, Fi> {
    inner: BoxMatcher<T, Fi>,
    map: Rc<dyn Fn(&Fo) -> Fi>,
}

impl<T: 'static, Fo: 'static, Fi: 'static> Matcher<T, Fo> for FlagTransformMatcher<T, Fo, Fi> {
    fn end(&self) -> Option<usize> {
        self.inner.end()
    }

    fn try_again(&mut self) {
        self.inner.try_again();
    }

    fn result(&self, flags: &Fo) -> MatchResult<T> {
        self.inner.result(&(self.map)(flags))
    }
}

/// Rewrites the inner pattern's result tree.
pub(crate) struct ResultTransformPattern<Ti, To, F> {
    inner: Pattern<Ti, F>,
    map: Rc<dyn Fn(MatchResult<Ti>, &F) -> MatchResult<To>>,
}

impl<Ti, To, F> ResultTransformPattern<Ti, To, F> {
    pub(crate) fn new(
        inner: Pattern<Ti, F>,
        map: impl Fn(MatchResult<Ti>, &F) -> MatchResult<To> + 'static,
    ) -> Self {
        Self {
            inner,
            map: Rc::new(map),
        }
    }
}

impl<Ti: 'static, To: 'static, F: 'static> PatternNode<To, F>
    for ResultTransformPattern<Ti, To, F>
{
    fn matcher(&self, tokens: &Rc<[Token]>, pos: usize) -> BoxMatcher<To, F> {
        Box::new(ResultTransformMatcher {
            inner: self.inner.node_matcher(tokens, pos),
            map: Rc::clone(&self.map),
        })
    }
}

struct ResultTransformMatcher<Ti, To, F> {
    inner: BoxMatcher<Ti, F>,
    map: Rc<dyn Fn(MatchResult<Ti>, &F) -> MatchResult<To>>,
}

impl<Ti: 'static, To: 'static, F: 'static> Matcher<To, F> for ResultTransformMatcher<Ti, To, F> {
    fn end(&self) -> Option<usize> {
        self.inner.end()
    }

    fn try_again(&mut self) {
        self.inner.try_again();
    }

    fn result(&self, flags: &F) -> MatchResult<To> {
        (self.map)(self.inner.result(flags), flags)
    }
}

/// Matches like the inner pattern but ignores its result entirely.
///
/// The inner pattern's own value and flags types are erased here; its
/// result is never built.
pub(crate) struct FixedPattern<Ti, Fi, T, F> {
    inner: Pattern<Ti, Fi>,
    produce: Rc<dyn Fn(&F) -> MatchResult<T>>,
}

impl<Ti, Fi, T, F> FixedPattern<Ti, Fi, T, F> {
    pub(crate) fn new(
        inner: Pattern<Ti, Fi>,
        produce: impl Fn(&F) -> MatchResult<T> + 'static,
    ) -> Self {
        Self {
            inner,
            produce: Rc::new(produce),
        }
    }
}

impl<Ti: 'static, Fi: 'static, T: 'static, F: 'static> PatternNode<T, F>
    for FixedPattern<Ti, Fi, T, F>
{
    fn matcher(&self, tokens: &Rc<[Token]>, pos: usize) -> BoxMatcher<T, F> {
        Box::new(FixedMatcher {
            inner: self.inner.node_matcher(tokens, pos),
            produce: Rc::clone(&self.produce),
        })
    }
}

struct FixedMatcher<Ti, Fi, T, F> {
    inner: BoxMatcher<Ti, Fi>,
    produce: Rc<dyn Fn(&F) -> MatchResult<T>>,
}

impl<Ti: 'static, Fi: 'static, T: 'static, F: 'static> Matcher<T, F>
    for FixedMatcher<Ti, Fi, T, F>
{
    fn end(&self) -> Option<usize> {
        self.inner.end()
    }

    fn try_again(&mut self) {
        self.inner.try_again();
    }

    fn result(&self, flags: &F) -> MatchResult<T> {
        assert!(
            self.inner.end().is_some(),
            "result() called on a non-matching fixed matcher"
        );
        (self.produce)(flags)
    }
}
