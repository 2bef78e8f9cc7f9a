//! Ordered alternation.

use std::rc::Rc;

use crate::pattern::pattern::{BoxMatcher, Matcher, Pattern, PatternNode};
use crate::pattern::result::MatchResult;
use crate::tokenizer::Token;

/// Pattern matching the first feasible of its alternatives.
pub(crate) struct BranchPattern<T, F> {
    alternatives: Rc<[Pattern<T, F>]>,
}

impl<T, F> BranchPattern<T, F> {
    pub(crate) fn new(alternatives: Vec<Pattern<T, F>>) -> Self {
        Self {
            alternatives: alternatives.into(),
        }
    }
}

impl<T: 'static, F: 'static> PatternNode<T, F> for BranchPattern<T, F> {
    fn matcher(&self, tokens: &Rc<[Token]>, pos: usize) -> BoxMatcher<T, F> {
        Box::new(BranchMatcher::start(
            Rc::clone(&self.alternatives),
            Rc::clone(tokens),
            pos,
        ))
    }

    fn branch_children(&self) -> Option<&[Pattern<T, F>]> {
        Some(&self.alternatives)
    }
}

/// Enumerates all matches of alternative 0, then all of alternative 1, and
/// so on — strict listing order, no other priority.
struct BranchMatcher<T, F> {
    alternatives: Rc<[Pattern<T, F>]>,
    tokens: Rc<[Token]>,
    pos: usize,
    current: Option<BoxMatcher<T, F>>,
    next_index: usize,
    end: Option<usize>,
}

impl<T: 'static, F: 'static> BranchMatcher<T, F> {
    fn start(alternatives: Rc<[Pattern<T, F>]>, tokens: Rc<[Token]>, pos: usize) -> Self {
        let current = alternatives
            .first()
            .map(|alternative| alternative.node_matcher(&tokens, pos));
        let mut matcher = Self {
            alternatives,
            tokens,
            pos,
            current,
            next_index: 1,
            end: None,
        };
        matcher.perform_test();
        matcher
    }

    /// Advances to the next untried alternative while the current one is
    /// exhausted.
    fn perform_test(&mut self) {
        while self
            .current
            .as_ref()
            .is_some_and(|current| current.end().is_none())
            && self.next_index < self.alternatives.len()
        {
            self.current =
                Some(self.alternatives[self.next_index].node_matcher(&self.tokens, self.pos));
            self.next_index += 1;
        }
        self.end = self.current.as_ref().and_then(|current| current.end());
    }
}

impl<T: 'static, F: 'static> Matcher<T, F> for BranchMatcher<T, F> {
    fn end(&self) -> Option<usize> {
        self.end
    }

    fn try_again(&mut self) {
        if self.end.is_none() {
            return;
        }
        if let Some(current) = self.current.as_mut() {
            current.try_again();
        }
        self.perform_test();
    }

    fn result(&self, flags: &F) -> MatchResult<T> {
        assert!(
            self.end.is_some(),
            "result() called on a non-matching branch matcher"
        );
        self.current
            .as_ref()
            .expect("a matching branch matcher holds its current alternative")
            .result(flags)
    }
}
