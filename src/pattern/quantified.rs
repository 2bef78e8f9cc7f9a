//! Quantified repetition: greedy, reluctant, and possessive matchers.

use std::rc::Rc;

use crate::pattern::pattern::{BoxMatcher, Matcher, Pattern, PatternNode};
use crate::pattern::quantifier::{Quantifier, QuantifierMode};
use crate::pattern::result::MatchResult;
use crate::tokenizer::Token;

/// Pattern repeating its inner pattern between `min` and `max` times.
pub(crate) struct QuantifiedPattern<T, F> {
    inner: Pattern<T, F>,
    quantifier: Quantifier,
}

impl<T, F> QuantifiedPattern<T, F> {
    pub(crate) fn new(inner: Pattern<T, F>, quantifier: Quantifier) -> Self {
        Self { inner, quantifier }
    }
}

impl<T: 'static, F: 'static> PatternNode<T, F> for QuantifiedPattern<T, F> {
    fn matcher(&self, tokens: &Rc<[Token]>, pos: usize) -> BoxMatcher<T, F> {
        match self.quantifier.mode() {
            QuantifierMode::Greedy | QuantifierMode::Possessive => Box::new(GreedyMatcher::start(
                self.inner.clone(),
                self.quantifier,
                Rc::clone(tokens),
                pos,
            )),
            QuantifierMode::Reluctant => Box::new(ReluctantMatcher::start(
                self.inner.clone(),
                self.quantifier,
                Rc::clone(tokens),
                pos,
            )),
        }
    }
}

/// Pops exhausted matchers off the repetition stack, retrying the matcher
/// below each pop, until the top is matching or the stack is empty.
///
/// Correct only when every shorter stack prefix has already been offered
/// as a match; the reluctant matcher guarantees that, the greedy one does
/// not and shrinks its stack one offer at a time instead.
fn find_next_branch<T, F>(stack: &mut Vec<BoxMatcher<T, F>>) {
    while stack.last().is_some_and(|top| top.end().is_none()) {
        stack.pop();
        if let Some(top) = stack.last_mut() {
            top.try_again();
        }
    }
}

/// Repetition stack maximized up to `max`, backtracked by asking the top
/// element for its next alternative. Also serves possessive mode, which
/// withdraws all further alternatives after the first match.
///
/// Enumeration order: highest feasible repetition count first; within a
/// count, alternatives of the last repetition vary fastest. When the top
/// element runs out of alternatives it is popped and the shrunk stack is
/// offered as the next match without re-extension — a fresh instance at
/// the same position would replay the exhausted search.
struct GreedyMatcher<T, F> {
    inner: Pattern<T, F>,
    tokens: Rc<[Token]>,
    pos: usize,
    min: usize,
    max: usize,
    possessive: bool,
    stack: Vec<BoxMatcher<T, F>>,
    end: Option<usize>,
}

impl<T: 'static, F: 'static> GreedyMatcher<T, F> {
    fn start(inner: Pattern<T, F>, quantifier: Quantifier, tokens: Rc<[Token]>, pos: usize) -> Self {
        let mut matcher = Self {
            inner,
            tokens,
            pos,
            min: quantifier.min(),
            max: quantifier.max(),
            possessive: quantifier.mode() == QuantifierMode::Possessive,
            stack: Vec::new(),
            end: None,
        };
        if matcher.max == 0 {
            matcher.end = Some(pos);
            return matcher;
        }
        let first = matcher.inner.node_matcher(&matcher.tokens, pos);
        matcher.stack.push(first);
        matcher.perform_test();
        matcher
    }

    fn perform_test(&mut self) {
        loop {
            if self.stack.last().is_some_and(|top| top.end().is_none()) {
                // The top ran out of alternatives. The shrunk stack is the
                // next candidate; it must not be re-extended.
                self.stack.pop();
                if self.stack.len() >= self.min {
                    self.end = match self.stack.last() {
                        Some(top) => top.end(),
                        None => Some(self.pos),
                    };
                    break;
                }
                if self.stack.is_empty() {
                    self.end = None;
                    break;
                }
                if let Some(top) = self.stack.last_mut() {
                    top.try_again();
                }
                continue;
            }

            // Top is matching: extend as far as feasible.
            while self.stack.len() < self.max
                && self.stack.last().is_some_and(|top| top.end().is_some())
            {
                let at = self
                    .stack
                    .last()
                    .and_then(|top| top.end())
                    .expect("loop condition keeps the top matching");
                self.stack.push(self.inner.node_matcher(&self.tokens, at));
            }
            if self.stack.last().is_some_and(|top| top.end().is_none()) {
                self.stack.pop();
            }

            let count = self.stack.len();
            if count >= self.min && count <= self.max {
                self.end = match self.stack.last() {
                    Some(top) => top.end(),
                    None => Some(self.pos),
                };
                break;
            }
            // Too few repetitions: retry the deepest element and search on.
            if let Some(top) = self.stack.last_mut() {
                top.try_again();
            }
        }
    }
}

impl<T: 'static, F: 'static> Matcher<T, F> for GreedyMatcher<T, F> {
    fn end(&self) -> Option<usize> {
        self.end
    }

    fn try_again(&mut self) {
        if self.end.is_none() {
            return;
        }
        if self.possessive || self.stack.is_empty() {
            self.end = None;
            self.stack.clear();
            return;
        }
        if let Some(top) = self.stack.last_mut() {
            top.try_again();
        }
        self.perform_test();
        if self.end.is_none() {
            // Exhausted matchers keep an empty stack so further calls stay
            // no-ops.
            self.stack.clear();
        }
    }

    fn result(&self, flags: &F) -> MatchResult<T> {
        assert!(
            self.end.is_some(),
            "result() called on a non-matching greedy matcher"
        );
        MatchResult::Compound(self.stack.iter().map(|sub| sub.result(flags)).collect())
    }
}

/// Repetition preferring the fewest repetitions at or above `min`; each
/// backtrack extends by a new innermost repetition before retrying an
/// existing one.
struct ReluctantMatcher<T, F> {
    inner: Pattern<T, F>,
    tokens: Rc<[Token]>,
    pos: usize,
    min: usize,
    max: usize,
    stack: Vec<BoxMatcher<T, F>>,
    end: Option<usize>,
}

impl<T: 'static, F: 'static> ReluctantMatcher<T, F> {
    fn start(inner: Pattern<T, F>, quantifier: Quantifier, tokens: Rc<[Token]>, pos: usize) -> Self {
        let mut matcher = Self {
            inner,
            tokens,
            pos,
            min: quantifier.min(),
            max: quantifier.max(),
            stack: Vec::new(),
            end: None,
        };
        if matcher.min == 0 {
            matcher.end = Some(pos);
            return matcher;
        }
        matcher.perform_test();
        matcher
    }

    // try_again re-enters this loop directly, without retrying the top
    // first; the push/pop discipline below advances the search on its own.
    fn perform_test(&mut self) {
        loop {
            if self.stack.len() == self.max {
                if let Some(top) = self.stack.last_mut() {
                    top.try_again();
                }
            } else {
                let at = match self.stack.last() {
                    Some(top) => top.end().expect("entered with a matching top"),
                    None => self.pos,
                };
                self.stack.push(self.inner.node_matcher(&self.tokens, at));
            }

            find_next_branch(&mut self.stack);

            if self.stack.is_empty() {
                self.end = None;
                break;
            }
            let count = self.stack.len();
            if count >= self.min && count <= self.max {
                self.end = self.stack.last().and_then(|top| top.end());
                break;
            }
        }
    }
}

impl<T: 'static, F: 'static> Matcher<T, F> for ReluctantMatcher<T, F> {
    fn end(&self) -> Option<usize> {
        self.end
    }

    fn try_again(&mut self) {
        if self.end.is_none() {
            return;
        }
        self.perform_test();
    }

    fn result(&self, flags: &F) -> MatchResult<T> {
        assert!(
            self.end.is_some(),
            "result() called on a non-matching reluctant matcher"
        );
        MatchResult::Compound(self.stack.iter().map(|sub| sub.result(flags)).collect())
    }
}
