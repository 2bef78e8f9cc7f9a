//! Sequential composition and its backtracking drive loop.

use std::rc::Rc;

use crate::pattern::pattern::{BoxMatcher, Matcher, Pattern, PatternNode};
use crate::pattern::result::MatchResult;
use crate::tokenizer::Token;

/// Pattern matching its children one after another.
///
/// Always holds at least one child; empty sequences are constructed as the
/// empty pattern instead.
pub(crate) struct SequencePattern<T, F> {
    children: Rc<[Pattern<T, F>]>,
}

impl<T, F> SequencePattern<T, F> {
    pub(crate) fn new(children: Vec<Pattern<T, F>>) -> Self {
        Self {
            children: children.into(),
        }
    }
}

impl<T: 'static, F: 'static> PatternNode<T, F> for SequencePattern<T, F> {
    fn matcher(&self, tokens: &Rc<[Token]>, pos: usize) -> BoxMatcher<T, F> {
        Box::new(SequenceMatcher::start(
            Rc::clone(&self.children),
            Rc::clone(tokens),
            pos,
        ))
    }

    fn sequence_children(&self) -> Option<&[Pattern<T, F>]> {
        Some(&self.children)
    }
}

/// Depth-first search over the children's alternatives.
///
/// `stack` holds one matcher per entered child, positioned consecutively.
/// `state` is the index of the next child to enter once the current top is
/// confirmed matching; `state == children.len()` means every child has
/// matched, and `-1` means the whole sequence is exhausted.
struct SequenceMatcher<T, F> {
    children: Rc<[Pattern<T, F>]>,
    tokens: Rc<[Token]>,
    stack: Vec<BoxMatcher<T, F>>,
    state: isize,
    end: Option<usize>,
}

impl<T: 'static, F: 'static> SequenceMatcher<T, F> {
    fn start(children: Rc<[Pattern<T, F>]>, tokens: Rc<[Token]>, pos: usize) -> Self {
        let mut matcher = Self {
            children,
            tokens,
            stack: Vec::new(),
            state: 0,
            end: None,
        };
        let first = matcher.children[0].node_matcher(&matcher.tokens, pos);
        matcher.stack.push(first);
        matcher.perform_test();
        matcher
    }

    /// Runs the drive loop until every child matches or the search space is
    /// exhausted. Both initial matching and backtracking go through here.
    fn perform_test(&mut self) {
        let count = self.children.len() as isize;
        while !self.stack.is_empty() && self.state < count {
            let top_end = self
                .stack
                .last()
                .expect("loop condition keeps the stack non-empty")
                .end();
            match top_end {
                Some(end) => {
                    self.state += 1;
                    if self.state < count {
                        let next =
                            self.children[self.state as usize].node_matcher(&self.tokens, end);
                        self.stack.push(next);
                    }
                }
                None => {
                    self.state -= 1;
                    self.stack.pop();
                    if self.state >= 0 {
                        if let Some(top) = self.stack.last_mut() {
                            top.try_again();
                        }
                    }
                }
            }
        }
        self.end = if self.state < 0 {
            None
        } else {
            self.stack.last().and_then(|top| top.end())
        };
    }
}

impl<T: 'static, F: 'static> Matcher<T, F> for SequenceMatcher<T, F> {
    fn end(&self) -> Option<usize> {
        self.end
    }

    fn try_again(&mut self) {
        if self.end.is_none() {
            return;
        }
        self.state -= 1;
        if let Some(top) = self.stack.last_mut() {
            top.try_again();
        }
        self.perform_test();
    }

    fn result(&self, flags: &F) -> MatchResult<T> {
        assert!(
            self.end.is_some(),
            "result() called on a non-matching sequence matcher"
        );
        MatchResult::Compound(self.stack.iter().map(|sub| sub.result(flags)).collect())
    }
}
