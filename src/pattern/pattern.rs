//! Pattern handles, the matcher contract, and the parse driver.

use std::ops::{BitOr, Mul};
use std::rc::Rc;

use crate::pattern::branch::BranchPattern;
use crate::pattern::lazy::LazyPattern;
use crate::pattern::predicate::TokenPredicate;
use crate::pattern::primitive::{EmptyPattern, TokenPattern};
use crate::pattern::quantified::QuantifiedPattern;
use crate::pattern::quantifier::Quantifier;
use crate::pattern::result::MatchResult;
use crate::pattern::sequence::SequencePattern;
use crate::pattern::transform::{FixedPattern, FlagTransformPattern, ResultTransformPattern};
use crate::tokenizer::Token;

/// One match in progress for a pattern at a fixed start position.
///
/// A matcher is a cursor through the space of the pattern's possible
/// matches from that position. Construction leaves it either on its first
/// alternative or terminally non-matching; [`Matcher::try_again`] advances
/// to the next alternative. Once non-matching, a matcher stays
/// non-matching.
///
/// Matchers are single-use mutable state owned by one match in progress;
/// they must not be shared.
pub trait Matcher<T, F> {
    /// Returns the current match end (one past the last consumed token),
    /// or `None` when the matcher holds no match.
    fn end(&self) -> Option<usize>;

    /// Advances to the next alternative match from the same start
    /// position. No-op when already non-matching.
    fn try_again(&mut self);

    /// Builds the result tree for the current alternative.
    ///
    /// Pure with respect to matcher state: repeated calls with equal flags
    /// return equal results. Panics when the matcher is not currently
    /// matching; that call is a programming bug.
    fn result(&self, flags: &F) -> MatchResult<T>;
}

pub(crate) type BoxMatcher<T, F> = Box<dyn Matcher<T, F>>;

/// Node capability behind a [`Pattern`] handle.
pub(crate) trait PatternNode<T, F> {
    /// Creates a matcher for this node over `tokens` at `pos`.
    fn matcher(&self, tokens: &Rc<[Token]>, pos: usize) -> BoxMatcher<T, F>;

    /// Child list when this node is a sequence, for construction-time
    /// flattening.
    fn sequence_children(&self) -> Option<&[Pattern<T, F>]> {
        None
    }

    /// Alternative list when this node is a branch, for construction-time
    /// flattening.
    fn branch_children(&self) -> Option<&[Pattern<T, F>]> {
        None
    }
}

/// An immutable matching rule over token sequences.
///
/// `T` is the element type of values carried inside value results this
/// pattern produces; `F` is the flags type threaded down the tree when a
/// result is built. Patterns are configuration only — they hold no
/// per-match state, clone cheaply, and are freely shared across runs.
pub struct Pattern<T, F> {
    node: Rc<dyn PatternNode<T, F>>,
}

impl<T, F> Clone for Pattern<T, F> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T, F> Pattern<T, F> {
    pub(crate) fn from_node(node: Rc<dyn PatternNode<T, F>>) -> Self {
        Self { node }
    }

    pub(crate) fn node_matcher(&self, tokens: &Rc<[Token]>, pos: usize) -> BoxMatcher<T, F> {
        self.node.matcher(tokens, pos)
    }
}

impl<T: 'static, F: 'static> Pattern<T, F> {
    /// A pattern matching zero tokens exactly once.
    pub fn empty() -> Self {
        Self::from_node(Rc::new(EmptyPattern::new()))
    }

    /// A pattern matching one token accepted by `predicate`.
    pub fn token(predicate: TokenPredicate) -> Self {
        Self::from_node(Rc::new(TokenPattern::new(predicate)))
    }

    /// A pattern matching the label token with exactly `text`.
    pub fn label(text: &str) -> Self {
        Self::token(TokenPredicate::label(text))
    }

    /// A pattern matching the symbol token for `symbol`.
    pub fn symbol(symbol: char) -> Self {
        Self::token(TokenPredicate::symbol(symbol))
    }

    /// A pattern matching one token structurally equal to `token`.
    pub fn exact(token: Token) -> Self {
        Self::token(TokenPredicate::exactly(token))
    }

    /// A pattern matching `children` one after another.
    ///
    /// Children that are themselves sequences are flattened into this one;
    /// an empty list behaves like [`Pattern::empty`].
    pub fn sequence(children: Vec<Pattern<T, F>>) -> Self {
        let mut flat = Vec::with_capacity(children.len());
        for child in children {
            match child.node.sequence_children() {
                Some(nested) => flat.extend_from_slice(nested),
                None => flat.push(child),
            }
        }
        if flat.is_empty() {
            return Self::empty();
        }
        Self::from_node(Rc::new(SequencePattern::new(flat)))
    }

    /// A pattern matching the first feasible of `alternatives`, in listing
    /// order, then enumerating later alternatives on demand.
    ///
    /// Alternatives that are themselves branches are flattened into this
    /// one; an empty list never matches.
    pub fn branch(alternatives: Vec<Pattern<T, F>>) -> Self {
        let mut flat = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            match alternative.node.branch_children() {
                Some(nested) => flat.extend_from_slice(nested),
                None => flat.push(alternative),
            }
        }
        Self::from_node(Rc::new(BranchPattern::new(flat)))
    }

    /// A forward-reference pattern resolved by `thunk` at most once, on
    /// first demand. Used to tie recursive grammars.
    pub fn lazy(thunk: impl Fn() -> Pattern<T, F> + 'static) -> Self {
        Self::from_node(Rc::new(LazyPattern::new(thunk)))
    }

    /// Sequences `self` before `next`.
    pub fn then(self, next: Pattern<T, F>) -> Self {
        Self::sequence(vec![self, next])
    }

    /// Tries `self` first, then `alternative`.
    pub fn or(self, alternative: Pattern<T, F>) -> Self {
        Self::branch(vec![self, alternative])
    }

    /// Repeats `self` according to `quantifier`.
    pub fn repeat(self, quantifier: Quantifier) -> Self {
        Self::from_node(Rc::new(QuantifiedPattern::new(self, quantifier)))
    }

    /// Matches `self` zero or one time, preferring one.
    pub fn maybe(self) -> Self {
        self.repeat(Quantifier::greedy(0, 1))
    }

    /// Transforms the flags seen by `self` when a result is built.
    ///
    /// The surrounding scope passes flags of type `Fo`; `map` derives the
    /// flags `self` consumes. Matching behavior is unchanged.
    pub fn trans_flags<Fo: 'static>(self, map: impl Fn(&Fo) -> F + 'static) -> Pattern<T, Fo> {
        Pattern::from_node(Rc::new(FlagTransformPattern::new(self, map)))
    }

    /// Rewrites the result tree built by `self`.
    pub fn trans_result<To: 'static>(
        self,
        map: impl Fn(MatchResult<T>, &F) -> MatchResult<To> + 'static,
    ) -> Pattern<To, F> {
        Pattern::from_node(Rc::new(ResultTransformPattern::new(self, map)))
    }

    /// Rewrites the result tree built by `self` into a single value.
    pub fn trans_result_value<To: 'static>(
        self,
        map: impl Fn(MatchResult<T>, &F) -> To + 'static,
    ) -> Pattern<To, F> {
        self.trans_result(move |result, flags| MatchResult::Value(map(result, flags)))
    }

    /// Transforms flags on the way down and the result on the way up.
    pub fn trans<To: 'static, Fo: 'static>(
        self,
        map_flags: impl Fn(&Fo) -> F + 'static,
        map_result: impl Fn(MatchResult<T>, &Fo) -> MatchResult<To> + 'static,
    ) -> Pattern<To, Fo> {
        self.trans_flags(map_flags).trans_result(map_result)
    }

    /// Transforms flags on the way down and the result into a single value
    /// on the way up.
    pub fn trans_value<To: 'static, Fo: 'static>(
        self,
        map_flags: impl Fn(&Fo) -> F + 'static,
        map_result: impl Fn(MatchResult<T>, &Fo) -> To + 'static,
    ) -> Pattern<To, Fo> {
        self.trans_flags(map_flags).trans_result_value(map_result)
    }

    /// Matches exactly like `self` but ignores its result, returning
    /// `produce(flags)` instead.
    pub fn fixed<To: 'static, Fo: 'static>(
        self,
        produce: impl Fn(&Fo) -> MatchResult<To> + 'static,
    ) -> Pattern<To, Fo> {
        Pattern::from_node(Rc::new(FixedPattern::new(self, produce)))
    }

    /// Matches exactly like `self` but always returns `value`.
    pub fn fixed_value<To: Clone + 'static, Fo: 'static>(self, value: To) -> Pattern<To, Fo> {
        self.fixed(move |_| MatchResult::Value(value.clone()))
    }

    /// Creates a matcher for this pattern over `tokens` at `pos`.
    ///
    /// The token list is copied into shared storage once; all sub-matchers
    /// borrow it immutably for the duration of the match.
    pub fn matcher(&self, tokens: &[Token], pos: usize) -> Box<dyn Matcher<T, F>> {
        let tokens: Rc<[Token]> = tokens.into();
        self.node.matcher(&tokens, pos)
    }

    /// Matches this pattern against the whole token list.
    ///
    /// A pattern succeeds only on exact consumption: alternatives are
    /// enumerated until one ends at `tokens.len()`, and its result tree is
    /// returned. `None` means no alternative consumes the whole input.
    pub fn parse(&self, tokens: &[Token], flags: &F) -> Option<MatchResult<T>> {
        let shared: Rc<[Token]> = tokens.into();
        let mut matcher = self.node.matcher(&shared, 0);
        loop {
            match matcher.end() {
                None => return None,
                Some(end) if end == tokens.len() => return Some(matcher.result(flags)),
                Some(_) => matcher.try_again(),
            }
        }
    }
}

impl<T: 'static, F: 'static> BitOr for Pattern<T, F> {
    type Output = Pattern<T, F>;

    fn bitor(self, alternative: Pattern<T, F>) -> Pattern<T, F> {
        self.or(alternative)
    }
}

impl<T: 'static, F: 'static> Mul<Quantifier> for Pattern<T, F> {
    type Output = Pattern<T, F>;

    fn mul(self, quantifier: Quantifier) -> Pattern<T, F> {
        self.repeat(quantifier)
    }
}

impl<T: 'static, F: 'static> Mul<usize> for Pattern<T, F> {
    type Output = Pattern<T, F>;

    fn mul(self, count: usize) -> Pattern<T, F> {
        self.repeat(Quantifier::exactly(count))
    }
}
