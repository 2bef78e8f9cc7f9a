//! Forward-reference patterns for recursive grammars.

use std::cell::RefCell;
use std::rc::Rc;

use once_cell::unsync::OnceCell;

use crate::pattern::pattern::{BoxMatcher, Pattern, PatternNode};
use crate::tokenizer::Token;

type PatternThunk<T, F> = Box<dyn Fn() -> Pattern<T, F>>;

/// Pattern resolved from a thunk at most once, on first demand.
///
/// Recursive grammars tie their knots through lazy nodes: the thunk is not
/// run at construction time, so a rule may refer to patterns that are
/// still being built. Matcher creation delegates to the resolved pattern;
/// a lazy node adds no matcher shell of its own.
pub(crate) struct LazyPattern<T, F> {
    thunk: RefCell<Option<PatternThunk<T, F>>>,
    resolved: OnceCell<Pattern<T, F>>,
}

impl<T, F> LazyPattern<T, F> {
    pub(crate) fn new(thunk: impl Fn() -> Pattern<T, F> + 'static) -> Self {
        Self {
            thunk: RefCell::new(Some(Box::new(thunk))),
            resolved: OnceCell::new(),
        }
    }

    fn resolve(&self) -> &Pattern<T, F> {
        self.resolved.get_or_init(|| {
            let thunk = self
                .thunk
                .borrow_mut()
                .take()
                .expect("lazy pattern thunk runs at most once");
            thunk()
        })
    }
}

impl<T: 'static, F: 'static> PatternNode<T, F> for LazyPattern<T, F> {
    fn matcher(&self, tokens: &Rc<[Token]>, pos: usize) -> BoxMatcher<T, F> {
        self.resolve().node_matcher(tokens, pos)
    }
}
