//! Library entrypoint for `seqmatch`.
//!
//! `seqmatch` is a combinator-based, backtracking pattern-matching engine
//! over token sequences. A [`pattern::Pattern`] tree composed from small
//! primitives is run against a pre-tokenized input; matching succeeds only
//! when an alternative consumes the whole token list, and produces a
//! structured [`pattern::MatchResult`] tree.
//!
//! The [`tokenizer`] module defines the input alphabet and scans source
//! text into tokens; the [`pattern`] module holds the pattern tree, the
//! matcher-instance machinery, and the parse driver.

pub mod pattern;
pub mod tokenizer;
