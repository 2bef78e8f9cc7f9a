use seqmatch::pattern::{MatchResult, Pattern, Quantifier};
use seqmatch::tokenizer::Token;

fn label(text: &str) -> Token {
    Token::Label(text.to_string())
}

#[test]
fn empty_pattern_matches_empty_input_exactly_once() {
    let pattern: Pattern<(), ()> = Pattern::empty();

    let result = pattern
        .parse(&[], &())
        .expect("the empty pattern matches empty input");
    assert_eq!(result, MatchResult::Compound(Vec::new()));

    let mut matcher = pattern.matcher(&[], 0);
    assert_eq!(matcher.end(), Some(0));
    matcher.try_again();
    assert_eq!(matcher.end(), None);
    matcher.try_again();
    assert_eq!(matcher.end(), None);
}

#[test]
fn empty_pattern_consumes_nothing_mid_input() {
    let tokens = vec![label("x")];
    let pattern: Pattern<(), ()> = Pattern::empty();
    let matcher = pattern.matcher(&tokens, 1);
    assert_eq!(matcher.end(), Some(1));
}

#[test]
fn token_pattern_matches_an_exact_label() {
    let tokens = vec![label("x")];
    let pattern: Pattern<(), ()> = Pattern::label("x");
    let result = pattern
        .parse(&tokens, &())
        .expect("the label should match");
    assert_eq!(result, MatchResult::Token(label("x")));
}

#[test]
fn token_pattern_rejects_mismatch_and_end_of_input() {
    let pattern: Pattern<(), ()> = Pattern::label("x");
    assert!(pattern.parse(&[label("y")], &()).is_none());
    assert!(pattern.parse(&[], &()).is_none());

    let matcher = pattern.matcher(&[label("x")], 1);
    assert_eq!(matcher.end(), None);
}

#[test]
fn non_matching_matchers_stay_non_matching() {
    let pattern: Pattern<(), ()> = Pattern::label("x");
    let mut matcher = pattern.matcher(&[], 0);
    assert_eq!(matcher.end(), None);
    matcher.try_again();
    matcher.try_again();
    assert_eq!(matcher.end(), None);
}

#[test]
fn result_is_pure_for_the_current_alternative() {
    let tokens = vec![label("x")];
    let pattern: Pattern<(), ()> = Pattern::label("x");
    let matcher = pattern.matcher(&tokens, 0);
    assert_eq!(matcher.result(&()), matcher.result(&()));
}

#[test]
fn parse_requires_full_consumption() {
    let tokens = vec![label("x"), label("y")];
    let pattern: Pattern<(), ()> = Pattern::label("x");
    assert!(pattern.parse(&tokens, &()).is_none());
}

#[test]
fn matcher_ends_stay_within_input_bounds() {
    let tokens = vec![label("a"), label("a")];
    let pattern: Pattern<(), ()> =
        Pattern::label("a").repeat(Quantifier::greedy(0, 2));
    let mut matcher = pattern.matcher(&tokens, 1);
    while let Some(end) = matcher.end() {
        assert!(end >= 1 && end <= tokens.len());
        matcher.try_again();
    }
}

#[test]
#[should_panic(expected = "non-matching")]
fn result_on_a_non_matching_matcher_panics() {
    let pattern: Pattern<(), ()> = Pattern::label("x");
    let matcher = pattern.matcher(&[], 0);
    let _ = matcher.result(&());
}

#[test]
#[should_panic(expected = "expected a token result")]
fn wrong_shape_result_access_panics() {
    let result: MatchResult<()> = MatchResult::Compound(Vec::new());
    let _ = result.as_token();
}

#[test]
#[should_panic(expected = "reversed")]
fn reversed_quantifier_bounds_panic() {
    let _ = Quantifier::greedy(2, 1);
}
