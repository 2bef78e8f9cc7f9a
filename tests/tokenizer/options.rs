use seqmatch::tokenizer::{NumberValue, StringMode, Token, Tokenizer, TokenizerOptions};

fn tokenize_with(input: &str, options: TokenizerOptions) -> Vec<Token> {
    Tokenizer::new(input, options)
        .tokenize()
        .expect("input should tokenize")
}

#[test]
fn whitespace_is_discarded_by_default() {
    let tokens = tokenize_with("a b", TokenizerOptions::default());
    assert_eq!(
        tokens,
        vec![Token::Label("a".to_string()), Token::Label("b".to_string())]
    );
}

#[test]
fn whitespace_is_emitted_when_included() {
    let options = TokenizerOptions {
        include_whitespace: true,
        ..Default::default()
    };
    let tokens = tokenize_with("a \t b", options);
    assert_eq!(
        tokens,
        vec![
            Token::Label("a".to_string()),
            Token::Whitespace(" \t ".to_string()),
            Token::Label("b".to_string()),
        ]
    );
}

#[test]
fn labels_stop_at_digits_by_default() {
    let tokens = tokenize_with("ab12", TokenizerOptions::default());
    assert_eq!(
        tokens,
        vec![
            Token::Label("ab".to_string()),
            Token::Number(NumberValue::Integer(12)),
        ]
    );
}

#[test]
fn labels_absorb_digits_when_enabled() {
    let options = TokenizerOptions {
        labels_have_digits: true,
        ..Default::default()
    };
    let tokens = tokenize_with("ab12cd", options);
    assert_eq!(tokens, vec![Token::Label("ab12cd".to_string())]);
}

#[test]
fn digits_never_start_a_label() {
    let options = TokenizerOptions {
        labels_have_digits: true,
        ..Default::default()
    };
    let tokens = tokenize_with("12ab", options);
    assert_eq!(
        tokens,
        vec![
            Token::Number(NumberValue::Integer(12)),
            Token::Label("ab".to_string()),
        ]
    );
}

#[test]
fn dotted_digits_split_into_three_tokens_by_default() {
    let tokens = tokenize_with("3.14", TokenizerOptions::default());
    assert_eq!(
        tokens,
        vec![
            Token::Number(NumberValue::Integer(3)),
            Token::Symbol('.'),
            Token::Number(NumberValue::Integer(14)),
        ]
    );
}

#[test]
fn decimal_capture_scans_one_decimal_token() {
    let options = TokenizerOptions {
        capture_decimal_numbers: true,
        ..Default::default()
    };
    let tokens = tokenize_with("3.14", options);
    assert_eq!(tokens, vec![Token::Number(NumberValue::Decimal(3.14))]);
}

#[test]
fn decimal_capture_requires_a_digit_after_the_dot() {
    let options = TokenizerOptions {
        capture_decimal_numbers: true,
        ..Default::default()
    };
    let tokens = tokenize_with("3.x", options);
    assert_eq!(
        tokens,
        vec![
            Token::Number(NumberValue::Integer(3)),
            Token::Symbol('.'),
            Token::Label("x".to_string()),
        ]
    );
}

#[test]
fn escapes_are_kept_raw_by_default() {
    let tokens = tokenize_with("\"a\\\"b\"", TokenizerOptions::default());
    assert_eq!(
        tokens,
        vec![Token::Str("a\\\"b".to_string(), StringMode::Strong)]
    );
}

#[test]
fn escapes_resolve_to_the_bare_character_when_enabled() {
    let options = TokenizerOptions {
        resolve_escaped_string_characters: true,
        ..Default::default()
    };
    let tokens = tokenize_with("\"a\\\"b\\\\c\"", options);
    assert_eq!(
        tokens,
        vec![Token::Str("a\"b\\c".to_string(), StringMode::Strong)]
    );
}

#[test]
fn escaped_quote_does_not_terminate_the_string() {
    let tokens = tokenize_with("'a\\'b'", TokenizerOptions::default());
    assert_eq!(
        tokens,
        vec![Token::Str("a\\'b".to_string(), StringMode::Weak)]
    );
}
