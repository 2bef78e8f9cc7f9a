use seqmatch::tokenizer::{
    NumberValue, SYMBOL_SET, StringMode, Token, Tokenizer, TokenizerOptions, is_symbol_char,
};

fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(input, TokenizerOptions::default())
        .tokenize()
        .expect("input should tokenize")
}

#[test]
fn empty_input_yields_no_tokens() {
    assert!(tokenize("").is_empty());
}

#[test]
fn lexical_classes_scan_in_order() {
    let tokens = tokenize("key: 12,34");
    assert_eq!(
        tokens,
        vec![
            Token::Label("key".to_string()),
            Token::Symbol(':'),
            Token::Number(NumberValue::Integer(12)),
            Token::Symbol(','),
            Token::Number(NumberValue::Integer(34)),
        ]
    );
}

#[test]
fn labels_are_maximal_letter_runs() {
    assert_eq!(
        tokenize("abc def"),
        vec![
            Token::Label("abc".to_string()),
            Token::Label("def".to_string()),
        ]
    );
}

#[test]
fn double_quotes_scan_as_strong_strings() {
    assert_eq!(
        tokenize("\"hello\""),
        vec![Token::Str("hello".to_string(), StringMode::Strong)]
    );
}

#[test]
fn single_quotes_scan_as_weak_strings() {
    assert_eq!(
        tokenize("'hello'"),
        vec![Token::Str("hello".to_string(), StringMode::Weak)]
    );
}

#[test]
fn every_symbol_in_the_set_scans_alone() {
    for &symbol in SYMBOL_SET {
        let tokens = tokenize(&symbol.to_string());
        assert_eq!(tokens, vec![Token::Symbol(symbol)], "symbol {symbol:?}");
        assert!(is_symbol_char(symbol));
    }
}

#[test]
fn adjacent_symbols_scan_one_character_each() {
    assert_eq!(
        tokenize("[{(<"),
        vec![
            Token::Symbol('['),
            Token::Symbol('{'),
            Token::Symbol('('),
            Token::Symbol('<'),
        ]
    );
}

#[test]
fn numbers_are_maximal_digit_runs() {
    assert_eq!(
        tokenize("007"),
        vec![Token::Number(NumberValue::Integer(7))]
    );
}

#[test]
fn oversized_digit_runs_report_an_error() {
    let result = Tokenizer::new("99999999999999999999", TokenizerOptions::default()).tokenize();
    assert!(matches!(
        result,
        Err(seqmatch::tokenizer::TokenizeError::IntegerOutOfRange { offset: 0 })
    ));
}

#[test]
fn tokens_render_approximately_as_written() {
    assert_eq!(Token::Label("key".to_string()).to_string(), "key");
    assert_eq!(
        Token::Str("hi".to_string(), StringMode::Strong).to_string(),
        "\"hi\""
    );
    assert_eq!(
        Token::Str("hi".to_string(), StringMode::Weak).to_string(),
        "'hi'"
    );
    assert_eq!(Token::Number(NumberValue::Integer(5)).to_string(), "5");
    assert_eq!(Token::Symbol(';').to_string(), ";");
}

#[test]
fn tokens_compare_structurally() {
    assert_eq!(tokenize("x 1"), tokenize("x  1"));
    assert_ne!(tokenize("\"a\""), tokenize("'a'"));
}
