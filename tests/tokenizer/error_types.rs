use seqmatch::tokenizer::{TokenizeError, Tokenizer, TokenizerOptions};

fn tokenize_error(input: &str) -> TokenizeError {
    Tokenizer::new(input, TokenizerOptions::default())
        .tokenize()
        .expect_err("input should fail to tokenize")
}

#[test]
fn unsupported_character_reports_its_offset() {
    let error = tokenize_error("ab `cd");
    assert_eq!(
        error,
        TokenizeError::UnsupportedCharacter {
            character: '`',
            offset: 3,
        }
    );
    assert_eq!(error.offset(), 3);
}

#[test]
fn unterminated_string_reports_the_opening_quote() {
    let error = tokenize_error("x \"abc");
    assert_eq!(error, TokenizeError::UnterminatedString { offset: 2 });
}

#[test]
fn dangling_escape_reports_the_backslash() {
    let error = tokenize_error("\"abc\\");
    assert_eq!(error, TokenizeError::DanglingEscape { offset: 4 });
}

#[test]
fn errors_abort_the_whole_scan() {
    // Tokens before the offending position are not returned.
    let result = Tokenizer::new("ok then ` more", TokenizerOptions::default()).tokenize();
    assert!(result.is_err());
}

#[test]
fn error_display_names_the_byte_offset() {
    let error = tokenize_error("`");
    assert!(error.to_string().contains("byte 0"), "{error}");
}
