use haver_core::scanner::{scan, Token};
use haver_core::ScanError;

// ============================================================================
// Structural tokens
// ============================================================================

#[test]
fn empty_object_is_two_tokens() {
    let tokens = scan(b"{}").unwrap();
    assert_eq!(tokens, vec![Token::LeftBrace, Token::RightBrace]);
}

#[test]
fn empty_array_is_two_tokens() {
    let tokens = scan(b"[]").unwrap();
    assert_eq!(tokens, vec![Token::LeftBracket, Token::RightBracket]);
}

#[test]
fn empty_input_is_no_tokens() {
    let tokens = scan(b"").unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn simple_pair_token_sequence() {
    let tokens = scan(br#"{"key": "value"}"#).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::LeftBrace,
            Token::String("key".to_string()),
            Token::Colon,
            Token::String("value".to_string()),
            Token::RightBrace,
        ]
    );
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn integer_literal_widens_to_float() {
    let tokens = scan(br#"{"integer": 42, "float": 3.14}"#).unwrap();
    assert_eq!(tokens.len(), 9);
    assert_eq!(tokens[3], Token::Number(42.0));
    assert_eq!(tokens[7], Token::Number(3.14));
}

#[test]
fn negative_literals() {
    let tokens = scan(b"[-12, -0.5]").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::LeftBracket,
            Token::Number(-12.0),
            Token::Comma,
            Token::Number(-0.5),
            Token::RightBracket,
        ]
    );
}

#[test]
fn boolean_words_are_fully_consumed() {
    // The scanner must advance past the trailing letters of `true`/`false`
    // so the next token starts at the right offset.
    let tokens = scan(b"[true, false]").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::LeftBracket,
            Token::Bool(true),
            Token::Comma,
            Token::Bool(false),
            Token::RightBracket,
        ]
    );
}

#[test]
fn null_literal() {
    let tokens = scan(br#"{"nothing": null}"#).unwrap();
    assert_eq!(tokens[3], Token::Null);
    assert_eq!(tokens[4], Token::RightBrace);
}

#[test]
fn string_payload_is_verbatim_bytes_between_quotes() {
    let tokens = scan(br#"["spaces and , punctuation: fine"]"#).unwrap();
    assert_eq!(
        tokens[1],
        Token::String("spaces and , punctuation: fine".to_string())
    );
}

#[test]
fn whitespace_between_tokens_is_skipped() {
    let tokens = scan(b" {\t\"a\" :\n 1 ,\r \"b\" : 2 } ").unwrap();
    assert_eq!(tokens.len(), 9);
    assert_eq!(tokens[0], Token::LeftBrace);
    assert_eq!(tokens[3], Token::Number(1.0));
    assert_eq!(tokens[8], Token::RightBrace);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn unterminated_string_reports_opening_offset() {
    let err = scan(br#"{"key"#).unwrap_err();
    assert_eq!(err, ScanError::UnterminatedString { offset: 1 });
}

#[test]
fn invalid_number_two_dots() {
    let err = scan(b"[1.2.3]").unwrap_err();
    assert_eq!(
        err,
        ScanError::InvalidNumber {
            literal: "1.2.3".to_string(),
            offset: 1,
        }
    );
}

#[test]
fn invalid_number_bare_minus() {
    let err = scan(b"[-]").unwrap_err();
    assert_eq!(
        err,
        ScanError::InvalidNumber {
            literal: "-".to_string(),
            offset: 1,
        }
    );
}

#[test]
fn unexpected_byte_reports_offset() {
    let err = scan(b"{ @ }").unwrap_err();
    assert_eq!(
        err,
        ScanError::UnexpectedByte {
            byte: b'@',
            offset: 2,
        }
    );
}

// ============================================================================
// Generator-shaped input
// ============================================================================

#[test]
fn point_entry_scans_to_expected_sequence() {
    let input = br#"{"points": [{"x0": -31.5, "y0": 12, "x1": 100.25, "y1": -89.9}]}"#;
    let tokens = scan(input).unwrap();

    // {, "points", :, [, {, then 4 * (key, :, number) with commas, }, ], }
    assert_eq!(tokens[0], Token::LeftBrace);
    assert_eq!(tokens[1], Token::String("points".to_string()));
    assert_eq!(tokens[3], Token::LeftBracket);
    assert_eq!(tokens[7], Token::Number(-31.5));
    assert_eq!(tokens[11], Token::Number(12.0));
    assert_eq!(tokens[15], Token::Number(100.25));
    assert_eq!(tokens[19], Token::Number(-89.9));
    assert_eq!(tokens.last(), Some(&Token::RightBrace));
}
