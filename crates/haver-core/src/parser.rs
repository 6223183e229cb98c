//! Recursive-descent parser — builds a value tree from the token sequence.
//!
//! Tokens are consumed left to right with one token of lookahead; recursion
//! depth equals the JSON nesting depth. Failure aborts the whole parse with
//! no partial tree. The top-level value must be an object, and an empty
//! token sequence yields an empty object.
//!
//! Two lenient behaviors are deliberate: a comma directly followed by a
//! closing delimiter ends the container, and tokens past the root value are
//! ignored.

use std::collections::HashMap;

use crate::error::{HaverError, ParseError};
use crate::scanner::{self, Token};
use crate::value::Value;

/// Parse a complete token sequence into the root value.
///
/// # Errors
/// Returns `ParseError::TopLevelMustBeObject` if the root is any other
/// shape, or the structural error at the first malformed position.
pub fn parse(tokens: &[Token]) -> Result<Value, ParseError> {
    if tokens.is_empty() {
        return Ok(Value::Object(HashMap::new()));
    }
    let (_, value) = parse_value(tokens, 0)?;
    match value {
        Value::Object(_) => Ok(value),
        _ => Err(ParseError::TopLevelMustBeObject),
    }
}

/// Scan and parse a raw byte buffer in one call.
pub fn parse_bytes(input: &[u8]) -> Result<Value, HaverError> {
    let tokens = scanner::scan(input)?;
    Ok(parse(&tokens)?)
}

/// Parse one value starting at `pos`, returning the first unconsumed
/// position alongside the value.
fn parse_value(tokens: &[Token], pos: usize) -> Result<(usize, Value), ParseError> {
    let token = tokens.get(pos).ok_or(ParseError::UnexpectedEndOfInput)?;
    match token {
        Token::String(s) => Ok((pos + 1, Value::String(s.clone()))),
        Token::Number(n) => Ok((pos + 1, Value::Number(*n))),
        Token::Bool(b) => Ok((pos + 1, Value::Bool(*b))),
        Token::Null => Ok((pos + 1, Value::Null)),
        Token::LeftBracket => parse_array(tokens, pos + 1),
        Token::LeftBrace => parse_object(tokens, pos + 1),
        _ => Err(ParseError::UnexpectedToken { offset: pos }),
    }
}

/// Elements separated by commas until `]`. `pos` is the position just past
/// the opening bracket.
fn parse_array(tokens: &[Token], mut pos: usize) -> Result<(usize, Value), ParseError> {
    let mut elements = Vec::new();

    while !matches!(tokens.get(pos), Some(Token::RightBracket) | None) {
        let (next, value) = parse_value(tokens, pos)?;
        elements.push(value);
        pos = next;

        match tokens.get(pos) {
            Some(Token::Comma) => pos += 1,
            Some(Token::RightBracket) | None => {}
            Some(_) => return Err(ParseError::ExpectedArrayDelimiter { offset: pos }),
        }
    }

    match tokens.get(pos) {
        Some(Token::RightBracket) => Ok((pos + 1, Value::Array(elements))),
        _ => Err(ParseError::ExpectedArrayClose { offset: pos }),
    }
}

/// `key : value` pairs separated by commas until `}`. Keys must be string
/// tokens; duplicate keys overwrite the earlier value.
fn parse_object(tokens: &[Token], mut pos: usize) -> Result<(usize, Value), ParseError> {
    let mut map = HashMap::new();

    while !matches!(tokens.get(pos), Some(Token::RightBrace) | None) {
        let key = match tokens.get(pos) {
            Some(Token::String(s)) => s.clone(),
            _ => return Err(ParseError::ExpectedObjectKey { offset: pos }),
        };
        pos += 1;

        match tokens.get(pos) {
            Some(Token::Colon) => pos += 1,
            _ => return Err(ParseError::ExpectedColon { offset: pos }),
        }

        let (next, value) = parse_value(tokens, pos)?;
        map.insert(key, value);
        pos = next;

        match tokens.get(pos) {
            Some(Token::Comma) => pos += 1,
            Some(Token::RightBrace) | None => {}
            Some(_) => return Err(ParseError::ExpectedObjectDelimiter { offset: pos }),
        }
    }

    match tokens.get(pos) {
        Some(Token::RightBrace) => Ok((pos + 1, Value::Object(map))),
        _ => Err(ParseError::ExpectedObjectClose { offset: pos }),
    }
}
