// std imports
use std::borrow::Cow;

// third-party imports
use logos::Logos;

// local imports
use crate::types::Locale;

// ---

/// Returns true if the value is a single numeric literal with `.` as the decimal mark.
pub fn looks_like_number(value: &[u8]) -> bool {
    if value.is_empty() {
        return false;
    }

    let mut lexer = Token::lexer(value);
    matches!(lexer.next(), Some(Ok(Token::Number | Token::Integer))) && lexer.next().is_none()
}

/// Returns true if the value is an optionally signed sequence of digits.
pub fn looks_like_integer(value: &[u8]) -> bool {
    if value.is_empty() {
        return false;
    }

    let mut lexer = Token::lexer(value);
    matches!(lexer.next(), Some(Ok(Token::Integer))) && lexer.next().is_none()
}

/// Parses a floating point number honoring the locale decimal mark.
pub fn parse_f64(value: &[u8], locale: &Locale) -> Option<f64> {
    parse_normalized(normalize(value, locale, false)?)
}

/// Parses a floating point number honoring the locale decimal mark and skipping grouping marks.
pub fn parse_grouped_f64(value: &[u8], locale: &Locale) -> Option<f64> {
    parse_normalized(normalize(value, locale, true)?)
}

/// Parses a 64-bit signed integer.
pub fn parse_i64(value: &[u8]) -> Option<i64> {
    if !looks_like_integer(value) {
        return None;
    }
    std::str::from_utf8(value).ok()?.parse().ok()
}

/// Parses a boolean in any of the accepted spellings.
pub fn parse_bool(value: &[u8]) -> Option<bool> {
    match value {
        b"T" | b"TRUE" | b"True" | b"true" => Some(true),
        b"F" | b"FALSE" | b"False" | b"false" => Some(false),
        _ => None,
    }
}

// ---

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(utf8 = false)]
enum Token {
    #[regex(r"[+-]?\d+", priority = 4)]
    Integer,

    #[regex(r"[+-]?(?:\d+\.\d*|\.\d+|\d+)(?:[eE][+-]?\d+)?", priority = 3)]
    Number,
}

fn parse_normalized(value: Cow<'_, [u8]>) -> Option<f64> {
    let mut lexer = Token::lexer(&value);
    match (lexer.next(), lexer.next()) {
        (Some(Ok(Token::Number | Token::Integer)), None) => std::str::from_utf8(&value).ok()?.parse().ok(),
        _ => None,
    }
}

// Rewrites the value to use `.` as the decimal mark, optionally dropping grouping marks.
fn normalize<'a>(value: &'a [u8], locale: &Locale, grouping: bool) -> Option<Cow<'a, [u8]>> {
    let decimal = locale.decimal_mark.byte();
    let group = locale.grouping_mark.byte();

    if decimal == b'.' && !(grouping && value.contains(&group)) {
        return Some(Cow::Borrowed(value));
    }

    let mut result = Vec::with_capacity(value.len());
    for &b in value {
        match b {
            _ if grouping && b == group => continue,
            _ if b == decimal => result.push(b'.'),
            b'.' => return None,
            _ => result.push(b),
        }
    }

    Some(Cow::Owned(result))
}
