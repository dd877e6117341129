use super::*;

use assert_matches::assert_matches;
use rstest::rstest;

use crate::stream::{FileStream, StringStream};
use crate::token::Span;

fn split(text: &str, delimiter: char) -> Vec<String> {
    let tokenizer = DelimitedTokenizer::try_from(delimiter).unwrap();
    let mut stream = StringStream::from(text);
    let tokens = tokenizer.tokens(&mut stream).collect::<Result<Vec<_>>>().unwrap();
    tokens
        .iter()
        .map(|token| token.as_str(&stream).unwrap().into_owned())
        .collect()
}

#[rstest]
#[case("a,b,c", &["a", "b", "c"])]
#[case("", &[""])]
#[case(",,", &["", "", ""])]
#[case(",a", &["", "a"])]
#[case("a,", &["a", ""])]
#[case("a,,b", &["a", "", "b"])]
#[case("single", &["single"])]
#[case("x y, z", &["x y", " z"])]
fn test_tokens(#[case] text: &str, #[case] expected: &[&str]) {
    assert_eq!(split(text, ','), expected);
}

#[rstest]
#[case("")]
#[case(",")]
#[case("1,2,3")]
#[case(",leading,trailing,")]
#[case("no delimiter at all")]
#[case("ünï,cödé")]
fn test_tokens_round_trip(#[case] text: &str) {
    assert_eq!(split(text, ',').join(","), text);
}

#[test]
fn test_custom_delimiter() {
    assert_eq!(split("a;b,c;d", ';'), ["a", "b,c", "d"]);
    assert_eq!(split("a\tb", '\t'), ["a", "b"]);
}

#[test]
fn test_next_token() {
    let tokenizer = DelimitedTokenizer::default();
    let mut stream = StringStream::from("ab,c");

    let token = tokenizer.next_token(&mut stream).unwrap();
    assert_eq!(token.span(), Span::new(0, 2));
    assert_eq!(stream.position(), 3);
    assert_eq!(stream.peek().unwrap(), Some(b'c'));

    let token = tokenizer.next_token(&mut stream).unwrap();
    assert_eq!(token.span(), Span::new(3, 4));
    assert_eq!(token.as_str(&stream).unwrap(), "c");
    assert_eq!(stream.peek().unwrap(), None);
}

#[test]
fn test_next_token_at_end_of_input() {
    let tokenizer = DelimitedTokenizer::default();
    let mut stream = StringStream::from("a");

    tokenizer.next_token(&mut stream).unwrap();
    for _ in 0..2 {
        let token = tokenizer.next_token(&mut stream).unwrap();
        assert!(token.is_empty());
        assert_eq!(token.span(), Span::new(1, 1));
    }
}

#[test]
fn test_peek_driven_loop() {
    let tokenizer = DelimitedTokenizer::default();
    let mut stream = StringStream::from("a,b,");
    let mut fields = Vec::new();
    while stream.peek().unwrap().is_some() {
        let token = tokenizer.next_token(&mut stream).unwrap();
        fields.push(token.as_str(&stream).unwrap().into_owned());
    }
    assert_eq!(fields, ["a", "b"]);
}

#[test]
fn test_tokens_over_file() {
    let tokenizer = DelimitedTokenizer::new(';'.try_into().unwrap());
    let mut tokens = tokenizer.tokens(FileStream::open("sample/fields.txt").unwrap());
    let mut fields = Vec::new();
    while let Some(token) = tokens.next() {
        fields.push(token.unwrap().as_str(tokens.stream()).unwrap().into_owned());
    }
    assert_eq!(fields, ["a", "b", "", "c"]);
    assert_eq!(tokens.into_inner().position(), 6);
}

#[test]
fn test_delimiter() {
    assert_eq!(DelimitedTokenizer::default().delimiter(), Symbol::COMMA);
    assert_eq!(DelimitedTokenizer::from(Symbol::DOT).delimiter(), Symbol::DOT);
    assert_eq!(DelimitedTokenizer::try_from('|').unwrap().delimiter(), Symbol::try_from('|').unwrap());
}

#[rstest]
#[case('§')]
#[case('€')]
fn test_delimiter_not_single_byte(#[case] delimiter: char) {
    let result = DelimitedTokenizer::try_from(delimiter);
    assert_matches!(result, Err(InvalidSymbolError { value }) if value == delimiter.to_string());
}
