use super::*;

use assert_matches::assert_matches;
use rstest::rstest;
use std::path::Path;

fn collect<S: Stream>(mut stream: S) -> Vec<u8> {
    let mut buf = Vec::new();
    drain(&mut stream, &mut buf).unwrap();
    buf
}

#[test]
fn test_string_stream_get() {
    let mut stream = StringStream::from("ab");
    assert_eq!(stream.position(), 0);
    assert_eq!(stream.get().unwrap(), Some(b'a'));
    assert_eq!(stream.get().unwrap(), Some(b'b'));
    assert_eq!(stream.position(), 2);
    assert_eq!(stream.get().unwrap(), None);
    assert_eq!(stream.position(), 2);
}

#[rstest]
#[case("")]
#[case("x")]
#[case("a,b,c")]
fn test_end_of_input_is_permanent(#[case] text: &str) {
    let mut stream = StringStream::from(text);
    while stream.get().unwrap().is_some() {}
    for _ in 0..3 {
        assert_eq!(stream.peek().unwrap(), None);
        assert_eq!(stream.get().unwrap(), None);
        assert_eq!(stream.position(), text.len());
    }
}

#[test]
fn test_peek_does_not_advance() {
    let mut stream = StringStream::from("xy");
    assert_eq!(stream.peek().unwrap(), Some(b'x'));
    assert_eq!(stream.peek().unwrap(), Some(b'x'));
    assert_eq!(stream.position(), 0);
    assert_eq!(stream.get().unwrap(), Some(b'x'));
    assert_eq!(stream.peek().unwrap(), Some(b'y'));
}

#[test]
fn test_string_stream_owned() {
    let stream = StringStream::from(String::from("owned"));
    assert_eq!(stream.data(), b"owned");
    assert_eq!(collect(stream), b"owned");
}

#[test]
fn test_string_stream_slice() {
    let stream = StringStream::from("hello");
    assert_eq!(stream.slice(1..3), Some(&b"el"[..]));
    assert_eq!(stream.slice(5..5), Some(&b""[..]));
    assert_eq!(stream.slice(3..9), None);
}

#[test]
fn test_file_stream() {
    let mut stream = FileStream::open("sample/numbers.csv").unwrap();
    assert_eq!(stream.path(), Path::new("sample/numbers.csv"));
    assert_eq!(stream.peek().unwrap(), Some(b'1'));
    assert_eq!(stream.peek().unwrap(), Some(b'1'));
    assert_eq!(stream.get().unwrap(), Some(b'1'));
    assert_eq!(stream.slice(0..1), Some(&b"1"[..]));
    assert_eq!(collect(&mut stream), b",2.5,-3");
    assert_eq!(stream.get().unwrap(), None);
    assert_eq!(stream.peek().unwrap(), None);
    assert_eq!(stream.slice(0..8), Some(&b"1,2.5,-3"[..]));
}

#[test]
fn test_file_stream_matches_string_stream() {
    let text = std::fs::read("sample/fields.txt").unwrap();
    let from_file = collect(FileStream::open("sample/fields.txt").unwrap());
    let from_string = collect(StringStream::new(text.as_slice()));
    assert_eq!(from_file, from_string);
}

#[test]
fn test_file_stream_missing() {
    let result = FileStream::open("sample/missing.csv");
    assert_matches!(result, Err(e) if e.kind() == io::ErrorKind::NotFound);
}

#[test]
fn test_file_stream_directory() {
    let result = FileStream::open("sample");
    assert_matches!(result, Err(e) if e.kind() == io::ErrorKind::InvalidInput);
}

#[test]
fn test_boxed_stream() {
    let stream: Box<dyn Stream> = Box::new(StringStream::from("boxed"));
    assert_eq!(collect(stream), b"boxed");
}
