use super::*;

use assert_matches::assert_matches;
use rstest::rstest;

fn options(capacity: usize, overflow: Overflow) -> Options {
    Options {
        capacity,
        overflow,
        ..Options::default()
    }
}

#[test]
fn test_default_options() {
    let options = Options::default();
    assert_eq!(options.delimiter, Symbol::COMMA);
    assert_eq!(options.capacity, 100);
    assert_eq!(options.overflow, Overflow::Truncate);
}

#[test]
fn test_read_file() {
    let mut buf = Vec::new();
    let n = read_file("sample/numbers.csv", &mut buf).unwrap();
    assert_eq!(n, 8);
    assert_eq!(buf, b"1,2.5,-3");
}

#[test]
fn test_read_file_missing() {
    let mut buf = Vec::new();
    let result = read_file("sample/missing.csv", &mut buf);
    assert_matches!(result, Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound);
    assert!(buf.is_empty());
}

#[rstest]
#[case("")]
#[case("hello, world")]
#[case("ünïcödé")]
fn test_read_string(#[case] text: &str) {
    let mut buf = Vec::new();
    assert_eq!(read_string(text, &mut buf).unwrap(), text.len());
    assert_eq!(buf, text.as_bytes());
}

#[rstest]
#[case("a,b,c", &["a", "b", "c"])]
#[case("", &[""])]
#[case(",,", &["", "", ""])]
fn test_tokenize_string(#[case] text: &str, #[case] expected: &[&str]) {
    assert_eq!(tokenize_string(text, Symbol::COMMA).unwrap(), expected);
}

#[test]
fn test_parse_numbers() {
    let values = parse_numbers("1,2,3", &Options::default()).unwrap();
    assert_eq!(values.len(), 100);
    assert_eq!(&values[..3], &[1.0, 2.0, 3.0]);
    assert!(values[3..].iter().all(|&v| v == 0.0));
}

#[rstest]
#[case("1,x,3", "x")]
#[case("1,,3", "")]
#[case(",1", "")]
fn test_parse_numbers_invalid(#[case] text: &str, #[case] field: &str) {
    let result = parse_numbers(text, &Options::default());
    assert_matches!(result, Err(Error::Parse(e)) if e.actual == field && e.expected == CollectorSpec::Double);
}

#[rstest]
#[case("", &[])]
#[case("1,2,", &[1.0, 2.0])]
#[case("7", &[7.0])]
fn test_parse_numbers_until_exhausted(#[case] text: &str, #[case] expected: &[f64]) {
    let values = parse_numbers(text, &Options::default()).unwrap();
    assert_eq!(values.len(), 100);
    assert_eq!(&values[..expected.len()], expected);
    assert!(values[expected.len()..].iter().all(|&v| v == 0.0));
}

#[test]
fn test_parse_numbers_trailing_delimiter_at_capacity() {
    let values = parse_numbers("1,2,3,", &options(3, Overflow::Error)).unwrap();
    assert_eq!(values, [1.0, 2.0, 3.0]);
}

#[test]
fn test_parse_numbers_decimal_mark_is_delimiter() {
    let options = Options {
        locale: Locale::new(Symbol::COMMA, Symbol::DOT).unwrap(),
        ..Options::default()
    };
    assert_matches!(parse_numbers("1,5", &options), Err(Error::AmbiguousDelimiter(',')));
    assert_matches!(options.validated(), Err(Error::AmbiguousDelimiter(',')));
}

#[test]
fn test_parse_numbers_truncate() {
    let values = parse_numbers("1,2,3,4,5", &options(3, Overflow::Truncate)).unwrap();
    assert_eq!(values, [1.0, 2.0, 3.0]);
}

#[test]
fn test_parse_numbers_truncate_ignores_dropped_fields() {
    let values = parse_numbers("1,2,x", &options(2, Overflow::Truncate)).unwrap();
    assert_eq!(values, [1.0, 2.0]);
}

#[test]
fn test_parse_numbers_error() {
    let result = parse_numbers("1,2,3,4", &options(3, Overflow::Error));
    assert_matches!(result, Err(Error::Capacity { capacity: 3 }));
    assert_eq!(parse_numbers("1,2,3", &options(3, Overflow::Error)).unwrap(), [1.0, 2.0, 3.0]);
}

#[rstest]
#[case(3, "1,2,3,4,5,6,7", 7)]
#[case(0, "1,2", 2)]
#[case(5, "1,2", 5)]
fn test_parse_numbers_grow(#[case] capacity: usize, #[case] text: &str, #[case] len: usize) {
    let values = parse_numbers(text, &options(capacity, Overflow::Grow)).unwrap();
    assert_eq!(values.len(), len);
    assert_eq!(values[0], 1.0);
    assert_eq!(values[1], 2.0);
}

#[test]
fn test_parse_numbers_locale() {
    let options = Options {
        delimiter: Symbol::try_from(';').unwrap(),
        capacity: 2,
        locale: Locale::new(Symbol::COMMA, Symbol::DOT).unwrap(),
        ..Options::default()
    };
    assert_eq!(parse_numbers("1,5;-2", &options).unwrap(), [1.5, -2.0]);
}

#[rstest]
#[case(CollectorSpec::Integer, "1,2", Column::Integer(vec![1, 2]))]
#[case(CollectorSpec::Logical, "T,F", Column::Logical(vec![true, false]))]
#[case(CollectorSpec::Character, "a,b", Column::Character(vec!["a".into(), "b".into()]))]
#[case(CollectorSpec::Skip, "a,b", Column::Skip)]
fn test_parse_column(#[case] spec: CollectorSpec, #[case] text: &str, #[case] expected: Column) {
    assert_eq!(parse_column(text, spec, &options(2, Overflow::Error)).unwrap(), expected);
}

#[test]
fn test_parse_column_numeric() {
    let options = Options {
        delimiter: Symbol::try_from(';').unwrap(),
        ..options(2, Overflow::Error)
    };
    let column = parse_column("1,234.5;7", CollectorSpec::Numeric, &options).unwrap();
    assert_eq!(column, Column::Double(vec![1234.5, 7.0]));
}

#[rstest]
#[case("T,,false", CollectorSpec::Logical)]
#[case("1,2,3", CollectorSpec::Integer)]
#[case("1,2.5", CollectorSpec::Double)]
#[case("a,1", CollectorSpec::Character)]
#[case("", CollectorSpec::Logical)]
fn test_guess_column(#[case] text: &str, #[case] expected: CollectorSpec) {
    assert_eq!(guess_column(text, &Options::default()).unwrap(), expected);
}
