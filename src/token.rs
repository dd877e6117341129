// std imports
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

// local imports
use crate::{
    collector::CollectorSpec,
    error::{Error, ParseError, Result},
    number,
    stream::Stream,
    types::Locale,
};

// ---

/// Half-open range of positions within the text of a stream.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Range<usize>> for Span {
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    #[inline]
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

// ---

/// A single delimited field.
///
/// A token does not own its text. It has to be resolved against the stream it was
/// produced from, which keeps the text alive and addressable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token {
    span: Span,
}

impl Token {
    #[inline]
    pub fn new(span: impl Into<Span>) -> Self {
        Self { span: span.into() }
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Returns the raw text of the token.
    pub fn as_bytes<'s, S>(&self, stream: &'s S) -> Result<&'s [u8]>
    where
        S: Stream + ?Sized,
    {
        stream.slice(self.span.into()).ok_or_else(|| Error::Span {
            span: self.span.into(),
            position: stream.position(),
        })
    }

    /// Returns the text of the token.
    pub fn as_str<'s, S>(&self, stream: &'s S) -> Result<Cow<'s, str>>
    where
        S: Stream + ?Sized,
    {
        Ok(String::from_utf8_lossy(self.as_bytes(stream)?))
    }

    /// Parses the token as a floating point number with `.` as the decimal mark.
    pub fn as_f64<S>(&self, stream: &S) -> Result<f64>
    where
        S: Stream + ?Sized,
    {
        self.to_f64(stream, &Locale::default())
    }

    /// Parses the token as a floating point number with the decimal mark of the given locale.
    pub fn to_f64<S>(&self, stream: &S, locale: &Locale) -> Result<f64>
    where
        S: Stream + ?Sized,
    {
        let text = self.as_bytes(stream)?;
        number::parse_f64(text, locale).ok_or_else(|| mismatch(text, CollectorSpec::Double))
    }
}

pub(crate) fn mismatch(text: &[u8], expected: CollectorSpec) -> Error {
    ParseError::new(expected, String::from_utf8_lossy(text)).into()
}
