// std imports
use std::borrow::Cow;
use std::io;
use std::ops::Range;

// local imports
use super::Stream;

// ---

/// A stream over an immutable in-memory text buffer, owned or borrowed.
#[derive(Debug, Clone)]
pub struct StringStream<'a> {
    data: Cow<'a, [u8]>,
    pos: usize,
}

impl<'a> StringStream<'a> {
    /// Returns a new stream over the given text.
    pub fn new(data: impl Into<Cow<'a, [u8]>>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }

    /// Returns the whole underlying text.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn current(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }
}

impl<'a> From<&'a str> for StringStream<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl From<String> for StringStream<'static> {
    #[inline]
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

impl<'a> Stream for StringStream<'a> {
    #[inline]
    fn peek(&mut self) -> io::Result<Option<u8>> {
        Ok(self.current())
    }

    #[inline]
    fn get(&mut self) -> io::Result<Option<u8>> {
        let c = self.current();
        if c.is_some() {
            self.pos += 1;
        }
        Ok(c)
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    fn slice(&self, range: Range<usize>) -> Option<&[u8]> {
        self.data.get(range)
    }
}
