//! Single-pass character streams over files and in-memory text.
//!
//! A [`Stream`] yields bytes one at a time through [`Stream::peek`] and [`Stream::get`],
//! returning `None` once the source is exhausted. The end of input is permanent.
//! Every stream also keeps the text it has already produced addressable through
//! [`Stream::slice`], so that tokens can be resolved after they have been scanned.

// std imports
use std::io;
use std::ops::Range;

// local imports
mod file;
mod string;

// re-exports
pub use file::FileStream;
pub use string::StringStream;

// ---

/// A source of single-byte characters with a monotonic read cursor.
pub trait Stream {
    /// Returns the character at the cursor without advancing it, or `None` at the end of input.
    fn peek(&mut self) -> io::Result<Option<u8>>;

    /// Returns the character at the cursor and advances it, or `None` at the end of input.
    fn get(&mut self) -> io::Result<Option<u8>>;

    /// Returns the offset of the cursor from the start of the source.
    fn position(&self) -> usize;

    /// Returns the already addressable text in the given range.
    fn slice(&self, range: Range<usize>) -> Option<&[u8]>;
}

impl<S: Stream + ?Sized> Stream for &mut S {
    #[inline]
    fn peek(&mut self) -> io::Result<Option<u8>> {
        (**self).peek()
    }

    #[inline]
    fn get(&mut self) -> io::Result<Option<u8>> {
        (**self).get()
    }

    #[inline]
    fn position(&self) -> usize {
        (**self).position()
    }

    #[inline]
    fn slice(&self, range: Range<usize>) -> Option<&[u8]> {
        (**self).slice(range)
    }
}

impl<S: Stream + ?Sized> Stream for Box<S> {
    #[inline]
    fn peek(&mut self) -> io::Result<Option<u8>> {
        (**self).peek()
    }

    #[inline]
    fn get(&mut self) -> io::Result<Option<u8>> {
        (**self).get()
    }

    #[inline]
    fn position(&self) -> usize {
        (**self).position()
    }

    #[inline]
    fn slice(&self, range: Range<usize>) -> Option<&[u8]> {
        (**self).slice(range)
    }
}

// ---

/// Drains the stream character by character into the sink.
pub fn drain<S, W>(stream: &mut S, sink: &mut W) -> io::Result<usize>
where
    S: Stream + ?Sized,
    W: io::Write + ?Sized,
{
    let mut n = 0;
    while let Some(c) = stream.get()? {
        sink.write_all(&[c])?;
        n += 1;
    }
    Ok(n)
}

#[cfg(test)]
mod tests;
