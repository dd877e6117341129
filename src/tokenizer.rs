// local imports
use crate::{
    error::{InvalidSymbolError, Result},
    stream::Stream,
    token::Token,
    types::Symbol,
};

// ---

/// Splits a stream into fields separated by a single-byte delimiter.
///
/// Every occurrence of the delimiter terminates the current field, there is no quoting or escaping.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DelimitedTokenizer {
    delimiter: Symbol,
}

impl DelimitedTokenizer {
    #[inline]
    pub fn new(delimiter: Symbol) -> Self {
        Self { delimiter }
    }

    #[inline]
    pub fn delimiter(&self) -> Symbol {
        self.delimiter
    }

    /// Scans the next field starting at the cursor of the stream.
    ///
    /// The terminating delimiter is consumed but is not a part of the token.
    /// At the end of input the result is an empty token.
    pub fn next_token<S>(&self, stream: &mut S) -> Result<Token>
    where
        S: Stream + ?Sized,
    {
        self.scan(stream).map(|(token, _)| token)
    }

    /// Returns an iterator over all fields remaining in the stream.
    ///
    /// The first field is always produced, even for an exhausted stream, and a trailing
    /// delimiter is followed by one more empty field. So joining the fields with the
    /// delimiter reproduces the consumed text.
    pub fn tokens<S>(&self, stream: S) -> Tokens<S>
    where
        S: Stream,
    {
        Tokens {
            tokenizer: *self,
            stream,
            done: false,
        }
    }

    fn scan<S>(&self, stream: &mut S) -> Result<(Token, bool)>
    where
        S: Stream + ?Sized,
    {
        let delimiter = self.delimiter.byte();
        let start = stream.position();
        let mut end = start;

        while let Some(c) = stream.get()? {
            if c == delimiter {
                return Ok((Token::new(start..end), true));
            }
            end += 1;
        }

        Ok((Token::new(start..end), false))
    }
}

impl Default for DelimitedTokenizer {
    #[inline]
    fn default() -> Self {
        Self::new(Symbol::COMMA)
    }
}

impl From<Symbol> for DelimitedTokenizer {
    #[inline]
    fn from(delimiter: Symbol) -> Self {
        Self::new(delimiter)
    }
}

impl TryFrom<char> for DelimitedTokenizer {
    type Error = InvalidSymbolError;

    #[inline]
    fn try_from(delimiter: char) -> std::result::Result<Self, Self::Error> {
        Symbol::try_from(delimiter).map(Self::new)
    }
}

// ---

/// Iterates over the fields of a stream.
pub struct Tokens<S> {
    tokenizer: DelimitedTokenizer,
    stream: S,
    done: bool,
}

impl<S: Stream> Tokens<S> {
    /// Returns the stream, so that the produced tokens can be resolved.
    #[inline]
    pub fn stream(&self) -> &S {
        &self.stream
    }

    /// Returns the stream back.
    #[inline]
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: Stream> Iterator for Tokens<S> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.tokenizer.scan(&mut self.stream) {
            Ok((token, delimited)) => {
                self.done = !delimited;
                Some(Ok(token))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests;
