//! Entry points reading, splitting and converting delimited text.
//!
//! Each function builds a stream over its input, walks it with a [`DelimitedTokenizer`]
//! and either materializes the fields or routes them through a collector.

// std imports
use std::io::Write;
use std::path::Path;

// local imports
use crate::{
    collector::{self, Collector, CollectorSpec, Column, DoubleCollector},
    config,
    error::{Error, Result},
    settings::Settings,
    stream::{self, FileStream, Stream, StringStream},
    tokenizer::DelimitedTokenizer,
    types::{Locale, Overflow, Symbol},
};

// ---

/// Options of the field driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    pub delimiter: Symbol,
    pub capacity: usize,
    pub overflow: Overflow,
    pub locale: Locale,
}

impl From<&Settings> for Options {
    fn from(settings: &Settings) -> Self {
        Self {
            delimiter: settings.delimiter,
            capacity: settings.capacity,
            overflow: settings.overflow,
            locale: settings.locale,
        }
    }
}

impl Options {
    /// Checks that the marks can be told apart from each other and from the delimiter.
    pub fn validated(self) -> Result<Self> {
        self.locale.validated()?.check_delimiter(self.delimiter)?;
        Ok(self)
    }
}

impl Default for Options {
    fn default() -> Self {
        config::default().into()
    }
}

// ---

/// Copies the contents of the file at `path` to the sink, returning the number of bytes copied.
pub fn read_file<W>(path: impl AsRef<Path>, sink: &mut W) -> Result<usize>
where
    W: Write + ?Sized,
{
    let mut stream = FileStream::open(path)?;
    Ok(stream::drain(&mut stream, sink)?)
}

/// Copies the text to the sink through a stream, returning the number of bytes copied.
pub fn read_string<W>(text: &str, sink: &mut W) -> Result<usize>
where
    W: Write + ?Sized,
{
    let mut stream = StringStream::from(text);
    Ok(stream::drain(&mut stream, sink)?)
}

/// Splits the text into fields.
pub fn tokenize_string(text: &str, delimiter: Symbol) -> Result<Vec<String>> {
    let mut stream = StringStream::from(text);
    let tokens = DelimitedTokenizer::new(delimiter)
        .tokens(&mut stream)
        .collect::<Result<Vec<_>>>()?;

    tokens
        .iter()
        .map(|token| Ok(token.as_str(&stream)?.into_owned()))
        .collect()
}

/// Converts the fields of the text into numbers.
///
/// The result holds `options.capacity` values, slots without a field are zero.
/// Fields are read until the text is exhausted, so a trailing delimiter does not
/// start another field. Fields past the capacity are handled according to `options.overflow`.
pub fn parse_numbers(text: &str, options: &Options) -> Result<Vec<f64>> {
    let mut collector = DoubleCollector::with_locale(options.locale);
    collect(text, &mut collector, options)?;
    Ok(collector.into_vec())
}

/// Converts the fields of the text into a column of the given kind.
pub fn parse_column(text: &str, spec: CollectorSpec, options: &Options) -> Result<Column> {
    let mut collector = collector::create(spec, &options.locale);
    collect(text, collector.as_mut(), options)?;
    Ok(collector.into_column())
}

/// Guesses the most specific kind of column able to hold all fields of the text.
pub fn guess_column(text: &str, options: &Options) -> Result<CollectorSpec> {
    let mut stream = StringStream::from(text);
    let tokens = DelimitedTokenizer::new(options.delimiter)
        .tokens(&mut stream)
        .collect::<Result<Vec<_>>>()?;

    let values = tokens
        .iter()
        .map(|token| token.as_bytes(&stream))
        .collect::<Result<Vec<_>>>()?;

    Ok(collector::guess(values, &options.locale))
}

// ---

fn collect(text: &str, collector: &mut dyn Collector, options: &Options) -> Result<usize> {
    let options = options.validated()?;
    let tokenizer = DelimitedTokenizer::new(options.delimiter);
    let mut stream = StringStream::from(text);
    collector.resize(options.capacity);

    let mut index = 0;
    while stream.peek()?.is_some() {
        if index >= collector.size() {
            match options.overflow {
                Overflow::Truncate => {
                    let mut dropped = 0;
                    while stream.peek()?.is_some() {
                        tokenizer.next_token(&mut stream)?;
                        dropped += 1;
                    }
                    log::warn!(
                        "input has more than {} fields, dropped {} remaining field(s)",
                        collector.size(),
                        dropped
                    );
                    break;
                }
                Overflow::Error => {
                    return Err(Error::Capacity {
                        capacity: collector.size(),
                    });
                }
                Overflow::Grow => {
                    collector.resize((collector.size() * 2).max(index + 1));
                }
            }
        }

        let token = tokenizer.next_token(&mut stream)?;
        collector.set_value(index, token, &stream)?;
        index += 1;
    }

    if collector.size() > options.capacity.max(index) {
        collector.resize(options.capacity.max(index));
    }

    Ok(index)
}

#[cfg(test)]
mod tests;
