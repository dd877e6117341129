// std imports
use std::error::Error as _;
use std::io::{self, Write};
use std::ops::Range;

// third-party imports
use config::ConfigError;
use thiserror::Error;

// local imports
use crate::collector::CollectorSpec;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("index {index} is out of range for collector of size {size}")]
    OutOfRange { index: usize, size: usize },
    #[error("input has more than {capacity} fields")]
    Capacity { capacity: usize },
    #[error("span {}..{} cannot be resolved against a stream at position {position}", .span.start, .span.end)]
    Span { span: Range<usize>, position: usize },
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    InvalidSymbol(#[from] InvalidSymbolError),
    #[error("decimal mark and grouping mark must differ, both are {0:?}")]
    AmbiguousLocale(char),
    #[error("decimal mark must differ from the delimiter, both are {0:?}")]
    AmbiguousDelimiter(char),
    #[error("failed to write output: {0}")]
    Json(#[from] json::Error),
}

impl Error {
    /// Writes the error followed by its chain of causes to stderr.
    pub fn log(&self) {
        self.log_to(&mut io::stderr()).ok();
    }

    /// Writes the error followed by its chain of causes to the given writer.
    pub fn log_to<W: Write + ?Sized>(&self, target: &mut W) -> io::Result<()> {
        writeln!(target, "error: {}", self)?;
        let mut source = self.source();
        while let Some(cause) = source {
            let message = cause.to_string();
            if !self.to_string().ends_with(&message) {
                writeln!(target, "  caused by: {}", message)?;
            }
            source = cause.source();
        }
        Ok(())
    }
}

/// ParseError is an error which may occur when a token is converted to a typed value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected}, but got {actual:?}")]
pub struct ParseError {
    pub expected: CollectorSpec,
    pub actual: String,
}

impl ParseError {
    pub fn new(expected: CollectorSpec, actual: impl Into<String>) -> Self {
        Self {
            expected,
            actual: actual.into(),
        }
    }
}

/// InvalidSymbolError is an error which may occur when a delimiter or a mark is not a single-byte character.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid character {value:?}, use a single-byte character")]
pub struct InvalidSymbolError {
    pub value: String,
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
