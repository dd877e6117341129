// std imports
use std::fmt;
use std::str::FromStr;

// third-party imports
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

// local imports
use crate::error::{Error, InvalidSymbolError, Result};

// ---

/// A single-byte character, used for delimiters and locale marks.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(try_from = "String")]
pub struct Symbol(u8);

impl Symbol {
    pub const COMMA: Self = Self(b',');
    pub const DOT: Self = Self(b'.');

    #[inline]
    pub const fn byte(self) -> u8 {
        self.0
    }
}

impl TryFrom<char> for Symbol {
    type Error = InvalidSymbolError;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        if value.is_ascii() {
            Ok(Self(value as u8))
        } else {
            Err(InvalidSymbolError { value: value.into() })
        }
    }
}

impl TryFrom<String> for Symbol {
    type Error = InvalidSymbolError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Symbol {
    type Err = InvalidSymbolError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(InvalidSymbolError { value: s.into() }),
        }
    }
}

impl From<Symbol> for char {
    #[inline]
    fn from(symbol: Symbol) -> Self {
        symbol.0 as char
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 as char)
    }
}

// ---

/// Decimal and grouping marks used when converting numbers.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Locale {
    pub decimal_mark: Symbol,
    pub grouping_mark: Symbol,
}

impl Locale {
    pub fn new(decimal_mark: Symbol, grouping_mark: Symbol) -> Result<Self> {
        Self {
            decimal_mark,
            grouping_mark,
        }
        .validated()
    }

    pub fn validated(self) -> Result<Self> {
        if self.decimal_mark == self.grouping_mark {
            return Err(Error::AmbiguousLocale(self.decimal_mark.into()));
        }
        Ok(self)
    }

    /// Fails if the decimal mark equals the delimiter, since then it could not appear within a field.
    pub fn check_delimiter(&self, delimiter: Symbol) -> Result<()> {
        if self.decimal_mark == delimiter {
            return Err(Error::AmbiguousDelimiter(delimiter.into()));
        }
        Ok(())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            decimal_mark: Symbol::DOT,
            grouping_mark: Symbol::COMMA,
        }
    }
}

// ---

/// What a driver does with fields that do not fit into the collector.
#[derive(ValueEnum, AsRefStr, Display, Clone, Copy, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Overflow {
    /// Stop at capacity and drop the remaining fields with a warning.
    #[default]
    Truncate,
    /// Fail with a capacity error.
    Error,
    /// Grow the collector and keep every field.
    Grow,
}
