// std imports
use std::path::PathBuf;

// third-party imports
use clap::{Parser, Subcommand, ValueEnum};

// local imports
use crate::{
    api::Options,
    collector::CollectorSpec,
    error::*,
    settings::Settings,
    types::{Locale, Overflow, Symbol},
};

// ---

/// Delimited field reader and number parser.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, overrides FASTREAD_CONFIG environment variable.
    #[arg(long, global = true, overrides_with = "config")]
    pub config: Option<PathBuf>,

    /// Field delimiter, a single-byte character [default: ,].
    #[arg(short, long, global = true, env = "FASTREAD_DELIMITER", value_parser = parse_symbol, overrides_with = "delimiter")]
    pub delimiter: Option<Symbol>,

    /// Number of values to parse into [default: 100].
    #[arg(short, long, global = true, env = "FASTREAD_CAPACITY", overrides_with = "capacity")]
    pub capacity: Option<usize>,

    /// What to do with fields beyond the capacity [default: truncate].
    #[arg(long, global = true, env = "FASTREAD_OVERFLOW", overrides_with = "overflow")]
    #[arg(value_enum)]
    pub overflow: Option<Overflow>,

    /// Decimal mark used in numbers [default: .].
    #[arg(long, global = true, value_parser = parse_symbol, overrides_with = "decimal_mark")]
    pub decimal_mark: Option<Symbol>,

    /// Grouping mark used in numbers [default: ,].
    #[arg(long, global = true, value_parser = parse_symbol, overrides_with = "grouping_mark")]
    pub grouping_mark: Option<Symbol>,

    /// Output format.
    #[arg(short, long, global = true, default_value = "plain", overrides_with = "output")]
    #[arg(value_enum)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

impl Opt {
    /// Builds driver options from the settings, overridden by the command line.
    pub fn options(&self, settings: &Settings) -> Result<Options> {
        let locale = Locale {
            decimal_mark: self.decimal_mark.unwrap_or(settings.locale.decimal_mark),
            grouping_mark: self.grouping_mark.unwrap_or(settings.locale.grouping_mark),
        };

        Options {
            delimiter: self.delimiter.unwrap_or(settings.delimiter),
            capacity: self.capacity.unwrap_or(settings.capacity),
            overflow: self.overflow.unwrap_or(settings.overflow),
            locale,
        }
        .validated()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the contents of a file.
    ReadFile { path: PathBuf },

    /// Print the text back.
    ReadString { text: String },

    /// Print the fields of the text.
    Tokenize { text: String },

    /// Print the fields of the text converted to numbers.
    ParseNumbers { text: String },

    /// Print the fields of the text converted to values of the given kind.
    Parse {
        /// Kind of values.
        #[arg(short, long, default_value = "double")]
        #[arg(value_enum)]
        kind: CollectorSpec,

        text: String,
    },

    /// Print the most specific kind of values able to hold all fields of the text.
    Guess { text: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

fn parse_symbol(s: &str) -> std::result::Result<Symbol, InvalidSymbolError> {
    s.parse()
}
