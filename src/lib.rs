// public modules
pub mod api;
pub mod app;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod number;
pub mod settings;
pub mod stream;
pub mod token;
pub mod tokenizer;
pub mod types;

// public uses
pub use api::{Options, guess_column, parse_column, parse_numbers, read_file, read_string, tokenize_string};
pub use app::App;
pub use collector::{Collector, CollectorSpec, Column, DoubleCollector};
pub use settings::Settings;
pub use stream::{FileStream, Stream, StringStream};
pub use token::{Span, Token};
pub use tokenizer::{DelimitedTokenizer, Tokens};
pub use types::{Locale, Overflow, Symbol};
