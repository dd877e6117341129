// std imports
use std::io::Write;

// third-party imports
use serde::Serialize;

// local imports
use crate::{
    api::{self, Options},
    cli::{Command, OutputFormat},
    error::*,
};

// ---

/// Runs commands and writes their results in the chosen format.
pub struct App {
    options: Options,
    format: OutputFormat,
}

impl App {
    pub fn new(options: Options, format: OutputFormat) -> Self {
        Self { options, format }
    }

    pub fn run<W: Write>(&self, command: &Command, output: &mut W) -> Result<()> {
        log::debug!("running {:?} with {:?}", command, self.options);

        match command {
            Command::ReadFile { path } => self.read(output, |sink| api::read_file(path, sink)),
            Command::ReadString { text } => self.read(output, |sink| api::read_string(text, sink)),
            Command::Tokenize { text } => {
                let fields = api::tokenize_string(text, self.options.delimiter)?;
                self.emit(output, &fields, fields.iter())
            }
            Command::ParseNumbers { text } => {
                let values = api::parse_numbers(text, &self.options)?;
                self.emit(output, &values, values.iter())
            }
            Command::Parse { kind, text } => {
                let column = api::parse_column(text, *kind, &self.options)?;
                self.emit(output, &column, column.to_strings().iter())
            }
            Command::Guess { text } => {
                let spec = api::guess_column(text, &self.options)?;
                self.emit(output, &spec, [spec].iter())
            }
        }
    }

    fn read<W, F>(&self, output: &mut W, f: F) -> Result<()>
    where
        W: Write,
        F: FnOnce(&mut dyn Write) -> Result<usize>,
    {
        match self.format {
            OutputFormat::Plain => {
                f(output)?;
            }
            OutputFormat::Json => {
                let mut buf = Vec::new();
                f(&mut buf)?;
                json::to_writer(&mut *output, &String::from_utf8_lossy(&buf))?;
                writeln!(output)?;
            }
        }
        Ok(())
    }

    fn emit<W, T, I, D>(&self, output: &mut W, value: &T, lines: I) -> Result<()>
    where
        W: Write,
        T: Serialize + ?Sized,
        I: Iterator<Item = D>,
        D: std::fmt::Display,
    {
        match self.format {
            OutputFormat::Plain => {
                for line in lines {
                    writeln!(output, "{}", line)?;
                }
            }
            OutputFormat::Json => {
                json::to_writer(&mut *output, value)?;
                writeln!(output)?;
            }
        }
        Ok(())
    }
}
