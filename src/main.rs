// std imports
use std::io::{ErrorKind, stdout};
use std::process;

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use fastread::{App, cli, config, error::*};

const FASTREAD_DEBUG_LOG: &str = "FASTREAD_DEBUG_LOG";
const FASTREAD_DEBUG_LOG_STYLE: &str = "FASTREAD_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(FASTREAD_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(FASTREAD_DEBUG_LOG).write_style(FASTREAD_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Warn)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<()> {
    bootstrap();

    let opt = cli::Opt::parse();
    let settings = config::load(opt.config.as_deref())?;
    let options = opt.options(&settings)?;

    let app = App::new(options, opt.output);
    app.run(&opt.command, &mut stdout().lock())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(Error::Io(ref e)) if e.kind() == ErrorKind::BrokenPipe => {}
        Err(err) => {
            err.log();
            process::exit(1);
        }
    }
}
