extern crate env_logger;
#[macro_use] extern crate log;
#[macro_use] extern crate clap;

#[cfg(test)] extern crate rand;
#[cfg(test)] #[macro_use] extern crate pretty_assertions;

use std::{env, fmt, io, process};

use clap::Arg;
use log::LevelFilter;

mod common;
mod input;
mod analysis;
mod report;

use analysis::DegeneratePoints;
use input::InputError;

fn main() {
    let matches = app_from_crate!()
        .arg(Arg::with_name("verbose")
             .short("v")
             .long("verbose")
             .multiple(true)
             .help("Raises diagnostics level on stderr, may be repeated"))
        .get_matches();

    init_logger(matches.occurrences_of("verbose"));
    match run() {
        Ok(()) =>
            info!("line analyzed"),
        Err(Error::WriteOutput(e)) => {
            error!("fatal error: {:?}", e);
            process::exit(1);
        },
        Err(e) => {
            info!("rejected: {:?}", e);
            let stdout = io::stdout();
            if let Err(write_error) = report::write_failure(&mut stdout.lock(), &e) {
                error!("fatal error: {:?}", write_error);
            }
            process::exit(1);
        },
    }
}

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter(None, level);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse(&filters);
    }
    builder.init();
}

#[derive(Debug)]
enum Error {
    Input(InputError),
    DegeneratePoints(DegeneratePoints),
    WriteOutput(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::Input(ref e) =>
                write!(f, "{}", e),
            &Error::DegeneratePoints(ref e) =>
                write!(f, "{}", e),
            &Error::WriteOutput(ref e) =>
                write!(f, "Error writing output: {}", e),
        }
    }
}

fn run() -> Result<(), Error> {
    let stdin = io::stdin();
    let segment = input::read_segment(stdin.lock())
        .map_err(Error::Input)?;
    let line = analysis::analyze(&segment)
        .map_err(Error::DegeneratePoints)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &segment, &line)
        .map_err(Error::WriteOutput)
}
