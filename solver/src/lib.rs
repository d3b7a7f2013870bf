//! Command-line glue shared by the puzzle executables.

use std::env;
use std::path::{Path, PathBuf};

use clap::{ArgAction, CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

/// Arguments every puzzle executable takes.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the puzzle input
    pub input: Option<PathBuf>,
    /// Log more; repeat for even more. `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// The input path, or the usage line for `program` if none was given.
    pub fn input_or_usage(&self, program: &str) -> Result<&PathBuf, String> {
        self.input.as_ref().ok_or_else(|| {
            Self::command()
                .bin_name(program.to_string())
                .render_usage()
                .to_string()
        })
    }
}

/// The name this executable was invoked as, without its directory.
pub fn program_name() -> String {
    env::args_os()
        .next()
        .and_then(|arg0| Path::new(&arg0).file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Parse the command line, install logging, and return the input path.
///
/// Without an input path the usage line goes to standard output and the process exits with status 1.
pub fn start() -> PathBuf {
    let args = Args::parse();
    init_logging(args.log_level());

    match args.input_or_usage(&program_name()) {
        Ok(path) => path.clone(),
        Err(usage) => {
            println!("{}", usage);
            std::process::exit(1);
        }
    }
}

/// Log to standard error so the answers stay alone on standard output.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;

    #[test]
    fn takes_input_path() {
        let args = Args::try_parse_from(["grove", "input.txt"]).unwrap();
        assert_eq!(args.input_or_usage("grove").unwrap().to_str(), Some("input.txt"));
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn missing_path_yields_usage() {
        let args = Args::try_parse_from(["grove"]).unwrap();
        let usage = args.input_or_usage("grove").unwrap_err();
        assert!(usage.contains("Usage: grove"));
        assert!(usage.contains("[INPUT]"));
        assert!(!usage.contains("solver"));

        let usage = Args::try_parse_from(["signal"]).unwrap().input_or_usage("signal").unwrap_err();
        assert!(usage.contains("Usage: signal"));
    }

    #[test]
    fn verbosity_counts() {
        let args = Args::try_parse_from(["signal", "-vv", "input.txt"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.log_level(), "debug");

        let args = Args::try_parse_from(["signal", "-vvvv", "input.txt"]).unwrap();
        assert_eq!(args.log_level(), "trace");
    }
}
