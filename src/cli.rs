use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Debug, Parser)]
#[command(name = "mirrorbox")]
#[command(about = "Traces a ray bouncing between mirrors inside a cube")]
pub struct Args {
    /// Log every reflection (same as --debug-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Scene description to read
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// Result file to write
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Print the result to standard output instead of writing the result file
    #[arg(long)]
    pub stdout: bool,
}

impl Args {
    /// Effective log level after applying --verbose.
    pub fn log_level(&self) -> LevelFilter {
        let requested = LevelFilter::from(self.debug_level.clone());
        if self.verbose {
            requested.max(LevelFilter::Debug)
        } else {
            requested
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["mirrorbox"]);
        assert_eq!(args.input, PathBuf::from("input.txt"));
        assert_eq!(args.output, PathBuf::from("output.txt"));
        assert!(!args.stdout);
        assert_eq!(args.log_level(), LevelFilter::Info);
    }

    #[test]
    fn verbose_raises_but_never_lowers_level() {
        let args = Args::parse_from(["mirrorbox", "-v"]);
        assert_eq!(args.log_level(), LevelFilter::Debug);
        let args = Args::parse_from(["mirrorbox", "-v", "--debug-level", "trace"]);
        assert_eq!(args.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn paths_and_stdout() {
        let args = Args::parse_from([
            "mirrorbox",
            "-i",
            "scene.txt",
            "--output",
            "out/result.txt",
            "--stdout",
        ]);
        assert_eq!(args.input, PathBuf::from("scene.txt"));
        assert_eq!(args.output, PathBuf::from("out/result.txt"));
        assert!(args.stdout);
    }
}
