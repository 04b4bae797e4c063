//! booktrack - search and extend a colon-delimited library catalog
//!
//! Usage: `booktrack <catalogFile.txt> <operation>`

use anyhow::{Context, Result};
use booktrack::config::DEFAULT_FAREWELL;
use booktrack::report::{Farewell, RunStats};
use booktrack::{Tracker, TrackerConfig};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Log levels
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "booktrack",
    about = "Search a book catalog by ISBN or title keyword, or add a Title:Author:ISBN:Copies record",
    version
)]
struct Cli {
    /// Catalog file (must end in .txt), then the operation: a 13-digit ISBN,
    /// a Title:Author:ISBN:Copies record, or a title keyword
    #[clap(value_name = "CATALOG OPERATION", allow_hyphen_values = true)]
    args: Vec<String>,

    /// Diagnostic log level (written to stderr; RUST_LOG takes precedence)
    #[clap(long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Write the error log here instead of errors.log beside the catalog
    #[clap(long, value_name = "PATH")]
    error_log: Option<PathBuf>,
}

fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr) // stdout carries the report
        .init();
}

fn main() -> Result<ExitCode> {
    // Armed before anything else so it is dropped last, on every path.
    let _farewell = Farewell::new(io::stdout(), DEFAULT_FAREWELL);

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout, usage errors to stderr.
            e.print().context("failed to print usage")?;
            let mut stdout = io::stdout().lock();
            RunStats::default()
                .write_summary(&mut stdout)
                .context("failed to write report to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
            return Ok(ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2)));
        },
    };
    initialize_tracing(cli.log_level);

    let mut config = TrackerConfig::default();
    if let Some(path) = cli.error_log {
        config = config.with_error_log_path(path);
    }

    let mut tracker = Tracker::new(config);
    let mut stdout = io::stdout().lock();
    let summary = tracker
        .run(&cli.args, &mut stdout)
        .context("failed to write report to stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    Ok(if summary.fatal.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
