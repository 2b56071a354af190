use anyhow::{Context, Result};
use clap::Parser;
use lingua_cli::cli::Args;
use lingua_cli::config::{iso_code, supported_languages};
use lingua_cli::{select_input, Classifier};
use std::io::{self, BufWriter, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `LINGUA_CLI_LOG=debug`
const LOG_ENV: &str = "LINGUA_CLI_LOG";

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only classification results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    if args.list {
        return list_languages();
    }

    // Every language code is checked before any input is read
    let config = args.detector_config()?;
    let detector = config.build_detector();
    let options = args.classify_options();

    let stdin = io::stdin().lock();
    let units = select_input(&args.text, args.per_line, stdin).context("error reading stdin")?;

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    match Classifier::new(&detector, &options).run(units, &mut out) {
        // Downstream stopped reading; nothing left to report
        Err(e) if e.is_broken_pipe() => {
            debug!("Output closed early");
            Ok(())
        }
        result => {
            result.context("failed to classify input")?;
            Ok(())
        }
    }
}

fn list_languages() -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for language in supported_languages() {
        writeln!(out, "{} - {}", iso_code(language), language)?;
    }
    out.flush()?;
    Ok(())
}
