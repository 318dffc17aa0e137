//! CLI definitions and entry point

use std::io;

use anyhow::Context;
use clap::Parser;
use log::debug;

use cold::Scanner;
use cold::output::{CountResult, OutputMode};

/// cold - count sub-zero temperature readings
#[derive(Parser, Debug)]
#[command(
    name = "cold",
    version,
    about = "Count sub-zero temperature readings",
    long_about = "Count sub-zero temperature readings.\n\n\
                  Reads a count N followed by N whitespace-separated integers from\n\
                  standard input and prints how many of them are below zero."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    debug!("cold v{}, output mode {output_mode:?}", cold::VERSION);

    let mut scan = Scanner::new(io::stdin().lock());
    let tally = cold::count_from(&mut scan).context("failed to read temperatures from stdin")?;

    CountResult::from(tally).render(output_mode);
    Ok(())
}
