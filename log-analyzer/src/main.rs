mod analytics;
mod error;
mod ingest;
mod invariants;
mod logging;
mod models;
mod report;
mod worker;

use analytics::analyze;
use clap::Parser;
use error::AppError;
use ingest::fetch;
use report::write_report;
use std::{
    io::{self, Write},
    process::ExitCode,
};
use tracing::debug;
use worker::rows;

#[derive(Parser, Debug)]
#[command(version, about = "Summarise a CSV web access log fetched over HTTP", long_about = None)]
struct Args {
    /// URL to the datafile
    #[arg(long)]
    url: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging();

    match run(&args.url) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("log-analyzer: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(url: &str) -> Result<(), AppError> {
    let body = fetch(url)?;
    let result = analyze(rows(&body))?;
    debug!(
        total_hits = result.total_hits(),
        image_hits = result.image_hits(),
        hours_seen = result.hourly_hits().len(),
        "analysis complete"
    );

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &result, url)?;
    stdout.flush()?;
    Ok(())
}
