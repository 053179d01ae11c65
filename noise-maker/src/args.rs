use clap::Parser;
use derive_getters::Getters;
use std::path::PathBuf;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake CSV access logs for log-analyzer", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value_t = 1000)]
    rows: usize,

    /// Fixed seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Fraction of rows to break on purpose (short rows, bad timestamps)
    #[arg(long, default_value_t = 0.0, value_parser = parse_ratio)]
    malformed_ratio: f64,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("{ratio} is not between 0 and 1"))
    }
}
