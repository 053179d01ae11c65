mod args;
mod generator;
mod stream;

use args::CliArgs;
use clap::Parser;
use std::{fs::File, io, process::ExitCode};
use stream::{rng_for, write_log};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let mut rng = rng_for(*args.seed());

    let result = match args.output() {
        Some(path) => File::create(path)
            .map_err(Into::into)
            .and_then(|file| write_log(file, &mut rng, *args.rows(), *args.malformed_ratio())),
        None => write_log(io::stdout().lock(), &mut rng, *args.rows(), *args.malformed_ratio()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("noise-maker: {e}");
            ExitCode::FAILURE
        }
    }
}
