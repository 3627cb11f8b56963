use std::process::ExitCode;

use clap::Parser;
use log::error;
use vbcoach_cli::{Args, run};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = vbcoach_cli::log::init(args.log_style(), args.log_level()) {
        eprintln!("failed to initialize logger: {err}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
