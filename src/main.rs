use std::process::ExitCode;

use clap::{error::ErrorKind, Parser};
use tracing::trace;
use tracing_subscriber::EnvFilter;

mod cli;
mod convert;
mod error;
mod session;
mod sql;
mod summary;

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    trace!("Logging initialised.");

    match convert::csv_to_parquet(&cli.input, &cli.output) {
        Ok(()) => {
            println!("Wrote Parquet: {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}
