//! clubcheck - command-line entry point
//!
//! Exit codes: 0 when every procedure passed, 1 when any failed,
//! 2 when the configuration is invalid.

use std::process::ExitCode;

use clap::Parser;
use clubcheck::{Cli, init_tracing, run};

const CONFIG_ERROR: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("clubcheck: {e:#}");
            return ExitCode::from(CONFIG_ERROR);
        }
    };

    match run(settings).await {
        Ok(results) if results.all_passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("clubcheck: {e:#}");
            ExitCode::from(CONFIG_ERROR)
        }
    }
}
