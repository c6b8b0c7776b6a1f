//! Clubcheck - wiring for the `clubcheck` binary
//!
//! Turns command-line settings into a `BackendSuite` backed by the reqwest
//! adapter and runs it.

pub mod cli;

use anyhow::Context;
use clubcheck_application::BackendSuite;
use clubcheck_domain::TestResults;
use clubcheck_infrastructure::{ConsoleReporter, JsonReporter, ReqwestHttpClient, SystemClock};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub use cli::{Cli, OutputFormat, Settings};

/// Installs the log subscriber. Logs go to stderr; stdout carries the report.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` applies, defaulting to `warn`.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Runs the whole suite once, reporting in the configured format.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be built; procedure
/// failures are part of the returned results.
pub async fn run(settings: Settings) -> anyhow::Result<TestResults> {
    let client = ReqwestHttpClient::new().context("failed to build HTTP client")?;
    tracing::info!(
        base_url = %settings.suite.base,
        timeout_ms = settings.suite.timeout_ms,
        authenticated = settings.suite.bearer_token.is_some(),
        "starting suite"
    );

    let suite = BackendSuite::new(client, SystemClock::new(), settings.suite);
    let mut suite = match settings.format {
        OutputFormat::Text => suite.with_reporter(ConsoleReporter::stdout()),
        OutputFormat::Json => suite.with_reporter(JsonReporter::stdout()),
    };

    Ok(suite.run_all().await)
}
