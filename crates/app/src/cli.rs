//! Command-line interface

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use clubcheck_application::SuiteConfig;
use clubcheck_application::suite::DEFAULT_BANNER;
use clubcheck_domain::ApiBase;

/// Base URL used when neither `--base-url` nor `CLUBCHECK_BASE_URL` is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

const LONG_ABOUT: &str = r"Runs a fixed sequence of checks against the club website's REST API:
health check, event create/list/get/update, participant registration and
listing, participant count, contact form, three error scenarios, and finally
deletes the event it created.

EXIT STATUS:
    0  every check passed
    1  at least one check failed
    2  invalid configuration

EXAMPLES:
    clubcheck --base-url https://club.example.com/api
    CLUBCHECK_TOKEN=... clubcheck --format json";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "clubcheck")]
#[command(author, version)]
#[command(about = "Smoke-test the club website REST API")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// Base URL of the API, including the /api prefix
    #[arg(long, env = "CLUBCHECK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Timeout for each request, in seconds
    #[arg(long, env = "CLUBCHECK_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Bearer token sent with every request
    #[arg(long, env = "CLUBCHECK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Text expected in the health check's message
    #[arg(long, env = "CLUBCHECK_BANNER", default_value = DEFAULT_BANNER)]
    pub banner: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One block per check plus a summary
    Text,
    /// The summary as JSON, printed at the end
    Json,
}

/// Validated settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Suite configuration.
    pub suite: SuiteConfig,
    /// Report format.
    pub format: OutputFormat,
}

impl Cli {
    /// Validates the arguments.
    ///
    /// # Errors
    ///
    /// Returns an error for an unusable base URL or a zero timeout.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let base = ApiBase::parse(&self.base_url).context("invalid --base-url")?;
        if self.timeout_secs == 0 {
            bail!("--timeout-secs must be greater than zero");
        }
        let token = self.token.clone().filter(|token| !token.trim().is_empty());

        let suite = SuiteConfig::new(base)
            .with_timeout_ms(self.timeout_secs.saturating_mul(1_000))
            .with_bearer_token(token)
            .with_health_banner(self.banner.as_str());

        Ok(Settings {
            suite,
            format: self.format,
        })
    }
}
