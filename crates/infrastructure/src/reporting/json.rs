//! JSON reporter
//!
//! Stays silent during the run and prints the whole `TestResults` at the end,
//! for consumption by CI tooling.

use std::io::{self, Write};

use clubcheck_application::ports::Reporter;
use clubcheck_domain::{TestResult, TestResults};

/// Writes the run summary as pretty-printed JSON.
pub struct JsonReporter<W: Write + Send = io::Stdout> {
    out: W,
}

impl JsonReporter {
    /// Reporter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonReporter<W> {
    /// Reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Reporter for JsonReporter<W> {
    fn run_started(&mut self, _title: &str) {}

    fn result_recorded(&mut self, _result: &TestResult) {}

    fn sub_check(&mut self, passed: bool, message: &str) {
        tracing::debug!(passed, message, "sub-check");
    }

    fn run_finished(&mut self, results: &TestResults) {
        let written = serde_json::to_writer_pretty(&mut self.out, results)
            .map_err(io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"))
            .and_then(|()| self.out.flush());
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write JSON report");
        }
    }
}
