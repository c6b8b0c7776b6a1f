//! Console reporter
//!
//! Prints one block per procedure as it finishes and a summary at the end.

use std::fmt;
use std::io::{self, Write};

use clubcheck_application::ports::Reporter;
use clubcheck_domain::{TestResult, TestResults};

const RULE_WIDTH: usize = 60;

/// Writes a human-readable report to any `Write` sink.
pub struct ConsoleReporter<W: Write + Send = io::Stdout> {
    out: W,
}

impl ConsoleReporter {
    /// Reporter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    /// Reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            tracing::warn!(error = %e, "failed to write report line");
        }
    }

    fn rule(&mut self) {
        self.line(format_args!("{}", "=".repeat(RULE_WIDTH)));
    }
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn run_started(&mut self, title: &str) {
        self.rule();
        self.line(format_args!("{title}"));
        self.rule();
        self.line(format_args!(""));
    }

    fn result_recorded(&mut self, result: &TestResult) {
        let status = if result.success { "✅ PASS" } else { "❌ FAIL" };
        self.line(format_args!("{status}: {}", result.test));
        if !result.details.is_empty() {
            self.line(format_args!("   Details: {}", result.details));
        }
        if let Some(data) = result.response_data.as_deref().filter(|_| !result.success) {
            self.line(format_args!("   Response: {data}"));
        }
        self.line(format_args!(""));
    }

    fn sub_check(&mut self, passed: bool, message: &str) {
        let mark = if passed { "✅" } else { "❌" };
        self.line(format_args!("{mark} {message}"));
    }

    fn run_finished(&mut self, results: &TestResults) {
        self.rule();
        self.line(format_args!("TEST SUMMARY"));
        self.rule();
        self.line(format_args!("Total Tests: {}", results.total));
        self.line(format_args!("Passed: {}", results.passed));
        self.line(format_args!("Failed: {}", results.failed));
        self.line(format_args!("Success Rate: {:.1}%", results.pass_rate()));
        self.line(format_args!(""));

        if results.all_passed() {
            self.line(format_args!("🎉 ALL TESTS PASSED! Backend API is working correctly."));
        } else {
            self.line(format_args!("⚠️  Some tests failed. Check the details above."));
        }

        if let Err(e) = self.out.flush() {
            tracing::warn!(error = %e, "failed to flush report");
        }
    }
}
