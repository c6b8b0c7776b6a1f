//! Reporter port

use clubcheck_domain::{TestResult, TestResults};

/// Receives progress of a suite run as it happens.
pub trait Reporter: Send {
    /// Called once before the first procedure.
    fn run_started(&mut self, title: &str);

    /// Called each time a procedure records its verdict.
    fn result_recorded(&mut self, result: &TestResult);

    /// Called for each sub-check inside a composite procedure.
    fn sub_check(&mut self, passed: bool, message: &str);

    /// Called once after the last procedure.
    fn run_finished(&mut self, results: &TestResults);
}

/// Reporter that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn run_started(&mut self, _title: &str) {}

    fn result_recorded(&mut self, _result: &TestResult) {}

    fn sub_check(&mut self, _passed: bool, _message: &str) {}

    fn run_finished(&mut self, _results: &TestResults) {}
}
