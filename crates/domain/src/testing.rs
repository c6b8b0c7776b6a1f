//! Test results and status expectations.
//!
//! A run is a fixed sequence of procedures; each produces one `TestResult`,
//! and the run as a whole is summarized by `TestResults`.

use serde::{Deserialize, Serialize};

/// Status codes a reply is allowed to carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusExpectation {
    /// Exact status code.
    Exact(u16),
    /// One of multiple status codes.
    OneOf(Vec<u16>),
}

impl StatusExpectation {
    /// Check if a status code matches this expectation.
    #[must_use]
    pub fn matches(&self, status: u16) -> bool {
        match self {
            Self::Exact(expected) => status == *expected,
            Self::OneOf(codes) => codes.contains(&status),
        }
    }

    /// Get description of the expectation.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Exact(code) => code.to_string(),
            Self::OneOf(codes) => {
                let codes_str: Vec<_> = codes.iter().map(ToString::to_string).collect();
                codes_str.join(" or ")
            }
        }
    }

    /// Create an exact status expectation.
    #[must_use]
    pub const fn exact(code: u16) -> Self {
        Self::Exact(code)
    }

    /// Create an expectation accepting any of the given codes.
    #[must_use]
    pub fn one_of(codes: &[u16]) -> Self {
        Self::OneOf(codes.to_vec())
    }
}

impl Default for StatusExpectation {
    fn default() -> Self {
        Self::exact(200)
    }
}

/// Verdict of a single test procedure.
///
/// Created once per procedure and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestResult {
    /// Procedure name (e.g., "Create Event").
    pub test: String,
    /// Whether the procedure passed.
    pub success: bool,
    /// Human-readable explanation.
    #[serde(default)]
    pub details: String,
    /// Raw response payload captured for diagnosis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_data: Option<String>,
}

impl TestResult {
    /// Create a passed result.
    #[must_use]
    pub fn pass(test: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            success: true,
            details: details.into(),
            response_data: None,
        }
    }

    /// Create a failed result.
    #[must_use]
    pub fn fail(test: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            success: false,
            details: details.into(),
            response_data: None,
        }
    }

    /// Attach the response payload (builder pattern).
    #[must_use]
    pub fn with_response(mut self, data: impl Into<String>) -> Self {
        self.response_data = Some(data.into());
        self
    }
}

/// Results from running the whole procedure sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestResults {
    /// Individual procedure results, in run order.
    pub results: Vec<TestResult>,
    /// Total number of procedures.
    pub total: usize,
    /// Number of passed procedures.
    pub passed: usize,
    /// Number of failed procedures.
    pub failed: usize,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
}

impl TestResults {
    /// Create new test results.
    #[must_use]
    pub fn new(results: Vec<TestResult>, duration_ms: u64) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.success).count();
        let failed = total - passed;

        Self {
            results,
            total,
            passed,
            failed,
            duration_ms,
        }
    }

    /// Check if all tests passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Get pass rate as percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// Look up a result by procedure name.
    #[must_use]
    pub fn get(&self, test: &str) -> Option<&TestResult> {
        self.results.iter().find(|r| r.test == test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_expectation_exact() {
        let exp = StatusExpectation::exact(404);
        assert!(exp.matches(404));
        assert!(!exp.matches(400));
    }

    #[test]
    fn test_default_expects_200() {
        let exp = StatusExpectation::default();
        assert!(exp.matches(200));
        assert!(!exp.matches(201));
        assert_eq!(exp.description(), "200");
    }

    #[test]
    fn test_status_expectation_one_of() {
        let exp = StatusExpectation::one_of(&[400, 404, 500]);
        assert!(exp.matches(400));
        assert!(exp.matches(404));
        assert!(exp.matches(500));
        assert!(!exp.matches(200));
        assert!(!exp.matches(401));
        assert_eq!(exp.description(), "400 or 404 or 500");
    }

    #[test]
    fn test_result_builders() {
        let result = TestResult::fail("Create Event", "Status: 500").with_response("boom");
        assert!(!result.success);
        assert_eq!(result.response_data.as_deref(), Some("boom"));

        let result = TestResult::pass("Delete Event", "Event deleted successfully");
        assert!(result.success);
        assert_eq!(result.response_data, None);
    }

    #[test]
    fn test_test_results() {
        let results = vec![
            TestResult::pass("API Health Check", "API is responding correctly"),
            TestResult::fail("Create Event", "Status: 500"),
        ];

        let test_results = TestResults::new(results, 100);
        assert_eq!(test_results.total, 2);
        assert_eq!(test_results.passed, 1);
        assert_eq!(test_results.failed, 1);
        assert!(!test_results.all_passed());
        assert!((test_results.pass_rate() - 50.0).abs() < f64::EPSILON);
        assert!(test_results.get("Create Event").is_some());
        assert!(test_results.get("Update Event").is_none());
    }

    #[test]
    fn test_empty_run_pass_rate() {
        let test_results = TestResults::new(Vec::new(), 0);
        assert!(test_results.all_passed());
        assert!((test_results.pass_rate() - 100.0).abs() < f64::EPSILON);
    }
}
