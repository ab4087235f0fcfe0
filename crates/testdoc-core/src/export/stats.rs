//! Execution result statistics for test runs

use crate::model::{ResultStatus, TestResult};

/// Per-status counts over a run's results
///
/// Results with an unrecognized status are not counted in any bucket and do
/// not contribute to `total()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultSummary {
    pub passed: usize,
    pub failed: usize,
    pub blocked: usize,
    pub skipped: usize,
}

impl ResultSummary {
    /// Count results by status
    pub fn from_results(results: &[TestResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut summary, result| {
                match result.status {
                    ResultStatus::Pass => summary.passed += 1,
                    ResultStatus::Fail => summary.failed += 1,
                    ResultStatus::Blocked => summary.blocked += 1,
                    ResultStatus::Skipped => summary.skipped += 1,
                    ResultStatus::Unknown(_) => {}
                }
                summary
            })
    }

    /// Sum of the four recognized buckets
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.blocked + self.skipped
    }

    /// Percentage of passed results, if anything was counted
    pub fn pass_rate(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some(self.passed as f64 / total as f64 * 100.0)
    }

    /// Pass rate with one decimal place, e.g. `"40.0"`
    pub fn formatted_pass_rate(&self) -> Option<String> {
        self.pass_rate().map(|rate| format!("{:.1}", rate))
    }
}
