//! Aggregate verdict over a batch of test runs

use crate::domain::run::{RunDescriptor, RunResult, RunStatus};

/// Final outcome of one poll session
///
/// Derived once after polling stops. A verdict is successful only when the
/// session did not time out and no run failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub pass_count: usize,
    pub fail_count: usize,
    pub timed_out: bool,
    /// Runs still without a terminal result when polling stopped
    pub unresolved: Vec<RunDescriptor>,
}

impl Verdict {
    /// Verdict for a session in which every run reached a terminal status
    pub fn completed<'a>(results: impl IntoIterator<Item = &'a RunResult>) -> Self {
        Self::tally(results, false, Vec::new())
    }

    /// Verdict for a session stopped by the deadline
    pub fn timed_out<'a>(
        results: impl IntoIterator<Item = &'a RunResult>,
        unresolved: Vec<RunDescriptor>,
    ) -> Self {
        Self::tally(results, true, unresolved)
    }

    fn tally<'a>(
        results: impl IntoIterator<Item = &'a RunResult>,
        timed_out: bool,
        unresolved: Vec<RunDescriptor>,
    ) -> Self {
        let (mut pass_count, mut fail_count) = (0, 0);
        for result in results {
            match result.status {
                RunStatus::Pass => pass_count += 1,
                RunStatus::Fail => fail_count += 1,
                RunStatus::Working | RunStatus::Unknown => {}
            }
        }

        Self {
            pass_count,
            fail_count,
            timed_out,
            unresolved,
        }
    }

    pub fn is_success(&self) -> bool {
        !self.timed_out && self.fail_count == 0
    }

    /// Process exit code for this verdict
    pub fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }
}
