//! Poll state
//!
//! In-process bookkeeping for one poll session: which runs are still
//! outstanding, which have a terminal result, and when polling must stop.

use std::collections::HashMap;

use radar_core::domain::run::{RunDescriptor, RunResult};
use radar_core::domain::verdict::Verdict;
use tokio::time::Instant;

/// State of one poll session
///
/// `resolved` only ever holds terminal results, keyed by the `test_run_id`
/// of a descriptor from the original batch, and never shrinks.
#[derive(Debug)]
pub struct PollState {
    pending: Vec<RunDescriptor>,
    resolved: HashMap<String, RunResult>,
    deadline: Instant,
}

impl PollState {
    pub fn new(runs: Vec<RunDescriptor>, deadline: Instant) -> Self {
        Self {
            pending: runs,
            resolved: HashMap::new(),
            deadline,
        }
    }

    /// Runs still waiting for a terminal result
    pub fn pending(&self) -> &[RunDescriptor] {
        &self.pending
    }

    pub fn resolved(&self) -> &HashMap<String, RunResult> {
        &self.resolved
    }

    pub fn is_resolved(&self, test_run_id: &str) -> bool {
        self.resolved.contains_key(test_run_id)
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Records a terminal result for a pending run
    ///
    /// Returns `false` and leaves the state untouched when the result is not
    /// terminal, does not belong to a pending run, or was already recorded.
    pub fn record(&mut self, result: RunResult) -> bool {
        if !result.status.is_terminal() || self.is_resolved(&result.test_run_id) {
            return false;
        }
        if !self
            .pending
            .iter()
            .any(|run| run.test_run_id == result.test_run_id)
        {
            return false;
        }

        self.pending
            .retain(|run| run.test_run_id != result.test_run_id);
        self.resolved.insert(result.test_run_id.clone(), result);
        true
    }

    /// Folds the session into its verdict
    pub fn into_verdict(self, timed_out: bool) -> Verdict {
        if timed_out {
            Verdict::timed_out(self.resolved.values(), self.pending)
        } else {
            Verdict::completed(self.resolved.values())
        }
    }
}
