//! Result poller
//!
//! Sleeps a fixed interval, queries every unresolved run once, and repeats
//! until nothing is outstanding or the global deadline has passed. The
//! deadline is only checked at the top of a cycle.

use radar_client::{ClientError, ResultFetcher};
use radar_core::domain::run::{RunDescriptor, RunStatus};
use radar_core::domain::verdict::Verdict;
use tokio::time::{self, Duration, Instant};
use tracing::{debug, info, warn};

use super::state::PollState;

/// Polls a batch of runs to completion
pub struct Poller<'a, F: ResultFetcher + ?Sized> {
    fetcher: &'a F,
    poll_interval: Duration,
    timeout: Duration,
}

impl<'a, F: ResultFetcher + ?Sized> Poller<'a, F> {
    pub fn new(fetcher: &'a F, poll_interval: Duration, timeout: Duration) -> Self {
        Self {
            fetcher,
            poll_interval,
            timeout,
        }
    }

    /// Runs the poll loop over a triggered batch
    ///
    /// Returns the verdict once every run is terminal or the deadline passed.
    /// A fetch error aborts the loop immediately and is returned as is.
    pub async fn run(&self, runs: Vec<RunDescriptor>) -> Result<Verdict, ClientError> {
        info!(
            "Polling {} test run(s) (interval: {:?}, timeout: {:?})",
            runs.len(),
            self.poll_interval,
            self.timeout
        );

        let mut state = PollState::new(runs, deadline_after(Instant::now(), self.timeout));

        while !state.is_complete() {
            if state.is_expired(Instant::now()) {
                warn!(
                    "Deadline reached with {} test run(s) resolved and {} unresolved",
                    state.resolved().len(),
                    state.pending().len()
                );
                return Ok(state.into_verdict(true));
            }

            time::sleep(self.poll_interval).await;

            let resolved = self.poll_once(&mut state).await?;
            if resolved > 0 {
                info!("Resolved {} test run(s) this cycle", resolved);
            }
        }

        Ok(state.into_verdict(false))
    }

    /// Performs a single poll cycle
    async fn poll_once(&self, state: &mut PollState) -> Result<usize, ClientError> {
        let outstanding = state.pending().to_vec();
        let mut resolved = 0;

        for run in &outstanding {
            // Duplicate descriptors share an id; the first one may have resolved it.
            if state.is_resolved(&run.test_run_id) {
                continue;
            }

            let Some(result) = self.fetcher.fetch_result(run).await? else {
                debug!("No result yet for test run {}", run.test_run_id);
                continue;
            };

            match result.status {
                RunStatus::Pass | RunStatus::Fail => {
                    debug!("Test run {} finished: {:?}", run.test_run_id, result.status);
                    if state.record(result) {
                        resolved += 1;
                    }
                }
                RunStatus::Working => {
                    debug!("Test run {} still working", run.test_run_id);
                }
                RunStatus::Unknown => {
                    warn!(
                        "Got response with unknown result field. Full response was {}",
                        result.raw
                    );
                }
            }
        }

        Ok(resolved)
    }
}

/// Deadline `timeout` after `now`, saturating far in the future on overflow
fn deadline_after(now: Instant, timeout: Duration) -> Instant {
    now.checked_add(timeout).unwrap_or_else(|| now + FAR_FUTURE)
}

/// Roughly thirty years
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);
