//! Result endpoint

use async_trait::async_trait;
use radar_core::domain::run::{RunDescriptor, RunResult};
use radar_core::dto::result::ResultResponse;
use reqwest::StatusCode;
use reqwest::header;
use tracing::{info, warn};

use crate::error::{ClientError, Result};
use crate::{RadarClient, USER_AGENT};

/// Queries the current result of a single test run
///
/// `Ok(None)` means no result is available yet (not found, or an empty or
/// malformed payload) and the caller should ask again later. `Ok(Some(_))`
/// carries whatever status the backend reported, terminal or not.
#[async_trait]
pub trait ResultFetcher: Send + Sync {
    async fn fetch_result(&self, run: &RunDescriptor) -> Result<Option<RunResult>>;
}

impl RadarClient {
    /// URL of the result resource for a run
    pub fn result_url(&self, run: &RunDescriptor) -> String {
        format!(
            "{}/buckets/{}/tests/{}/results/{}",
            self.base_url, run.bucket_key, run.test_id, run.test_run_id
        )
    }

    /// Dashboard page showing the history of a run
    pub fn history_url(&self, run: &RunDescriptor) -> String {
        format!(
            "{}/radar/{}/{}/history/{}",
            self.dashboard_url, run.bucket_key, run.test_id, run.test_run_id
        )
    }
}

#[async_trait]
impl ResultFetcher for RadarClient {
    async fn fetch_result(&self, run: &RunDescriptor) -> Result<Option<RunResult>> {
        let token = self.credentials.bearer_token()?;

        let url = self.result_url(run);
        info!("Getting result: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        interpret_result_response(run, &url, &self.history_url(run), status, &body)
    }
}

pub(crate) fn interpret_result_response(
    run: &RunDescriptor,
    url: &str,
    history_url: &str,
    status: StatusCode,
    body: &str,
) -> Result<Option<RunResult>> {
    if status == StatusCode::NOT_FOUND {
        info!("Unable to find test run result at {}", url);
        return Ok(None);
    }

    if !status.is_success() {
        return Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
            dashboard_url: history_url.to_string(),
            body: body.to_string(),
        });
    }

    let payload = match serde_json::from_str::<ResultResponse>(body) {
        Ok(response) => response.into_payload(),
        Err(e) => {
            warn!("Failed to parse result response from {}: {}", url, e);
            None
        }
    };

    match payload {
        Some(payload) => Ok(Some(RunResult::from_payload(&run.test_run_id, payload))),
        None => {
            warn!("Response data was empty. Full response was {}", body);
            Ok(None)
        }
    }
}
