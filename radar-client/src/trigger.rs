//! Trigger endpoint

use radar_core::domain::run::RunDescriptor;
use radar_core::dto::trigger::TriggerResponse;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::RadarClient;
use crate::error::{ClientError, Result};

impl RadarClient {
    /// Start a batch of test runs
    ///
    /// Performs one GET on `trigger_url` and returns the runs listed under
    /// `data.runs`. A non-success status yields an empty batch rather than an
    /// error; transport failures and an unparseable success body are errors.
    ///
    /// # Arguments
    /// * `trigger_url` - Absolute trigger URL supplied by the caller
    pub async fn trigger_runs(&self, trigger_url: &str) -> Result<Vec<RunDescriptor>> {
        debug!("Triggering test runs: {}", trigger_url);
        let response = self.client.get(trigger_url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        interpret_trigger_response(trigger_url, status, &body)
    }
}

pub(crate) fn interpret_trigger_response(
    trigger_url: &str,
    status: StatusCode,
    body: &str,
) -> Result<Vec<RunDescriptor>> {
    if !status.is_success() {
        // Kept lenient: a failed trigger reads as an empty batch.
        warn!(
            "Trigger request to {} returned status {}; no test runs were started. Response: {}",
            trigger_url, status, body
        );
        return Ok(Vec::new());
    }

    let response: TriggerResponse = serde_json::from_str(body).map_err(|e| {
        ClientError::ParseError(format!(
            "Failed to parse trigger response from {}: {}",
            trigger_url, e
        ))
    })?;

    Ok(response.into_runs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StaticCredentials;
    use crate::test_support::{direct_client, serve_once};

    const URL: &str = "https://api.runscope.com/radar/trigger/abc";

    #[test]
    fn test_success_extracts_runs() {
        let body = r#"{"data":{"runs":[
            {"bucket_key":"b1","test_id":"t1","test_run_id":"r1"},
            {"bucket_key":"b1","test_id":"t1","test_run_id":"r2"}
        ]}}"#;
        let runs = interpret_trigger_response(URL, StatusCode::CREATED, body).unwrap();
        assert_eq!(
            runs,
            vec![
                RunDescriptor::new("b1", "t1", "r1"),
                RunDescriptor::new("b1", "t1", "r2"),
            ]
        );
    }

    #[test]
    fn test_failed_trigger_yields_no_runs() {
        let runs =
            interpret_trigger_response(URL, StatusCode::INTERNAL_SERVER_ERROR, "oops").unwrap();
        assert!(runs.is_empty());

        let runs = interpret_trigger_response(URL, StatusCode::NOT_FOUND, "").unwrap();
        assert!(runs.is_empty());
    }

    #[test]
    fn test_garbage_success_body_is_parse_error() {
        let err = interpret_trigger_response(URL, StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, ClientError::ParseError(ref msg) if msg.contains(URL)));
    }

    #[tokio::test]
    async fn test_trigger_runs_round_trip() {
        let (base_url, server) = serve_once(
            "201 Created",
            r#"{"data":{"runs":[{"bucket_key":"b1","test_id":"t1","test_run_id":"r1"}]}}"#,
        )
        .await;
        let client = RadarClient::with_client(
            "https://api.runscope.com",
            direct_client(),
            StaticCredentials("t".into()),
        );

        let runs = client
            .trigger_runs(&format!("{}/radar/trigger/abc", base_url))
            .await
            .unwrap();

        assert_eq!(runs, vec![RunDescriptor::new("b1", "t1", "r1")]);
        let request = server.await.unwrap();
        assert!(request.starts_with("get /radar/trigger/abc http/1.1\r\n"));
        assert!(!request.contains("authorization:"));
    }
}
