//! Test run domain types

use serde::{Deserialize, Deserializer};
use std::fmt;

/// Identifies one triggered test run
///
/// Produced from the trigger response and never modified afterwards.
/// Missing or `null` fields deserialize to empty strings and numeric ids to
/// their decimal text, so that a sparse trigger payload does not abort the
/// whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct RunDescriptor {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bucket_key: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub test_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub test_run_id: String,
}

impl RunDescriptor {
    pub fn new(
        bucket_key: impl Into<String>,
        test_id: impl Into<String>,
        test_run_id: impl Into<String>,
    ) -> Self {
        Self {
            bucket_key: bucket_key.into(),
            test_id: test_id.into(),
            test_run_id: test_run_id.into(),
        }
    }
}

impl fmt::Display for RunDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.bucket_key, self.test_id, self.test_run_id)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdField {
    Text(String),
    Number(serde_json::Number),
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<IdField>::deserialize(deserializer)? {
        Some(IdField::Text(text)) => text,
        Some(IdField::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

/// Status of a test run as reported by the result endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Pass,
    Fail,
    Working,
    /// Any `result` value the backend sent that is not one of the above
    Unknown,
}

impl RunStatus {
    /// Maps the wire `result` field to a status
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("pass") => RunStatus::Pass,
            Some("fail") => RunStatus::Fail,
            Some("working") => RunStatus::Working,
            _ => RunStatus::Unknown,
        }
    }

    /// Terminal statuses end polling for a run
    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::Pass | RunStatus::Fail)
    }
}

/// Outcome of one result query
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub test_run_id: String,
    pub status: RunStatus,
    /// The `data` payload exactly as received, kept for diagnostics
    pub raw: serde_json::Value,
}

impl RunResult {
    /// Builds a result from the `data` payload of a result response
    pub fn from_payload(test_run_id: impl Into<String>, raw: serde_json::Value) -> Self {
        let status = RunStatus::from_wire(raw.get("result").and_then(|v| v.as_str()));
        Self {
            test_run_id: test_run_id.into(),
            status,
            raw,
        }
    }
}
