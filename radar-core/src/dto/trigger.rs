//! Trigger endpoint DTOs

use serde::Deserialize;

use crate::domain::run::RunDescriptor;

/// Body returned by a trigger URL: `{"data": {"runs": [...]}}`
///
/// Both `data` and `runs` may be absent, which reads as zero runs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggerResponse {
    #[serde(default)]
    pub data: Option<TriggerData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggerData {
    #[serde(default)]
    pub runs: Vec<RunDescriptor>,
}

impl TriggerResponse {
    /// Consumes the envelope and returns the triggered runs
    pub fn into_runs(self) -> Vec<RunDescriptor> {
        self.data.map(|data| data.runs).unwrap_or_default()
    }
}
