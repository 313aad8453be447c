//! Result endpoint DTOs

use serde::Deserialize;

/// Body returned by the result endpoint: `{"data": {"result": ..., ...}}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl ResultResponse {
    /// Returns the `data` payload, or `None` when it is absent, null or empty
    pub fn into_payload(self) -> Option<serde_json::Value> {
        self.data.filter(|data| !is_empty(data))
    }
}

fn is_empty(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_present() {
        let response: ResultResponse =
            serde_json::from_str(r#"{"data":{"result":"pass"}}"#).unwrap();
        assert_eq!(response.into_payload(), Some(json!({ "result": "pass" })));
    }

    #[test]
    fn test_empty_payloads() {
        for body in [r#"{}"#, r#"{"data":null}"#, r#"{"data":{}}"#] {
            let response: ResultResponse = serde_json::from_str(body).unwrap();
            assert_eq!(response.into_payload(), None, "body: {}", body);
        }
    }
}
