use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// One line of the run report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestMetric {
    pub method: String,
    pub test: String,
    pub pass: bool,
    /// Round-trip time as text, e.g. `12ms`
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Value>,
}

impl TestMetric {
    pub fn passed(method: &str, test: &str, duration: Duration, params: &[Value]) -> Self {
        Self {
            method: method.to_string(),
            test: test.to_string(),
            pass: true,
            duration: format_duration(duration),
            error: None,
            params: params.to_vec(),
        }
    }

    pub fn failed(
        method: &str,
        test: &str,
        duration: Duration,
        params: &[Value],
        error: impl Into<String>,
    ) -> Self {
        Self {
            pass: false,
            error: Some(error.into()),
            ..Self::passed(method, test, duration, params)
        }
    }
}

pub fn format_duration(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}
