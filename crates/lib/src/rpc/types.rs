use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constant::JSONRPC_VERSION;

/// A JSON-RPC 2.0 request with positional parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<Value>,
    pub id: u64,
}

impl JsonRpcRequest {
    /// Build a request whose id is the current Unix time in milliseconds.
    /// Ids are only used for correlation and are not guaranteed unique.
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        let id = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        Self::with_id(method, params, id)
    }

    pub fn with_id(method: impl Into<String>, params: Vec<Value>, id: u64) -> Self {
        Self { jsonrpc: JSONRPC_VERSION.to_string(), method: method.into(), params, id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A JSON-RPC response as received. Neither field is required; callers look
/// at whichever one their check needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_result",
        skip_serializing_if = "Option::is_none"
    )]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
}

// A literal `null` result is treated the same as a missing one.
fn deserialize_result<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(other),
    })
}

impl JsonRpcResponse {
    pub fn success(result: Value) -> Self {
        Self {
            jsonrpc: Some(JSONRPC_VERSION.to_string()),
            result: Some(result),
            ..Default::default()
        }
    }

    pub fn failure(code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: Some(JSONRPC_VERSION.to_string()),
            error: Some(RpcErrorObject { code, message: message.into(), data: None }),
            ..Default::default()
        }
    }

    pub fn error_code(&self) -> Option<i64> {
        self.error.as_ref().map(|e| e.code)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// True when exactly one of `result` / `error` is populated
    pub fn has_valid_envelope(&self) -> bool {
        self.result.is_some() != self.error.is_some()
    }
}
