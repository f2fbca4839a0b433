use serde_json::Value;

use crate::{
    error::ProbeError,
    rpc::{json_type_name, JsonRpcRequest, JsonRpcResponse, ResultKind, RpcMethod},
};

/// What a scenario requires of the node's response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// The response must carry an error object with exactly this code
    ErrorCode(i64),
    /// No error, and a result of the given primitive type
    Result(ResultKind),
    /// Like `Result`, with the kind taken from the method's family
    ResultForMethod,
}

/// A single request/expectation pair
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub request: JsonRpcRequest,
    pub expectation: Expectation,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        method: &str,
        params: Vec<Value>,
        expectation: Expectation,
    ) -> Self {
        Self { name: name.into(), request: JsonRpcRequest::new(method, params), expectation }
    }

    pub fn method(&self) -> &str {
        &self.request.method
    }
}

impl Expectation {
    /// Check a response against this expectation for the given method.
    pub fn check(&self, method: &str, response: &JsonRpcResponse) -> Result<(), ProbeError> {
        match self {
            Expectation::ErrorCode(expected) => check_error_code(*expected, response),
            Expectation::Result(kind) => check_result(*kind, response),
            Expectation::ResultForMethod => {
                let kind = method.parse::<RpcMethod>().map_err(|_| {
                    ProbeError::Assertion(format!("No result kind known for method {method}"))
                })?;
                check_result(kind.expected_result(), response)
            }
        }
    }
}

fn check_error_code(expected: i64, response: &JsonRpcResponse) -> Result<(), ProbeError> {
    match &response.error {
        Some(error) if error.code == expected => Ok(()),
        Some(error) => Err(ProbeError::Assertion(format!(
            "expected error code {expected}, got {} ({})",
            error.code, error.message
        ))),
        None => Err(ProbeError::Assertion(format!(
            "expected error code {expected}, got a result instead"
        ))),
    }
}

fn check_result(kind: ResultKind, response: &JsonRpcResponse) -> Result<(), ProbeError> {
    if let Some(error) = &response.error {
        return Err(ProbeError::RpcProtocol { code: error.code, message: error.message.clone() });
    }

    match &response.result {
        Some(value) if kind.matches(value) => Ok(()),
        Some(value) => Err(ProbeError::Assertion(format!(
            "expected {kind} result, got {}",
            json_type_name(value)
        ))),
        None => Err(ProbeError::Assertion(format!("expected {kind} result, got none"))),
    }
}
