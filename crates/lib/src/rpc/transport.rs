use mockall::automock;
use reqwest::Client;
use std::time::{Duration, Instant};

use crate::{
    error::ProbeError,
    rpc::types::{JsonRpcRequest, JsonRpcResponse},
    sanitize_error,
};

/// A response together with the time the round-trip took
#[derive(Debug, Clone, PartialEq)]
pub struct TimedResponse {
    pub response: JsonRpcResponse,
    pub duration: Duration,
}

impl TimedResponse {
    pub fn new(response: JsonRpcResponse, duration: Duration) -> Self {
        Self { response, duration }
    }
}

/// Sends a single JSON-RPC request and returns the decoded response.
///
/// Implementations own networking concerns (connection reuse, timeouts).
/// Callers never retry: an `Err` is final for that request.
#[automock]
#[async_trait::async_trait]
pub trait RpcTransport: Send + Sync {
    async fn send(&self, request: &JsonRpcRequest) -> Result<TimedResponse, ProbeError>;

    /// Endpoint description used in reports and logs
    fn endpoint(&self) -> String;
}

/// JSON-RPC over HTTP POST
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, ProbeError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            ProbeError::Transport(format!("Failed to build HTTP client: {}", sanitize_error!(e)))
        })?;
        Ok(Self { client, url: url.to_string() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl RpcTransport for HttpTransport {
    async fn send(&self, request: &JsonRpcRequest) -> Result<TimedResponse, ProbeError> {
        let start = Instant::now();
        let response = self.client.post(&self.url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::Transport(format!(
                "{} returned HTTP {status}",
                request.method
            )));
        }

        let body = response.bytes().await?;
        let duration = start.elapsed();

        let decoded: JsonRpcResponse = serde_json::from_slice(&body).map_err(|e| {
            ProbeError::Serialization(format!(
                "Invalid JSON-RPC response for {}: {}",
                request.method,
                sanitize_error!(e)
            ))
        })?;

        log::debug!("{} answered in {} ms", request.method, duration.as_millis());

        Ok(TimedResponse::new(decoded, duration))
    }

    fn endpoint(&self) -> String {
        sanitize_error!(self.url)
    }
}
