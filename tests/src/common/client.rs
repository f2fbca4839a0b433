#![cfg(test)]

use anyhow::Result;
use hmy_probe_lib::{
    rpc::{HttpTransport, JsonRpcRequest, JsonRpcResponse, RpcTransport},
    HarnessOptions, RpcHarness,
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tests::fake_node::{spawn_fake_node, FakeNode};

use crate::common::{
    FAKE_NODE_ADDR, TEST_ADDRESS, TEST_ADDRESS_ENV, TEST_REQUEST_TIMEOUT_SECS, TEST_SERVER_URL_ENV,
};

/// Test context: a transport pointed at either a live node or a fake one
pub struct TestContext {
    pub transport: Arc<HttpTransport>,
    pub server_url: String,
    pub address: String,
    // Keeps the fake node running for the lifetime of the context
    _node: Option<FakeNode>,
}

impl TestContext {
    /// Use `TEST_SERVER_URL` when set, otherwise spawn a fake node
    pub async fn new() -> Result<Self> {
        dotenv::dotenv().ok();
        match std::env::var(TEST_SERVER_URL_ENV) {
            Ok(url) if !url.is_empty() => {
                let address =
                    std::env::var(TEST_ADDRESS_ENV).unwrap_or_else(|_| TEST_ADDRESS.to_string());
                Self::with_url(url, address, None)
            }
            _ => Self::with_fake_node().await,
        }
    }

    /// Always run against a fresh in-process fake node
    pub async fn with_fake_node() -> Result<Self> {
        let node = spawn_fake_node(FAKE_NODE_ADDR).await?;
        Self::with_url(node.url(), TEST_ADDRESS.to_string(), Some(node))
    }

    fn with_url(server_url: String, address: String, node: Option<FakeNode>) -> Result<Self> {
        let transport = Arc::new(
            HttpTransport::new(&server_url, Duration::from_secs(TEST_REQUEST_TIMEOUT_SECS))
                .map_err(|e| anyhow::anyhow!("Failed to create transport: {e}"))?,
        );
        Ok(Self { transport, server_url, address, _node: node })
    }

    /// Send a raw JSON-RPC call and return the decoded response
    pub async fn rpc_call(&self, method: &str, params: Vec<Value>) -> Result<JsonRpcResponse> {
        let request = JsonRpcRequest::new(method, params);
        self.transport
            .send(&request)
            .await
            .map(|timed| timed.response)
            .map_err(|e| anyhow::anyhow!("RPC call '{}' failed: {}", method, e))
    }

    pub fn harness(&self) -> RpcHarness<HttpTransport> {
        RpcHarness::new(self.transport.clone())
    }

    pub fn strict_harness(&self) -> RpcHarness<HttpTransport> {
        RpcHarness::with_options(self.transport.clone(), HarnessOptions { strict_envelope: true })
    }
}
