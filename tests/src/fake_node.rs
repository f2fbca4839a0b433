//! In-process JSON-RPC node answering the Harmony account and protocol
//! methods.
//!
//! It checks parameter arity the way a real node does (-32602 for a missing
//! argument) and returns fixed values in the encoding of each method family.
//! There are no accounts or blocks behind it.

use anyhow::Result;
use jsonrpsee::{
    core::Error as RpcError,
    server::{ServerBuilder, ServerHandle},
    types::{error::CallError, Params},
    RpcModule,
};
use serde_json::{json, Value};
use std::net::SocketAddr;

/// Balance reported by legacy methods, as a hex quantity
pub const FAKE_V1_BALANCE: &str = "0x8ac7230489e80000";
/// Balance reported by v2 methods, as a JSON number
pub const FAKE_V2_BALANCE: u64 = 10_000_000_000_000_000_000;
pub const FAKE_NONCE: u64 = 3;
pub const FAKE_BLOCK_NUMBER: u64 = 42;
pub const FAKE_GAS_PRICE: u64 = 1_000_000_000;
pub const FAKE_EPOCH: u64 = 5;

pub struct FakeNode {
    addr: SocketAddr,
    handle: ServerHandle,
}

impl FakeNode {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn stop(self) -> Result<()> {
        self.handle.stop().map_err(|e| anyhow::anyhow!("Failed to stop fake node: {e}"))
    }
}

/// Start a fake node on `addr` (use port 0 for an ephemeral port)
pub async fn spawn_fake_node(addr: &str) -> Result<FakeNode> {
    let server = ServerBuilder::default().http_only().build(addr).await?;
    let addr = server.local_addr()?;
    let handle = server
        .start(build_module()?)
        .map_err(|e| anyhow::anyhow!("Failed to start fake node: {e}"))?;

    Ok(FakeNode { addr, handle })
}

fn build_module() -> Result<RpcModule<()>> {
    let mut module = RpcModule::new(());

    module.register_method("hmyv2_getBalance", |params, _| {
        require_args(&params, 1)?;
        Ok(json!(FAKE_V2_BALANCE))
    })?;
    module.register_method("hmyv2_getBalanceByBlockNumber", |params, _| {
        require_args(&params, 2)?;
        Ok(json!(FAKE_V2_BALANCE))
    })?;
    module.register_method("hmyv2_getTransactionCount", |params, _| {
        require_args(&params, 2)?;
        Ok(json!(FAKE_NONCE))
    })?;
    module.register_method("hmy_getBalance", |params, _| {
        require_args(&params, 2)?;
        Ok(json!(FAKE_V1_BALANCE))
    })?;
    module.register_method("hmy_getBalanceByBlockNumber", |params, _| {
        require_args(&params, 2)?;
        Ok(json!(FAKE_V1_BALANCE))
    })?;
    module.register_method("hmy_getTransactionCount", |params, _| {
        require_args(&params, 2)?;
        Ok(json!(format!("{FAKE_NONCE:#x}")))
    })?;

    for (legacy, v2, value) in [
        ("hmy_blockNumber", "hmyv2_blockNumber", FAKE_BLOCK_NUMBER),
        ("hmy_gasPrice", "hmyv2_gasPrice", FAKE_GAS_PRICE),
        ("hmy_getEpoch", "hmyv2_getEpoch", FAKE_EPOCH),
    ] {
        module.register_method(legacy, move |_, _| Ok(json!(format!("{value:#x}"))))?;
        module.register_method(v2, move |_, _| Ok(json!(value)))?;
    }

    Ok(module)
}

fn require_args(params: &Params, count: usize) -> Result<Vec<Value>, RpcError> {
    // Named or absent params count as no positional arguments
    let args: Vec<Value> = params.parse().unwrap_or_default();

    if args.len() < count {
        return Err(invalid_params(&format!("missing value for required argument {}", args.len())));
    }
    Ok(args)
}

fn invalid_params(message: &str) -> RpcError {
    RpcError::Call(CallError::InvalidParams(anyhow::anyhow!(message.to_string())))
}
