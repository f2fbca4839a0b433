use crate::{common::*, resolution::{clear_profile_vars, ScopedEnv}};
use hmy_probe_lib::{
    error::ProbeError,
    profile::{build_provider, ChainOptions, Credential, GasConfig, Provider, ProviderFactory},
    rpc::{HttpTransport, JsonRpcRequest, RpcTransport},
    NetworkName, ProfileResolver,
};
use serde_json::json;
use serial_test::serial;
use std::time::Duration;
use tests::fake_node::{spawn_fake_node, FAKE_V2_BALANCE};

/// Minimal provider: talks to the profile's endpoint and remembers its signer
struct NodeProvider {
    transport: HttpTransport,
    chain: ChainOptions,
    accounts: Vec<String>,
    signer: Option<String>,
}

impl Provider for NodeProvider {
    type Account = String;

    fn add_credential(&mut self, private_key: &str) -> Result<String, ProbeError> {
        hmy_probe_lib::profile::validate_private_key(private_key)
            .map_err(ProbeError::Configuration)?;
        let account = format!("account-{}", self.accounts.len());
        self.accounts.push(account.clone());
        Ok(account)
    }

    fn set_signer(&mut self, account: String) {
        self.signer = Some(account);
    }
}

struct NodeProviderFactory;

impl ProviderFactory for NodeProviderFactory {
    type Provider = NodeProvider;

    fn connect(
        &self,
        endpoint_url: &str,
        _credential: &Credential,
        chain: ChainOptions,
        _gas: GasConfig,
    ) -> Result<NodeProvider, ProbeError> {
        Ok(NodeProvider {
            transport: HttpTransport::new(endpoint_url, Duration::from_secs(5))?,
            chain,
            accounts: Vec::new(),
            signer: None,
        })
    }
}

#[tokio::test]
#[serial]
async fn test_provider_built_from_profile_reaches_node() {
    let node = spawn_fake_node(FAKE_NODE_ADDR).await.expect("Failed to spawn fake node");
    let url = node.url();

    clear_profile_vars();
    let _env = ScopedEnv::new(&[
        ("LOCAL_0_URL", url.as_str()),
        ("LOCAL_PRIVATE_KEY", TEST_PRIVATE_KEY),
        ("GAS_LIMIT", "6721900"),
        ("GAS_PRICE", "1000000000"),
    ]);

    let profile = ProfileResolver::from_process_env()
        .resolve(NetworkName::Localnet)
        .expect("Failed to resolve localnet");
    let provider =
        build_provider(&profile, &NodeProviderFactory).expect("Failed to build provider");

    assert_eq!(provider.chain, ChainOptions { shard_id: 0, chain_id: 2 });
    assert_eq!(provider.signer.as_deref(), Some("account-0"));

    let request = JsonRpcRequest::new("hmyv2_getBalance", vec![json!(TEST_ADDRESS)]);
    let timed = provider.transport.send(&request).await.expect("Failed to reach node");
    assert_eq!(timed.response.result, Some(json!(FAKE_V2_BALANCE)));
}

#[tokio::test]
#[serial]
async fn test_mnemonic_only_profile_has_no_signer() {
    clear_profile_vars();
    let _env = ScopedEnv::new(&[
        ("DEVNET_0_URL", "http://127.0.0.1:9"),
        ("DEVNET_MNEMONIC", TEST_MNEMONIC),
        ("GAS_LIMIT", "1"),
        ("GAS_PRICE", "1"),
    ]);

    let profile = ProfileResolver::from_process_env()
        .resolve(NetworkName::Devnet)
        .expect("Failed to resolve devnet");
    let provider =
        build_provider(&profile, &NodeProviderFactory).expect("Failed to build provider");

    assert!(provider.accounts.is_empty());
    assert!(provider.signer.is_none());
}
