use std::fmt;

use crate::{
    constant::PRIVATE_KEY_BYTES,
    env::{EnvSource, ProcessEnv},
    error::ProbeError,
    profile::{gas::GasConfig, network::NetworkName},
    sanitize::redact_secret,
};

/// Signing material for a network: a mnemonic, a private key, or both
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    mnemonic: Option<String>,
    private_key: Option<String>,
}

impl Credential {
    pub fn new(mnemonic: Option<String>, private_key: Option<String>) -> Result<Self, ProbeError> {
        if mnemonic.is_none() && private_key.is_none() {
            return Err(ProbeError::Configuration(
                "credential needs a mnemonic or a private key".to_string(),
            ));
        }
        Ok(Self { mnemonic, private_key })
    }

    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_deref()
    }

    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("mnemonic", &redact_secret(self.mnemonic()))
            .field("private_key", &redact_secret(self.private_key()))
            .finish()
    }
}

/// Everything needed to hand a network off to a provider. Built only by
/// `ProfileResolver`; fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProfile {
    network: NetworkName,
    network_id: String,
    endpoint_url: String,
    credential: Credential,
    shard_id: u32,
    chain_id: u32,
    gas: GasConfig,
}

impl NetworkProfile {
    pub fn network(&self) -> NetworkName {
        self.network
    }

    pub fn network_id(&self) -> &str {
        &self.network_id
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn shard_id(&self) -> u32 {
        self.shard_id
    }

    pub fn chain_id(&self) -> u32 {
        self.chain_id
    }

    pub fn gas(&self) -> GasConfig {
        self.gas
    }
}

/// Builds network profiles from an environment.
///
/// Resolution is a pure function of the environment: every variable is read
/// and checked first, and any problems are reported together in a single
/// `ProbeError::Configuration` before a profile is built.
pub struct ProfileResolver<E: EnvSource> {
    env: E,
}

impl ProfileResolver<ProcessEnv> {
    pub fn from_process_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<E: EnvSource> ProfileResolver<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn resolve(&self, network: NetworkName) -> Result<NetworkProfile, ProbeError> {
        let problems = self.validate(network);
        if !problems.is_empty() {
            return Err(ProbeError::Configuration(format!(
                "{network}: {}",
                problems.join("; ")
            )));
        }

        let endpoint_url = self.require(&network.url_var())?;
        let credential = Credential::new(
            self.env.non_empty(&network.mnemonic_var()),
            self.env.non_empty(&network.private_key_var()),
        )?;
        let gas = GasConfig::from_env(&self.env)?;

        log::debug!("Resolved profile for {network}");

        Ok(NetworkProfile {
            network,
            network_id: network.network_id().to_string(),
            endpoint_url,
            credential,
            shard_id: network.shard_id(),
            chain_id: network.chain_id(),
            gas,
        })
    }

    /// Resolve every known network, stopping at the first failure
    pub fn resolve_all(&self) -> Result<Vec<NetworkProfile>, ProbeError> {
        NetworkName::ALL.iter().map(|network| self.resolve(*network)).collect()
    }

    /// Every problem with this network's environment, in a stable order
    pub fn validate(&self, network: NetworkName) -> Vec<String> {
        let mut problems = Vec::new();

        let url_var = network.url_var();
        if self.env.non_empty(&url_var).is_none() {
            problems.push(format!("{url_var} is not set"));
        }

        let mnemonic = self.env.non_empty(&network.mnemonic_var());
        let private_key = self.env.non_empty(&network.private_key_var());
        if mnemonic.is_none() && private_key.is_none() {
            problems.push(format!(
                "neither {} nor {} is set",
                network.mnemonic_var(),
                network.private_key_var()
            ));
        }
        if let Some(key) = private_key.as_deref() {
            if let Err(reason) = validate_private_key(key) {
                problems.push(format!("{} {reason}", network.private_key_var()));
            }
        }

        GasConfig::collect_problems(&self.env, &mut problems);
        problems
    }

    fn require(&self, key: &str) -> Result<String, ProbeError> {
        self.env
            .non_empty(key)
            .ok_or_else(|| ProbeError::Configuration(format!("{key} is not set")))
    }
}

/// Check that a private key is 32 bytes of hex, with or without `0x`
pub fn validate_private_key(key: &str) -> Result<(), String> {
    let digits = key.strip_prefix("0x").unwrap_or(key);
    let bytes = hex::decode(digits).map_err(|_| "is not valid hex".to_string())?;
    if bytes.len() != PRIVATE_KEY_BYTES {
        return Err(format!("must be {PRIVATE_KEY_BYTES} bytes, got {}", bytes.len()));
    }
    Ok(())
}
