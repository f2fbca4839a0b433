use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    constant::{MNEMONIC_SUFFIX, PRIVATE_KEY_SUFFIX, SHARD_0_URL_SUFFIX},
    error::ProbeError,
};

/// Networks a deployment profile can be resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkName {
    Localnet,
    Devnet,
    Mainnet0,
}

impl NetworkName {
    pub const ALL: [NetworkName; 3] =
        [NetworkName::Localnet, NetworkName::Devnet, NetworkName::Mainnet0];

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkName::Localnet => "localnet",
            NetworkName::Devnet => "devnet",
            NetworkName::Mainnet0 => "mainnet0",
        }
    }

    /// Prefix of this network's environment variables
    pub fn env_prefix(&self) -> &'static str {
        match self {
            NetworkName::Localnet => "LOCAL",
            NetworkName::Devnet => "DEVNET",
            NetworkName::Mainnet0 => "MAINNET",
        }
    }

    pub fn network_id(&self) -> &'static str {
        match self {
            NetworkName::Localnet | NetworkName::Devnet => "2",
            NetworkName::Mainnet0 => "1",
        }
    }

    pub fn shard_id(&self) -> u32 {
        0
    }

    pub fn chain_id(&self) -> u32 {
        match self {
            NetworkName::Localnet | NetworkName::Devnet => 2,
            NetworkName::Mainnet0 => 1,
        }
    }

    pub fn mnemonic_var(&self) -> String {
        format!("{}_{MNEMONIC_SUFFIX}", self.env_prefix())
    }

    pub fn private_key_var(&self) -> String {
        format!("{}_{PRIVATE_KEY_SUFFIX}", self.env_prefix())
    }

    pub fn url_var(&self) -> String {
        format!("{}_{SHARD_0_URL_SUFFIX}", self.env_prefix())
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkName {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkName::ALL
            .iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ProbeError::Configuration(format!("Unknown network: {s}")))
    }
}
