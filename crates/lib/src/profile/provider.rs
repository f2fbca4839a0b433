use crate::{
    error::ProbeError,
    profile::{
        gas::GasConfig,
        resolver::{Credential, NetworkProfile},
    },
};

/// Shard and chain a provider should target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainOptions {
    pub shard_id: u32,
    pub chain_id: u32,
}

/// A deployment provider, supplied by the caller.
pub trait Provider {
    type Account;

    fn add_credential(&mut self, private_key: &str) -> Result<Self::Account, ProbeError>;

    fn set_signer(&mut self, account: Self::Account);
}

/// Constructs providers. This crate never talks to the network itself.
pub trait ProviderFactory {
    type Provider: Provider;

    fn connect(
        &self,
        endpoint_url: &str,
        credential: &Credential,
        chain: ChainOptions,
        gas: GasConfig,
    ) -> Result<Self::Provider, ProbeError>;
}

impl NetworkProfile {
    pub fn chain_options(&self) -> ChainOptions {
        ChainOptions { shard_id: self.shard_id(), chain_id: self.chain_id() }
    }
}

/// Connect a provider for the profile and, when a private key is present,
/// import it and make it the signer.
pub fn build_provider<F: ProviderFactory>(
    profile: &NetworkProfile,
    factory: &F,
) -> Result<F::Provider, ProbeError> {
    let mut provider = factory.connect(
        profile.endpoint_url(),
        profile.credential(),
        profile.chain_options(),
        profile.gas(),
    )?;

    if let Some(private_key) = profile.credential().private_key() {
        let account = provider.add_credential(private_key)?;
        provider.set_signer(account);
    } else {
        log::debug!("{}: no private key, signer left to mnemonic", profile.network());
    }

    Ok(provider)
}
