pub mod gas;
pub mod network;
pub mod provider;
pub mod resolver;

pub use gas::GasConfig;
pub use network::NetworkName;
pub use provider::{build_provider, ChainOptions, Provider, ProviderFactory};
pub use resolver::{validate_private_key, Credential, NetworkProfile, ProfileResolver};
