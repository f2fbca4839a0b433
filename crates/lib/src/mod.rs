pub mod bench;
pub mod config;
pub mod constant;
pub mod env;
pub mod error;
pub mod harness;
pub mod log;
pub mod profile;
pub mod rpc;
pub mod sanitize;
pub mod validator;
pub use config::Config;
pub use error::ProbeError;
pub use harness::{
    account_method_scenarios, full_suite, protocol_method_scenarios, HarnessOptions, RpcHarness,
    TestReport,
};
pub use profile::{NetworkName, NetworkProfile, ProfileResolver};
pub use rpc::{get_transport, HttpTransport, RpcTransport};
