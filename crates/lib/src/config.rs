use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

use crate::{
    constant::{
        ADDRESS_ENV, DEFAULT_BENCH_MAX_CONCURRENT, DEFAULT_BENCH_REQUESTS, DEFAULT_NET_URL,
        DEFAULT_REPORT_PATH, DEFAULT_REQUEST_TIMEOUT_SECS, METHOD_V2_GET_BALANCE, NET_URL_ENV,
    },
    env::EnvSource,
    error::ProbeError,
    sanitize_error,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub harness: HarnessConfig,
    #[serde(default)]
    pub bench: BenchConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HarnessConfig {
    #[serde(default = "default_net_url")]
    pub net_url: String,
    /// Account whose balance the suite queries
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_report_path")]
    pub report_path: String,
    /// Fail scenarios whose response carries both or neither of result/error
    #[serde(default)]
    pub strict_envelope: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            net_url: default_net_url(),
            address: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            report_path: default_report_path(),
            strict_envelope: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    #[serde(default = "default_bench_method")]
    pub method: String,
    #[serde(default = "default_bench_requests")]
    pub requests: usize,
    #[serde(default = "default_bench_max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            method: default_bench_method(),
            requests: DEFAULT_BENCH_REQUESTS,
            max_concurrent: DEFAULT_BENCH_MAX_CONCURRENT,
        }
    }
}

fn default_net_url() -> String {
    DEFAULT_NET_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_report_path() -> String {
    DEFAULT_REPORT_PATH.to_string()
}

fn default_bench_method() -> String {
    METHOD_V2_GET_BALANCE.to_string()
}

fn default_bench_requests() -> usize {
    DEFAULT_BENCH_REQUESTS
}

fn default_bench_max_concurrent() -> usize {
    DEFAULT_BENCH_MAX_CONCURRENT
}

impl Config {
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ProbeError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ProbeError::Configuration(format!("Failed to read config file: {}", sanitize_error!(e)))
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            ProbeError::Configuration(format!(
                "Failed to parse config file: {}",
                sanitize_error!(e)
            ))
        })?;

        Ok(config)
    }

    /// Load the file if given, otherwise start from defaults
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Config, ProbeError> {
        match path {
            Some(path) => Self::load_config(path),
            None => Ok(Config::default()),
        }
    }

    /// Environment values always win over file values
    pub fn with_env_overrides(mut self, env: &impl EnvSource) -> Self {
        if let Some(url) = env.non_empty(NET_URL_ENV) {
            self.harness.net_url = url;
        }
        if let Some(address) = env.non_empty(ADDRESS_ENV) {
            self.harness.address = Some(address);
        }
        self
    }
}

impl HarnessConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn require_address(&self) -> Result<&str, ProbeError> {
        self.address.as_deref().ok_or_else(|| {
            ProbeError::Configuration(format!(
                "No account address configured: set {ADDRESS_ENV} or harness.address"
            ))
        })
    }
}
