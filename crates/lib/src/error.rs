use crate::sanitize::sanitize_message;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub enum ProbeError {
    #[error("RPC error {code}: {message}")]
    RpcProtocol { code: i64, message: String },

    #[error("Assertion failed: {0}")]
    Assertion(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl ProbeError {
    /// JSON-RPC error code carried by this error, if the node returned one
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            ProbeError::RpcProtocol { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ProbeError::Configuration(_))
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            format!("request timed out: {e}")
        } else {
            e.to_string()
        };
        #[cfg(feature = "unsafe-debug")]
        {
            ProbeError::Transport(message)
        }
        #[cfg(not(feature = "unsafe-debug"))]
        {
            ProbeError::Transport(sanitize_message(&message))
        }
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(_e: serde_json::Error) -> Self {
        #[cfg(feature = "unsafe-debug")]
        {
            ProbeError::Serialization(_e.to_string())
        }
        #[cfg(not(feature = "unsafe-debug"))]
        {
            ProbeError::Serialization(sanitize_message(&_e.to_string()))
        }
    }
}

impl From<toml::de::Error> for ProbeError {
    fn from(_e: toml::de::Error) -> Self {
        #[cfg(feature = "unsafe-debug")]
        {
            ProbeError::Configuration(_e.to_string())
        }
        #[cfg(not(feature = "unsafe-debug"))]
        {
            ProbeError::Configuration(sanitize_message(&_e.to_string()))
        }
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(_e: std::io::Error) -> Self {
        #[cfg(feature = "unsafe-debug")]
        {
            ProbeError::Io(_e.to_string())
        }
        #[cfg(not(feature = "unsafe-debug"))]
        {
            ProbeError::Io(sanitize_message(&_e.to_string()))
        }
    }
}
