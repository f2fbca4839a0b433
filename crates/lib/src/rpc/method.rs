use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::{fmt, str::FromStr};

use crate::{
    constant::{
        BLOCK_TAG_FIRST, BLOCK_TAG_LATEST, LEGACY_METHOD_PREFIX, METHOD_V1_BLOCK_NUMBER,
        METHOD_V1_GAS_PRICE, METHOD_V1_GET_BALANCE, METHOD_V1_GET_BALANCE_BY_BLOCK_NUMBER,
        METHOD_V1_GET_EPOCH, METHOD_V1_GET_TRANSACTION_COUNT, METHOD_V2_BLOCK_NUMBER,
        METHOD_V2_GAS_PRICE, METHOD_V2_GET_BALANCE, METHOD_V2_GET_BALANCE_BY_BLOCK_NUMBER,
        METHOD_V2_GET_EPOCH, METHOD_V2_GET_TRANSACTION_COUNT, V2_METHOD_PREFIX,
    },
    error::ProbeError,
};

/// API generation of a method. The two families differ in parameter
/// requirements and in how quantities are encoded in results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodFamily {
    /// `hmy_*`: explicit block reference required, quantities as hex strings
    Legacy,
    /// `hmyv2_*`: block defaults to latest, quantities as JSON numbers
    V2,
}

impl MethodFamily {
    pub fn from_method_name(name: &str) -> Option<Self> {
        // hmyv2_ also starts with hmy, so check it first
        if name.starts_with(V2_METHOD_PREFIX) {
            Some(MethodFamily::V2)
        } else if name.starts_with(LEGACY_METHOD_PREFIX) {
            Some(MethodFamily::Legacy)
        } else {
            None
        }
    }

    pub fn expected_result(&self) -> ResultKind {
        match self {
            MethodFamily::Legacy => ResultKind::String,
            MethodFamily::V2 => ResultKind::Number,
        }
    }
}

/// Primitive JSON type a result is expected to have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    String,
    Number,
}

impl ResultKind {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ResultKind::String => value.is_string(),
            ResultKind::Number => value.is_number(),
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultKind::String => write!(f, "string"),
            ResultKind::Number => write!(f, "number"),
        }
    }
}

/// Describe the JSON type of a value for assertion messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RpcMethod {
    GetBalanceV1,
    GetBalanceV2,
    GetBalanceByBlockNumberV1,
    GetBalanceByBlockNumberV2,
    GetTransactionCountV1,
    GetTransactionCountV2,
    BlockNumberV1,
    BlockNumberV2,
    GasPriceV1,
    GasPriceV2,
    GetEpochV1,
    GetEpochV2,
}

impl RpcMethod {
    /// Methods that query a single account
    pub const ACCOUNT: [RpcMethod; 6] = [
        RpcMethod::GetBalanceV1,
        RpcMethod::GetBalanceV2,
        RpcMethod::GetBalanceByBlockNumberV1,
        RpcMethod::GetBalanceByBlockNumberV2,
        RpcMethod::GetTransactionCountV1,
        RpcMethod::GetTransactionCountV2,
    ];

    /// Parameterless chain-state methods
    pub const PROTOCOL: [RpcMethod; 6] = [
        RpcMethod::BlockNumberV1,
        RpcMethod::BlockNumberV2,
        RpcMethod::GasPriceV1,
        RpcMethod::GasPriceV2,
        RpcMethod::GetEpochV1,
        RpcMethod::GetEpochV2,
    ];

    pub const ALL: [RpcMethod; 12] = [
        RpcMethod::GetBalanceV1,
        RpcMethod::GetBalanceV2,
        RpcMethod::GetBalanceByBlockNumberV1,
        RpcMethod::GetBalanceByBlockNumberV2,
        RpcMethod::GetTransactionCountV1,
        RpcMethod::GetTransactionCountV2,
        RpcMethod::BlockNumberV1,
        RpcMethod::BlockNumberV2,
        RpcMethod::GasPriceV1,
        RpcMethod::GasPriceV2,
        RpcMethod::GetEpochV1,
        RpcMethod::GetEpochV2,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RpcMethod::GetBalanceV1 => METHOD_V1_GET_BALANCE,
            RpcMethod::GetBalanceV2 => METHOD_V2_GET_BALANCE,
            RpcMethod::GetBalanceByBlockNumberV1 => METHOD_V1_GET_BALANCE_BY_BLOCK_NUMBER,
            RpcMethod::GetBalanceByBlockNumberV2 => METHOD_V2_GET_BALANCE_BY_BLOCK_NUMBER,
            RpcMethod::GetTransactionCountV1 => METHOD_V1_GET_TRANSACTION_COUNT,
            RpcMethod::GetTransactionCountV2 => METHOD_V2_GET_TRANSACTION_COUNT,
            RpcMethod::BlockNumberV1 => METHOD_V1_BLOCK_NUMBER,
            RpcMethod::BlockNumberV2 => METHOD_V2_BLOCK_NUMBER,
            RpcMethod::GasPriceV1 => METHOD_V1_GAS_PRICE,
            RpcMethod::GasPriceV2 => METHOD_V2_GAS_PRICE,
            RpcMethod::GetEpochV1 => METHOD_V1_GET_EPOCH,
            RpcMethod::GetEpochV2 => METHOD_V2_GET_EPOCH,
        }
    }

    pub fn family(&self) -> MethodFamily {
        match self {
            RpcMethod::GetBalanceV1
            | RpcMethod::GetBalanceByBlockNumberV1
            | RpcMethod::GetTransactionCountV1
            | RpcMethod::BlockNumberV1
            | RpcMethod::GasPriceV1
            | RpcMethod::GetEpochV1 => MethodFamily::Legacy,
            RpcMethod::GetBalanceV2
            | RpcMethod::GetBalanceByBlockNumberV2
            | RpcMethod::GetTransactionCountV2
            | RpcMethod::BlockNumberV2
            | RpcMethod::GasPriceV2
            | RpcMethod::GetEpochV2 => MethodFamily::V2,
        }
    }

    pub fn expected_result(&self) -> ResultKind {
        self.family().expected_result()
    }

    pub fn is_account_method(&self) -> bool {
        RpcMethod::ACCOUNT.contains(self)
    }

    /// Well-formed parameters for this method. `address` is only used by
    /// account methods.
    pub fn default_params(&self, address: &str) -> Vec<Value> {
        match self {
            RpcMethod::GetBalanceV2 => vec![json!(address)],
            RpcMethod::GetBalanceByBlockNumberV1 => vec![json!(address), json!(BLOCK_TAG_FIRST)],
            RpcMethod::GetBalanceByBlockNumberV2 | RpcMethod::GetTransactionCountV2 => {
                vec![json!(address), json!(1)]
            }
            RpcMethod::GetBalanceV1 | RpcMethod::GetTransactionCountV1 => {
                vec![json!(address), json!(BLOCK_TAG_LATEST)]
            }
            RpcMethod::BlockNumberV1
            | RpcMethod::BlockNumberV2
            | RpcMethod::GasPriceV1
            | RpcMethod::GasPriceV2
            | RpcMethod::GetEpochV1
            | RpcMethod::GetEpochV2 => vec![],
        }
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RpcMethod {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RpcMethod::ALL
            .iter()
            .find(|m| m.name() == s)
            .copied()
            .ok_or_else(|| ProbeError::Configuration(format!("Unknown RPC method: {s}")))
    }
}
