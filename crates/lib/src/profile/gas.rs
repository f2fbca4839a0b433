use serde::{Deserialize, Serialize};

use crate::{
    constant::{GAS_LIMIT_ENV, GAS_PRICE_ENV},
    env::EnvSource,
    error::ProbeError,
};

/// Gas settings shared by every network profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasConfig {
    pub gas_limit: u64,
    pub gas_price: u64,
}

impl GasConfig {
    pub fn from_env(env: &impl EnvSource) -> Result<Self, ProbeError> {
        let mut problems = Vec::new();
        let gas_limit = read_u64(env, GAS_LIMIT_ENV, &mut problems);
        let gas_price = read_u64(env, GAS_PRICE_ENV, &mut problems);

        match (gas_limit, gas_price) {
            (Some(gas_limit), Some(gas_price)) => Ok(Self { gas_limit, gas_price }),
            _ => Err(ProbeError::Configuration(problems.join("; "))),
        }
    }

    /// Record every gas problem without stopping at the first one
    pub(crate) fn collect_problems(env: &impl EnvSource, problems: &mut Vec<String>) {
        read_u64(env, GAS_LIMIT_ENV, problems);
        read_u64(env, GAS_PRICE_ENV, problems);
    }
}

fn read_u64(env: &impl EnvSource, key: &str, problems: &mut Vec<String>) -> Option<u64> {
    let Some(raw) = env.non_empty(key) else {
        problems.push(format!("{key} is not set"));
        return None;
    };
    match raw.parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            problems.push(format!("{key} is not a non-negative integer: {raw}"));
            None
        }
    }
}
