use serde_json::json;

use crate::{
    constant::{
        BLOCK_TAG_FIRST, BLOCK_TAG_LATEST, INVALID_PARAMS_CODE, METHOD_V1_GET_BALANCE,
        METHOD_V1_GET_BALANCE_BY_BLOCK_NUMBER, METHOD_V1_GET_TRANSACTION_COUNT,
        METHOD_V2_GET_BALANCE, METHOD_V2_GET_BALANCE_BY_BLOCK_NUMBER,
        METHOD_V2_GET_TRANSACTION_COUNT,
    },
    harness::scenario::{Expectation, Scenario},
    rpc::RpcMethod,
};

/// The account-method suite: positive and missing-parameter checks for the
/// balance and nonce methods of both families.
pub fn account_method_scenarios(address: &str) -> Vec<Scenario> {
    let invalid = Expectation::ErrorCode(INVALID_PARAMS_CODE);
    let typed = Expectation::ResultForMethod;

    vec![
        Scenario::new("no params", METHOD_V2_GET_BALANCE, vec![], invalid),
        Scenario::new("valid address", METHOD_V2_GET_BALANCE, vec![json!(address)], typed),
        Scenario::new(
            "address and block number",
            METHOD_V2_GET_BALANCE_BY_BLOCK_NUMBER,
            vec![json!(address), json!(1)],
            typed,
        ),
        Scenario::new(
            "missing block number",
            METHOD_V2_GET_BALANCE_BY_BLOCK_NUMBER,
            vec![json!(address)],
            invalid,
        ),
        Scenario::new("no params", METHOD_V1_GET_BALANCE, vec![], invalid),
        Scenario::new("missing block tag", METHOD_V1_GET_BALANCE, vec![json!(address)], invalid),
        Scenario::new(
            "address and block tag",
            METHOD_V1_GET_BALANCE,
            vec![json!(address), json!(BLOCK_TAG_FIRST)],
            typed,
        ),
        Scenario::new(
            "address and block number",
            METHOD_V1_GET_BALANCE_BY_BLOCK_NUMBER,
            vec![json!(address), json!(BLOCK_TAG_FIRST)],
            typed,
        ),
        Scenario::new(
            "missing block number",
            METHOD_V1_GET_BALANCE_BY_BLOCK_NUMBER,
            vec![json!(address)],
            invalid,
        ),
        Scenario::new(
            "address and latest",
            METHOD_V1_GET_TRANSACTION_COUNT,
            vec![json!(address), json!(BLOCK_TAG_LATEST)],
            typed,
        ),
        Scenario::new(
            "missing block tag",
            METHOD_V1_GET_TRANSACTION_COUNT,
            vec![json!(address)],
            invalid,
        ),
        Scenario::new(
            "address and block number",
            METHOD_V2_GET_TRANSACTION_COUNT,
            vec![json!(address), json!(1)],
            typed,
        ),
        Scenario::new(
            "missing block number",
            METHOD_V2_GET_TRANSACTION_COUNT,
            vec![json!(address)],
            invalid,
        ),
    ]
}

/// Block number, gas price and epoch for both families. None of them take
/// parameters.
pub fn protocol_method_scenarios() -> Vec<Scenario> {
    RpcMethod::PROTOCOL
        .iter()
        .map(|method| {
            Scenario::new("no params", method.name(), vec![], Expectation::ResultForMethod)
        })
        .collect()
}

/// Everything `run` executes: the account suite followed by the protocol suite
pub fn full_suite(address: &str) -> Vec<Scenario> {
    let mut scenarios = account_method_scenarios(address);
    scenarios.extend(protocol_method_scenarios());
    scenarios
}
