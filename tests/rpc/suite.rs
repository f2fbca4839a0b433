use crate::common::*;
use hmy_probe_lib::{
    account_method_scenarios, full_suite,
    harness::{Expectation, Scenario},
    TestReport,
};
use serde_json::json;
use tempfile::TempDir;

/// The full account-method suite passes against a well-behaved node
#[tokio::test]
async fn test_account_method_suite_passes() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let harness = ctx.harness();

    let outcomes = harness.run_all(&account_method_scenarios(&ctx.address)).await;

    assert_eq!(outcomes.len(), 13);
    for outcome in &outcomes {
        assert!(outcome.passed(), "Scenario failed: {:?}", outcome.metric);
    }
}

/// Account and protocol suites together, as `run` executes them
#[tokio::test]
async fn test_full_suite_passes() {
    let ctx = TestContext::new().await.expect("Failed to create test context");

    let outcomes = ctx.harness().run_all(&full_suite(&ctx.address)).await;

    assert_eq!(outcomes.len(), 19);
    for outcome in &outcomes {
        assert!(outcome.passed(), "Scenario failed: {:?}", outcome.metric);
    }
}

/// A well-behaved node also satisfies the strict envelope check
#[tokio::test]
async fn test_account_method_suite_strict_envelope() {
    let ctx = TestContext::new().await.expect("Failed to create test context");

    let outcomes =
        ctx.strict_harness().run_all(&account_method_scenarios(&ctx.address)).await;

    assert!(outcomes.iter().all(|o| o.passed()));
}

/// A wrong expectation fails only its own scenario
#[tokio::test]
async fn test_mismatched_expectation_is_reported() {
    let ctx = TestContext::with_fake_node().await.expect("Failed to create test context");
    let harness = ctx.harness();

    let scenarios = vec![
        Scenario::new(
            "string expected from v2",
            "hmyv2_getBalance",
            vec![json!(ctx.address)],
            Expectation::Result(hmy_probe_lib::rpc::ResultKind::String),
        ),
        Scenario::new("no params", "hmyv2_getBalance", vec![], Expectation::ErrorCode(-32602)),
    ];
    let outcomes = harness.run_all(&scenarios).await;

    assert!(!outcomes[0].passed());
    assert_eq!(
        outcomes[0].metric.error.as_deref(),
        Some("Assertion failed: expected string result, got number")
    );
    assert!(outcomes[1].passed());
}

/// An unreachable node fails every scenario without aborting the run
#[tokio::test]
async fn test_unreachable_node_fails_each_scenario() {
    // Nothing listens on the discard port
    let transport =
        hmy_probe_lib::get_transport("http://127.0.0.1:9", std::time::Duration::from_secs(2))
            .expect("Failed to create transport");
    let harness = hmy_probe_lib::RpcHarness::new(transport);

    let outcomes = harness.run_all(&account_method_scenarios(TEST_ADDRESS)).await;

    assert_eq!(outcomes.len(), 13);
    assert!(outcomes.iter().all(|o| !o.passed()));
}

/// The run report is written as results.json with camelCase fields
#[tokio::test]
async fn test_report_written() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let outcomes = ctx.harness().run_all(&account_method_scenarios(&ctx.address)).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("results.json");
    let report = TestReport::from_outcomes(&ctx.address, &ctx.server_url, &outcomes);
    report.write_to(&path).expect("Failed to write report");

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("Failed to read report"))
            .expect("Report is not JSON");
    assert_eq!(written["addressUsed"], json!(ctx.address));
    assert_eq!(written["network"], json!(ctx.server_url));
    assert_eq!(written["metrics"].as_array().map(Vec::len), Some(13));
    assert_eq!(report.summary(), (13, 0));
}
