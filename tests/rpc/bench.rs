use crate::common::*;
use hmy_probe_lib::{
    bench::{Benchmarker, StressReport},
    rpc::{JsonRpcRequest, RpcMethod},
};
use tempfile::TempDir;

/// Every benchmarked request succeeds against a healthy node
#[tokio::test]
async fn test_bench_get_balance_v2() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let method = RpcMethod::GetBalanceV2;
    let request = JsonRpcRequest::new(method.name(), method.default_params(&ctx.address));

    let bench = Benchmarker::new(20, 4).expect("Failed to create benchmarker");
    let summary = bench.run(ctx.transport.clone(), &request).await;

    assert_eq!(summary.processed, 20);
    assert_eq!(summary.failures, 0);
}

/// Requests answered with an error object count as failures
#[tokio::test]
async fn test_bench_counts_rpc_errors() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let request = JsonRpcRequest::new("hmy_getBalance", vec![]);

    let bench = Benchmarker::new(8, 8).expect("Failed to create benchmarker");
    let summary = bench.run(ctx.transport.clone(), &request).await;

    assert_eq!(summary.processed, 8);
    assert_eq!(summary.failures, 8);
}

/// Stressing every method against a healthy node yields no failures
#[tokio::test]
async fn test_stress_all_methods() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let bench = Benchmarker::new(5, 5).expect("Failed to create benchmarker");

    let report = bench.stress(ctx.transport.clone(), &RpcMethod::ALL, &ctx.address).await;

    assert_eq!(report.methods.len(), RpcMethod::ALL.len());
    assert_eq!(report.total_failures(), 0);
    assert!(report.methods.values().all(|m| m.responses == 5));

    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("stress-result.json");
    report.write_to(&path).expect("Failed to write stress report");
    let written: StressReport =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("Failed to read report"))
            .expect("Stress report is not valid JSON");
    assert_eq!(written, report);
}
