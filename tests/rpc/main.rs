// RPC Integration Tests
//
// NODE: In-process fake node by default; set TEST_SERVER_URL (and ADDRESS)
//       to run the same checks against a live node.
// TESTS: Account and protocol methods of both API families
//        - v2 methods (numeric results, block defaults to latest)
//        - legacy methods (hex string results, explicit block required)
//        - Protocol methods (block number, gas price, epoch)
//        - Full suite through the harness and the report
//        - Benchmarking with bounded concurrency and the stress report

mod bench;
mod suite;

// Make common utilities available
#[path = "../src/common/mod.rs"]
mod common;
