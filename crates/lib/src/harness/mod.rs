pub mod metric;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod suite;

pub use metric::TestMetric;
pub use report::TestReport;
pub use runner::{HarnessOptions, RpcHarness, ScenarioOutcome};
pub use scenario::{Expectation, Scenario};
pub use suite::{account_method_scenarios, full_suite, protocol_method_scenarios};
