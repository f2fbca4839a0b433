use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    error::ProbeError,
    harness::{metric::TestMetric, runner::ScenarioOutcome},
    sanitize_error,
};

/// Report of a suite run, written as `results.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    pub address_used: String,
    pub network: String,
    pub generated_at: String,
    pub metrics: Vec<TestMetric>,
}

impl TestReport {
    /// `network` is stored with any embedded credentials redacted
    pub fn from_outcomes(address: &str, network: &str, outcomes: &[ScenarioOutcome]) -> Self {
        Self {
            address_used: address.to_string(),
            network: sanitize_error!(network),
            generated_at: chrono::Utc::now().to_rfc3339(),
            metrics: outcomes.iter().map(|o| o.metric.clone()).collect(),
        }
    }

    /// (passed, failed)
    pub fn summary(&self) -> (usize, usize) {
        let passed = self.metrics.iter().filter(|m| m.pass).count();
        (passed, self.metrics.len() - passed)
    }

    pub fn all_passed(&self) -> bool {
        self.metrics.iter().all(|m| m.pass)
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ProbeError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Report written to {}", path.as_ref().display());
        Ok(())
    }
}
