use std::{sync::Arc, time::Instant};
use tracing::Instrument;

use crate::{
    error::ProbeError,
    harness::{metric::TestMetric, scenario::Scenario},
    rpc::{JsonRpcResponse, RpcTransport},
    sanitize_error,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarnessOptions {
    /// Require exactly one of `result`/`error` in every response
    pub strict_envelope: bool,
}

/// Result of running one scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub metric: TestMetric,
    pub error: Option<ProbeError>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs scenarios against a node through an injected transport
pub struct RpcHarness<T: RpcTransport + ?Sized> {
    transport: Arc<T>,
    options: HarnessOptions,
}

impl<T: RpcTransport + ?Sized> RpcHarness<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self::with_options(transport, HarnessOptions::default())
    }

    pub fn with_options(transport: Arc<T>, options: HarnessOptions) -> Self {
        Self { transport, options }
    }

    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    pub async fn run_scenario(&self, scenario: &Scenario) -> ScenarioOutcome {
        let span = tracing::info_span!(
            "scenario",
            method = %scenario.method(),
            test = %scenario.name,
        );

        async {
            let start = Instant::now();
            let sent = self.transport.send(&scenario.request).await;
            let (duration, result) = match sent {
                Ok(timed) => (timed.duration, self.verify(scenario, &timed.response)),
                // No round-trip was timed; fall back to the wall clock around send
                Err(e) => (start.elapsed(), Err(e)),
            };
            log::info!("{}: {} ms", scenario.method(), duration.as_millis());

            let request = &scenario.request;
            match result {
                Ok(()) => ScenarioOutcome {
                    metric: TestMetric::passed(
                        &request.method,
                        &scenario.name,
                        duration,
                        &request.params,
                    ),
                    error: None,
                },
                Err(e) => {
                    log::warn!("{} failed: {}", scenario.name, sanitize_error!(e));
                    ScenarioOutcome {
                        metric: TestMetric::failed(
                            &request.method,
                            &scenario.name,
                            duration,
                            &request.params,
                            sanitize_error!(e),
                        ),
                        error: Some(e),
                    }
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Run scenarios one after another, in order
    pub async fn run_all(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        let mut outcomes = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            outcomes.push(self.run_scenario(scenario).await);
        }
        outcomes
    }

    fn verify(&self, scenario: &Scenario, response: &JsonRpcResponse) -> Result<(), ProbeError> {
        if self.options.strict_envelope && !response.has_valid_envelope() {
            return Err(ProbeError::Assertion(
                "response must carry exactly one of result or error".to_string(),
            ));
        }
        scenario.expectation.check(scenario.method(), response)
    }
}
