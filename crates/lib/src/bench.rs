use futures::{stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::Path,
    sync::Arc,
    time::{Duration, Instant},
};

use crate::{
    error::ProbeError,
    rpc::{JsonRpcRequest, RpcMethod, RpcTransport},
    sanitize_error,
};

/// Sends the same request many times with bounded concurrency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benchmarker {
    pub requests: usize,
    pub max_concurrent: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchSummary {
    pub processed: usize,
    pub failures: usize,
    /// Sum of per-request round-trip times
    pub total_duration: Duration,
    /// Wall-clock time for the whole run
    pub elapsed: Duration,
}

impl BenchSummary {
    /// Mean round-trip time over successful requests
    pub fn average(&self) -> Duration {
        let succeeded = self.processed.saturating_sub(self.failures);
        match u32::try_from(succeeded) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.total_duration / n,
        }
    }
}

/// Figures for one method in a stress report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MethodResult {
    /// Mean round-trip time, e.g. `"1.5ms"`
    pub average: String,
    pub responses: usize,
    pub failures: usize,
}

impl From<&BenchSummary> for MethodResult {
    fn from(summary: &BenchSummary) -> Self {
        Self {
            average: format!("{:?}", summary.average()),
            responses: summary.processed,
            failures: summary.failures,
        }
    }
}

/// Result of benchmarking every method in turn, written as `stress-result.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressReport {
    #[serde(rename = "addressUsed")]
    pub address_used: String,
    pub network: String,
    #[serde(rename = "Methods")]
    pub methods: BTreeMap<String, MethodResult>,
}

impl StressReport {
    pub fn total_failures(&self) -> usize {
        self.methods.values().map(|m| m.failures).sum()
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ProbeError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Stress report written to {}", path.as_ref().display());
        Ok(())
    }
}

impl Benchmarker {
    pub fn new(requests: usize, max_concurrent: usize) -> Result<Self, ProbeError> {
        if max_concurrent == 0 {
            return Err(ProbeError::Configuration(
                "max_concurrent must be greater than 0".to_string(),
            ));
        }
        Ok(Self { requests, max_concurrent })
    }

    pub async fn run<T: RpcTransport + ?Sized>(
        &self,
        transport: Arc<T>,
        request: &JsonRpcRequest,
    ) -> BenchSummary {
        let start = Instant::now();

        let mut summary = stream::iter(0..self.requests)
            .map(|_| {
                let transport = transport.clone();
                async move { transport.send(request).await }
            })
            .buffer_unordered(self.max_concurrent)
            .fold(BenchSummary::default(), |mut summary, result| async move {
                summary.processed += 1;
                match result {
                    Ok(timed) if !timed.response.is_error() => {
                        summary.total_duration += timed.duration;
                    }
                    Ok(timed) => {
                        summary.failures += 1;
                        let code = timed.response.error_code();
                        log::debug!("{} returned error {:?}", request.method, code);
                    }
                    Err(e) => {
                        summary.failures += 1;
                        log::debug!("{} failed: {}", request.method, e);
                    }
                }
                summary
            })
            .await;

        summary.elapsed = start.elapsed();
        log::info!(
            "Benchmarked {}: {} requests, {} failures, avg {} ms",
            request.method,
            summary.processed,
            summary.failures,
            summary.average().as_millis()
        );
        summary
    }

    /// Benchmark each method in order with its default parameters
    pub async fn stress<T: RpcTransport + ?Sized>(
        &self,
        transport: Arc<T>,
        methods: &[RpcMethod],
        address: &str,
    ) -> StressReport {
        let mut results = BTreeMap::new();
        for method in methods {
            let request = JsonRpcRequest::new(method.name(), method.default_params(address));
            let summary = self.run(Arc::clone(&transport), &request).await;
            results.insert(method.name().to_string(), MethodResult::from(&summary));
        }

        StressReport {
            address_used: address.to_string(),
            network: sanitize_error!(transport.endpoint()),
            methods: results,
        }
    }
}
