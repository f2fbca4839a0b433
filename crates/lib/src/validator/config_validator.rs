use reqwest::Url;

use crate::{
    config::Config,
    env::EnvSource,
    profile::{NetworkName, ProfileResolver},
    rpc::RpcMethod,
};

pub struct ConfigValidator {}

impl ConfigValidator {
    fn validate_net_url(net_url: &str, errors: &mut Vec<String>) {
        match Url::parse(net_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(format!(
                "harness.net_url must use http or https, got scheme '{}'",
                url.scheme()
            )),
            Err(e) => errors.push(format!("harness.net_url is not a valid URL: {e}")),
        }
    }

    /// Check a loaded config, and optionally the network profiles of an
    /// environment. Returns warnings on success, errors on failure.
    pub fn validate_with_result<E: EnvSource>(
        config: &Config,
        resolver: Option<&ProfileResolver<E>>,
    ) -> Result<Vec<String>, Vec<String>> {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        Self::validate_net_url(&config.harness.net_url, &mut errors);

        if config.harness.request_timeout_secs == 0 {
            errors.push("harness.request_timeout_secs must be greater than 0".to_string());
        }

        if config.harness.report_path.trim().is_empty() {
            errors.push("harness.report_path must not be empty".to_string());
        }

        if config.harness.address.is_none() {
            warnings.push(
                "No account address configured - `run` needs ADDRESS or --address".to_string(),
            );
        }

        if config.bench.max_concurrent == 0 {
            errors.push("bench.max_concurrent must be greater than 0".to_string());
        } else if config.bench.max_concurrent > config.bench.requests {
            warnings.push(format!(
                "bench.max_concurrent ({}) exceeds bench.requests ({})",
                config.bench.max_concurrent, config.bench.requests
            ));
        }

        if config.bench.requests == 0 {
            warnings.push("bench.requests is 0 - benchmarks will send nothing".to_string());
        }

        if config.bench.method.parse::<RpcMethod>().is_err() {
            warnings.push(format!(
                "bench.method '{}' is not a known account method",
                config.bench.method
            ));
        }

        if let Some(resolver) = resolver {
            for network in NetworkName::ALL {
                for problem in resolver.validate(network) {
                    warnings.push(format!("{network}: {problem}"));
                }
            }
        } else {
            println!("ℹ️  Network profiles not validated. Use `profile check` to validate them");
        }

        println!("=== Configuration Validation ===");
        if errors.is_empty() {
            println!("✓ Configuration validation successful!");
        } else {
            println!("✗ Configuration validation failed!");
            println!("\n❌ Errors:");
            for error in &errors {
                println!("   - {error}");
            }
        }

        if !warnings.is_empty() {
            println!("\n⚠️  Warnings:");
            for warning in &warnings {
                println!("   - {warning}");
            }
        }

        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(errors)
        }
    }
}
