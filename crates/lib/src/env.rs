use std::collections::HashMap;

use crate::constant::ENVIRONMENT_ENV;

/// Read-only view of environment variables.
///
/// Resolution code takes this instead of calling `std::env` directly so the
/// same inputs always produce the same outputs and tests never have to touch
/// the process environment.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;

    /// Like `var`, but treats empty and whitespace-only values as unset
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
    }
}

/// The process environment at call time
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Dotenv file for the deployment environment named by `RPCTESTER_ENVIRONMENT`
pub fn environment_file_name(environment: Option<&str>) -> &'static str {
    match environment {
        Some("production") => ".env-prod",
        Some("dev") => ".env-dev",
        Some("test") => ".env-test",
        _ => ".env",
    }
}

/// Load the dotenv file matching the selected environment into the process
/// environment. Variables already set are left untouched; a missing file is
/// not an error.
pub fn load_environment_file() -> Option<std::path::PathBuf> {
    let environment = ProcessEnv.non_empty(ENVIRONMENT_ENV);
    let file_name = environment_file_name(environment.as_deref());
    match dotenv::from_filename(file_name) {
        Ok(path) => {
            log::debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) => {
            log::debug!("No environment file {file_name} loaded: {e}");
            None
        }
    }
}
