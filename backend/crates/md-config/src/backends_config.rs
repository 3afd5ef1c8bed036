use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BACKEND_TIMEOUT_SECS, MAX_BACKEND_TIMEOUT_SECS,
    MIN_BACKEND_TIMEOUT_SECS, tenants_config::validate_base_url,
};

use std::time::Duration;

use serde::Deserialize;

/// Backends that are not tenant-specific
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendsConfig {
    pub marketing_api_url: String,
    /// Timeout applied to every proxied upstream call
    pub timeout_secs: u64,
}

impl Default for BackendsConfig {
    fn default() -> Self {
        Self {
            marketing_api_url: String::new(),
            timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
        }
    }
}

impl BackendsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_BACKEND_TIMEOUT_SECS..=MAX_BACKEND_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::backend(format!(
                "backends.timeout_secs must be {}-{}, got {}",
                MIN_BACKEND_TIMEOUT_SECS, MAX_BACKEND_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        validate_base_url("backends.marketing_api_url", &self.marketing_api_url)
            .map_err(ConfigError::backend)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
