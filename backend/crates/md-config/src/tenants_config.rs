use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;
use url::Url;

/// API and account-executive origins for one tenant
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TenantUrlsConfig {
    pub api_base_url: String,
    pub ae_base_url: String,
}

/// Per-tenant backend origins. `default` serves tokens without a recognized marker.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TenantsConfig {
    pub default: TenantUrlsConfig,
    pub wsc: TenantUrlsConfig,
    pub ameritrust: TenantUrlsConfig,
}

impl TenantsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, urls) in self.entries() {
            validate_base_url(&format!("tenants.{}.api_base_url", name), &urls.api_base_url)
                .map_err(ConfigError::tenant)?;
            validate_base_url(&format!("tenants.{}.ae_base_url", name), &urls.ae_base_url)
                .map_err(ConfigError::tenant)?;
        }
        Ok(())
    }

    /// Fields left empty, as dotted config keys
    pub fn unset_fields(&self) -> Vec<String> {
        let mut unset = Vec::new();
        for (name, urls) in self.entries() {
            if urls.api_base_url.is_empty() {
                unset.push(format!("tenants.{}.api_base_url", name));
            }
            if urls.ae_base_url.is_empty() {
                unset.push(format!("tenants.{}.ae_base_url", name));
            }
        }
        unset
    }

    fn entries(&self) -> [(&'static str, &TenantUrlsConfig); 3] {
        [
            ("default", &self.default),
            ("wsc", &self.wsc),
            ("ameritrust", &self.ameritrust),
        ]
    }
}

/// Empty is allowed (unset backend); anything else must be an absolute http(s) URL.
pub(crate) fn validate_base_url(key: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }

    let url = Url::parse(value).map_err(|e| format!("{} is not a valid URL: {}", key, e))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!("{} must use http or https, got '{}'", key, scheme)),
    }
}
