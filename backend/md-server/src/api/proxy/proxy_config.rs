use std::time::Duration;

/// Settings shared by every proxy route
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Tenant-independent marketing API origin; empty when unset
    pub marketing_api_url: String,
    pub timeout: Duration,
}

impl ProxyConfig {
    pub fn new(marketing_api_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            marketing_api_url: marketing_api_url.into(),
            timeout,
        }
    }
}

impl From<&md_config::BackendsConfig> for ProxyConfig {
    fn from(config: &md_config::BackendsConfig) -> Self {
        Self::new(config.marketing_api_url.clone(), config.timeout())
    }
}
