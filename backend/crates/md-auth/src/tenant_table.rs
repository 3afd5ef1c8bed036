use crate::{BackendUrls, Tenant};

/// Read-only mapping from tenant to backend origins.
///
/// Built once at startup and shared; every lookup is total because unknown
/// markers resolve to the default row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantTable {
    default: BackendUrls,
    wsc: BackendUrls,
    ameritrust: BackendUrls,
}

impl TenantTable {
    pub fn new(default: BackendUrls, wsc: BackendUrls, ameritrust: BackendUrls) -> Self {
        Self {
            default,
            wsc,
            ameritrust,
        }
    }

    pub fn urls(&self, tenant: Tenant) -> &BackendUrls {
        match tenant {
            Tenant::Default => &self.default,
            Tenant::Wsc => &self.wsc,
            Tenant::Ameritrust => &self.ameritrust,
        }
    }

    pub fn resolve_base_url(&self, marker: Option<&str>) -> &str {
        &self.urls(Tenant::from_marker(marker)).api_base_url
    }

    pub fn resolve_ae_url(&self, marker: Option<&str>) -> &str {
        &self.urls(Tenant::from_marker(marker)).ae_base_url
    }
}
