use crate::extract_tenant_marker;

use std::fmt;

pub const WSC_MARKER: &str = "wsc";
pub const AMERITRUST_MARKER: &str = "ameritrust";

/// Backend deployment a session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tenant {
    Default,
    Wsc,
    Ameritrust,
}

impl Tenant {
    /// Map a tenant marker to its tenant. Unknown, empty and missing markers all
    /// map to `Default`. Matching is exact (case-sensitive).
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(WSC_MARKER) => Tenant::Wsc,
            Some(AMERITRUST_MARKER) => Tenant::Ameritrust,
            _ => Tenant::Default,
        }
    }

    /// Tenant for a raw token; a missing or undecodable token is the default tenant
    pub fn from_token(token: Option<&str>) -> Self {
        let marker = token.and_then(extract_tenant_marker);
        Tenant::from_marker(marker.as_deref())
    }

    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Tenant::Default => None,
            Tenant::Wsc => Some(WSC_MARKER),
            Tenant::Ameritrust => Some(AMERITRUST_MARKER),
        }
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker().unwrap_or("default"))
    }
}
