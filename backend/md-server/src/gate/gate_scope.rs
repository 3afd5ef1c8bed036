/// Path prefixes the access gate never inspects
pub const DEFAULT_EXCLUDED_PREFIXES: &[&str] = &[
    "/api",
    "/_next/static",
    "/_next/image",
    "/favicon.ico",
    "/public",
    "/health",
    "/live",
    "/ready",
    "/metrics",
];

/// Which request paths count as page navigations.
///
/// A prefix matches on whole path segments, so `/api` excludes `/api` and
/// `/api/x` but not `/apiary`.
#[derive(Debug, Clone)]
pub struct GateScope {
    excluded: Vec<String>,
}

impl GateScope {
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    pub fn applies_to(&self, path: &str) -> bool {
        !self
            .excluded
            .iter()
            .any(|prefix| matches_prefix(path, prefix))
    }
}

impl Default for GateScope {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_PREFIXES.iter().copied())
    }
}

fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
        None => false,
    }
}
