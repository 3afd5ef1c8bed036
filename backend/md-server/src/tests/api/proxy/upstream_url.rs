use crate::api::proxy::proxy::upstream_url;
use crate::{ApiError, Upstream};

fn joined(base_url: &str, path: &str, query: Option<&str>) -> String {
    upstream_url(Upstream::Mortdash, base_url, path, query)
        .unwrap()
        .to_string()
}

#[test]
fn test_upstream_url_joins_without_double_slash() {
    assert_eq!(
        joined("https://api.test/", "/v1/loans", None),
        "https://api.test/v1/loans"
    );
    assert_eq!(
        joined("https://api.test", "v1/loans", None),
        "https://api.test/v1/loans"
    );
}

#[test]
fn test_upstream_url_keeps_base_path_prefix() {
    assert_eq!(
        joined("https://api.test/tenant-api/", "v1/loans", None),
        "https://api.test/tenant-api/v1/loans"
    );
    assert_eq!(
        joined("https://api.test/tenant-api", "v1/loans", None),
        "https://api.test/tenant-api/v1/loans"
    );
}

#[test]
fn test_upstream_url_strips_token_from_query() {
    assert_eq!(
        joined("https://api.test", "loans", Some("token=abc&page=2")),
        "https://api.test/loans?page=2"
    );
    assert_eq!(
        joined("https://api.test", "loans", Some("token=abc")),
        "https://api.test/loans"
    );
}

#[test]
fn test_upstream_url_reencodes_reserved_characters_in_segments() {
    // Decoded `%3F` and `%23` stay inside the path
    assert_eq!(
        joined("https://api.test/tenant-api", "reports?x=1#frag", None),
        "https://api.test/tenant-api/reports%3Fx=1%23frag"
    );
    assert_eq!(
        joined("https://api.test", "a%2Fb", None),
        "https://api.test/a%252Fb"
    );
}

#[test]
fn test_upstream_url_rejects_dot_segments() {
    for path in ["../admin", "v1/../../admin", "./loans", "v1/.."] {
        let result = upstream_url(Upstream::Mortdash, "https://api.test/tenant-api", path, None);

        assert!(
            matches!(result, Err(ApiError::InvalidPath { .. })),
            "{} was not rejected",
            path
        );
    }
}

#[test]
fn test_upstream_url_unparseable_base_is_not_configured() {
    let result = upstream_url(Upstream::AccountExecutive, "not a url", "loans", None);

    assert!(matches!(
        result,
        Err(ApiError::UpstreamNotConfigured {
            upstream: Upstream::AccountExecutive,
            ..
        })
    ));
}

#[test]
fn test_upstream_labels() {
    assert_eq!(Upstream::Mortdash.to_string(), "mortdash");
    assert_eq!(Upstream::AccountExecutive.to_string(), "ae");
    assert_eq!(Upstream::Marketing.to_string(), "marketing");
}
