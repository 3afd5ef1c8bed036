use crate::{SessionCookie, is_cookie_value, query_without_token};

use axum::{
    http::{HeaderMap, HeaderValue, Uri, header::COOKIE, header::SET_COOKIE},
    response::{IntoResponse, Response},
};

fn cookie_headers(raw: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_str(raw).unwrap());
    headers
}

fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_get_session_token_among_other_cookies() {
    let cookie = SessionCookie::new("auth_token", true);
    let headers = cookie_headers("theme=dark; auth_token=abc.def.ghi; lang=en");

    assert_eq!(
        cookie.get_session_token(&headers),
        Some("abc.def.ghi".to_string())
    );
}

#[test]
fn test_get_session_token_missing_or_empty() {
    let cookie = SessionCookie::new("auth_token", true);

    assert_eq!(cookie.get_session_token(&HeaderMap::new()), None);
    assert_eq!(cookie.get_session_token(&cookie_headers("theme=dark")), None);
    assert_eq!(cookie.get_session_token(&cookie_headers("auth_token=")), None);
}

#[test]
fn test_get_session_token_does_not_match_name_prefix() {
    let cookie = SessionCookie::new("auth_token", true);
    let headers = cookie_headers("auth_token_old=stale");

    assert_eq!(cookie.get_session_token(&headers), None);
}

#[test]
fn test_set_session_token_secure() {
    let cookie = SessionCookie::new("auth_token", true);
    let mut response = ().into_response();

    cookie.set_session_token(&mut response, "abc");

    assert_eq!(
        set_cookies(&response),
        vec!["auth_token=abc; Path=/; HttpOnly; SameSite=Lax; Secure"]
    );
}

#[test]
fn test_set_session_token_development_omits_secure() {
    let cookie = SessionCookie::new("auth_token", false);
    let mut response = ().into_response();

    cookie.set_session_token(&mut response, "abc");

    let written = set_cookies(&response);
    assert_eq!(written, vec!["auth_token=abc; Path=/; HttpOnly; SameSite=Lax"]);
}

#[test]
fn test_set_session_token_refuses_attribute_injection() {
    let cookie = SessionCookie::new("auth_token", true);
    let mut response = ().into_response();

    cookie.set_session_token(&mut response, "h.b.sig; Max-Age=315360000; Path=/admin");

    assert!(set_cookies(&response).is_empty());
}

#[test]
fn test_is_cookie_value() {
    assert!(is_cookie_value("eyJhbGciOi.eyJzdWIi.c2ln-_"));
    assert!(!is_cookie_value(""));
    assert!(!is_cookie_value("a;b"));
    assert!(!is_cookie_value("a b"));
    assert!(!is_cookie_value("a,b"));
    assert!(!is_cookie_value("a\"b"));
    assert!(!is_cookie_value("a\\b"));
    assert!(!is_cookie_value("a\tb"));
}

#[test]
fn test_clear_session_token_expires_cookie() {
    let cookie = SessionCookie::new("auth_token", true);
    let mut response = ().into_response();

    cookie.clear_session_token(&mut response);

    let written = set_cookies(&response);
    assert_eq!(written.len(), 1);
    assert!(written[0].starts_with("auth_token=;"));
    assert!(written[0].contains("Max-Age=0"));
    assert!(written[0].contains("Path=/"));
}

#[test]
fn test_url_token() {
    let with_token: Uri = "/dashboard?view=grid&token=abc".parse().unwrap();
    let empty_token: Uri = "/dashboard?token=".parse().unwrap();
    let no_query: Uri = "/dashboard".parse().unwrap();

    assert_eq!(SessionCookie::url_token(&with_token), Some("abc".to_string()));
    assert_eq!(SessionCookie::url_token(&empty_token), None);
    assert_eq!(SessionCookie::url_token(&no_query), None);
}

#[test]
fn test_url_token_is_percent_decoded() {
    let uri: Uri = "/?token=a%2Bb".parse().unwrap();

    assert_eq!(SessionCookie::url_token(&uri), Some("a+b".to_string()));
}

#[test]
fn test_query_without_token() {
    assert_eq!(query_without_token("token=abc&page=2"), "page=2");
    assert_eq!(query_without_token("token=abc"), "");
    assert_eq!(query_without_token("a=1&b=2"), "a=1&b=2");
}
