//! Session token storage in the `auth_token` cookie and the `token` query parameter.
//!
//! Every read and write of the session token goes through here, so the access
//! gate and the request context agree on where a token comes from.

use axum::{
    http::{
        HeaderMap, HeaderValue, Uri,
        header::{COOKIE, SET_COOKIE},
    },
    response::Response,
};
use log::warn;
use url::form_urlencoded;

/// Query parameter carrying a freshly issued session token
pub const TOKEN_QUERY_PARAM: &str = "token";

/// Reads and writes the session cookie
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    secure: bool,
}

impl SessionCookie {
    /// `secure` adds the `Secure` attribute; off only for local development over http
    pub fn new(name: impl Into<String>, secure: bool) -> Self {
        Self {
            name: name.into(),
            secure,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Session token from the request's cookies. Empty values count as absent.
    pub fn get_session_token(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|raw| raw.split(';'))
            .find_map(|pair| {
                let (key, value) = pair.trim().split_once('=')?;
                if key.trim() == self.name && !value.trim().is_empty() {
                    Some(value.trim().to_string())
                } else {
                    None
                }
            })
    }

    /// Append a `Set-Cookie` persisting `token` for the rest of the browser session.
    /// Tokens that are not a plain cookie value are never written.
    pub fn set_session_token(&self, response: &mut Response, token: &str) {
        if !is_cookie_value(token) {
            warn!("Refusing to write {} cookie: token is not a cookie value", self.name);
            return;
        }
        let cookie = format!("{}={}; {}", self.name, token, self.attributes());
        self.append(response, &cookie);
    }

    /// Append a `Set-Cookie` deleting the session cookie
    pub fn clear_session_token(&self, response: &mut Response) {
        let cookie = format!("{}=; {}; Max-Age=0", self.name, self.attributes());
        self.append(response, &cookie);
    }

    /// Token from the `token` query parameter. Empty values count as absent.
    pub fn url_token(uri: &Uri) -> Option<String> {
        let query = uri.query()?;
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, value)| key == TOKEN_QUERY_PARAM && !value.is_empty())
            .map(|(_, value)| value.into_owned())
    }

    fn attributes(&self) -> String {
        let mut attributes = String::from("Path=/; HttpOnly; SameSite=Lax");
        if self.secure {
            attributes.push_str("; Secure");
        }
        attributes
    }

    fn append(&self, response: &mut Response, cookie: &str) {
        match HeaderValue::from_str(cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!("Dropping unrepresentable {} cookie: {}", self.name, e),
        }
    }
}

/// True when `value` is non-empty and made only of RFC 6265 cookie-octets
/// (no whitespace, controls, quotes, commas, semicolons or backslashes)
pub fn is_cookie_value(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| {
            matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
        })
}

/// Re-encode a query string without the `token` parameter
pub fn query_without_token(query: &str) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key != TOKEN_QUERY_PARAM {
            serializer.append_pair(&key, &value);
        }
    }
    serializer.finish()
}
