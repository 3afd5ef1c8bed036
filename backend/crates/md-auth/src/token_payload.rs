use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use error_location::ErrorLocation;
use serde_json::Value;

/// Decode the payload (middle) segment of a three-part token as JSON.
///
/// The signature is NOT checked, but the header and signature segments must be
/// base64 text (the signature may be empty). Accepts base64url or standard
/// alphabet, with or without padding.
#[track_caller]
pub fn decode_payload(token: &str) -> AuthErrorResult<Value> {
    let mut segments = token.split('.');
    let payload = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(header), Some(payload), Some(signature), None) if !payload.is_empty() => {
            if header.is_empty() || !is_base64_text(header) || !is_base64_text(signature) {
                return Err(malformed("header and signature must be base64 text"));
            }
            payload
        }
        _ => return Err(malformed("expected three dot-separated segments")),
    };

    let trimmed = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
        .map_err(|e| malformed(format!("payload is not base64: {}", e)))?;

    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| malformed(format!("payload is not JSON: {}", e)))?;

    if !value.is_object() {
        return Err(malformed("payload is not a JSON object"));
    }

    Ok(value)
}

fn is_base64_text(segment: &str) -> bool {
    segment
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'+' | b'/' | b'='))
}

#[track_caller]
fn malformed<S: Into<String>>(message: S) -> AuthError {
    AuthError::MalformedToken {
        message: message.into(),
        location: ErrorLocation::from(Location::caller()),
    }
}
