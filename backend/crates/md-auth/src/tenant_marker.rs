use crate::decode_payload;

/// Payload field carrying the tenant marker
pub const SOURCE_CLAIM: &str = "source";

/// Read the tenant marker from a token's payload.
///
/// Returns `None` for anything that is not a well-formed token with a non-empty
/// string `source` field. Decoding failures are expected input and are swallowed.
pub fn extract_tenant_marker(token: &str) -> Option<String> {
    let payload = decode_payload(token).ok()?;

    payload
        .get(SOURCE_CLAIM)?
        .as_str()
        .filter(|marker| !marker.is_empty())
        .map(str::to_string)
}
