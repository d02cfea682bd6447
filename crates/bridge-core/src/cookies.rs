//! Session-cookie extraction from `Set-Cookie` header values
//!
//! The ERP's service layer returns its session tokens as cookies. Extraction
//! is "first header value matching a substring marker, truncated to the
//! name/value pair": a pure function over a list of header strings, testable
//! without a network stack.

/// Marker identifying the session-identifier cookie.
pub const SESSION_MARKER: &str = "B1SESSION";

/// Marker identifying the load-balancer routing cookie.
pub const ROUTE_MARKER: &str = "ROUTEID";

/// First header value containing `marker`, reduced to its `name=value` part.
///
/// Cookie attributes (`Path`, `HttpOnly`, ...) after the first `;` are
/// dropped; they must not be echoed back in the `Cookie` header.
pub fn extract_cookie(values: &[String], marker: &str) -> Option<String> {
    let raw = values.iter().find(|value| value.contains(marker))?;
    let pair = raw.split_once(';').map_or(raw.as_str(), |(pair, _)| pair);
    Some(pair.trim().to_string())
}
