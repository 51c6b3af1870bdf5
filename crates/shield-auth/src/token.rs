//! Session token extraction and unverified inspection.
//!
//! Browsers send the Clerk session in the `__session` cookie; API clients
//! send `Authorization: Bearer <token>`. The header wins when both are present.

use base64::Engine as _;

use crate::error::AuthError;

/// Cookie Clerk uses for the session token.
pub const SESSION_COOKIE: &str = "__session";

/// Pick the session token from the `Authorization` and `Cookie` header values.
#[must_use]
pub fn extract_token(authorization: Option<&str>, cookie: Option<&str>) -> Option<String> {
    authorization
        .and_then(bearer_token)
        .or_else(|| cookie.and_then(session_cookie))
        .map(String::from)
}

/// Token from a `Bearer <token>` header value. The scheme is case-insensitive.
#[must_use]
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Value of the `__session` cookie in a `Cookie` header.
#[must_use]
pub fn session_cookie(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// Read the `exp` claim without verifying the signature.
///
/// Used to reject malformed or expired tokens before a JWKS round-trip.
///
/// # Errors
///
/// Returns `AuthError::MalformedToken` if the token is not a three-part JWT
/// with a base64url JSON payload carrying a numeric `exp`.
pub fn decode_expiry(jwt: &str) -> Result<chrono::DateTime<chrono::Utc>, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::MalformedToken("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| AuthError::MalformedToken(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::MalformedToken(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::MalformedToken("missing exp claim".into()))?;
    chrono::DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::MalformedToken("invalid exp timestamp".into()))
}
