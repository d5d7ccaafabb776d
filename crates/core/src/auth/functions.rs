use chrono::{DateTime, Utc};

use super::SessionData;

/// Check if a session has expired. Expiry is inclusive: a session expiring
/// exactly now is already invalid.
pub fn is_session_expired(session: &SessionData, now: DateTime<Utc>) -> bool {
    session.expires_at <= now
}

/// Extract the token from an `Authorization` header value.
///
/// Only the `Bearer` scheme is accepted, case-sensitively, and the token
/// must be non-empty.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let token = header_value.strip_prefix("Bearer ")?;
    if token.is_empty() {
        return None;
    }
    Some(token)
}
