use uuid::Uuid;

/// Returns the cache key for a user's full cycle collection.
pub fn user_cycles_key(user_id: Uuid) -> String {
    format!("cycles:{}", user_id)
}

/// Returns the cache key for a single cycle.
pub fn cycle_key(cycle_id: Uuid) -> String {
    format!("cycle:{}", cycle_id)
}

/// Returns the cache key for a session token.
///
/// Session entries are written by the authentication service and only read
/// here, so the key format has to stay in sync with it.
pub fn session_key(token: &str) -> String {
    format!("session:{}", token)
}
