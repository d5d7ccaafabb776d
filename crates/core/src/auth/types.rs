use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session record stored in the cache under `session:{token}`.
///
/// Sessions are written by the authentication service; this backend only
/// reads them to resolve a bearer token into a user id. The record is plain
/// JSON, not the versioned cache envelope, because its shape is owned by
/// the authentication service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionData {
    /// Creates a session record for tests and tooling.
    pub fn new(user_id: Uuid, created_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            created_at,
            expires_at,
        }
    }
}
