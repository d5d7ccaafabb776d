//! Axum extractors for authentication.
//!
//! Identity comes from bearer tokens resolved against session records the
//! authentication service writes into the cache. This backend never mints
//! sessions itself.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::Utc;
use uuid::Uuid;

use cycletrack_core::auth::{bearer_token, is_session_expired, SessionData};
use cycletrack_core::cache::session_key;

use crate::{handlers::ApiError, state::AppState};

/// Extractor for the authenticated user's id. Rejects with 401 if not
/// authenticated.
///
/// A request without an `Authorization` header is rejected before any cache
/// or store access happens.
pub struct CurrentUser(pub Uuid);

impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(ApiError::Unauthenticated("Missing authorization header"))?;

        let header_value = auth_header
            .to_str()
            .map_err(|_| ApiError::Unauthenticated("Invalid authorization header"))?;

        let token = bearer_token(header_value)
            .ok_or(ApiError::Unauthenticated("Invalid authorization header"))?;

        let app_state = AppState::from_ref(state);

        // Look up the session
        let bytes = app_state
            .cache
            .get(&session_key(token))
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "Session lookup failed");
                ApiError::CacheUnavailable(err.to_string())
            })?
            .ok_or(ApiError::Unauthenticated("Session not found"))?;

        // An unreadable session record is as good as no session
        let session: SessionData = serde_json::from_slice(&bytes)
            .map_err(|_| ApiError::Unauthenticated("Session not found"))?;

        if is_session_expired(&session, Utc::now()) {
            return Err(ApiError::Unauthenticated("Session expired"));
        }

        Ok(CurrentUser(session.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use chrono::Duration;

    use crate::config::Config;

    fn test_config() -> Config {
        Config {
            cache_ttl_seconds: 300,
            cache_max_entries: 1_000,
            sqlite_path: ":memory:".to_string(),
            redis_url: "redis://localhost:6379".to_string(),
        }
    }

    async fn seed_session(state: &AppState, token: &str, user_id: Uuid) {
        let now = Utc::now();
        let session = SessionData::new(user_id, now, now + Duration::hours(1));
        state
            .cache
            .set(
                &session_key(token),
                &serde_json::to_vec(&session).unwrap(),
                None,
            )
            .await
            .unwrap();
    }

    fn parts_with_header(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/cycle");
        if let Some(value) = value {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthenticated() {
        let state = AppState::new(&test_config()).await.unwrap();
        let mut parts = parts_with_header(None);

        let result = CurrentUser::from_request_parts(&mut parts, &state).await;

        assert!(matches!(
            result,
            Err(ApiError::Unauthenticated("Missing authorization header"))
        ));
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_unauthenticated() {
        let state = AppState::new(&test_config()).await.unwrap();
        let mut parts = parts_with_header(Some("Basic dXNlcjpwYXNz"));

        let result = CurrentUser::from_request_parts(&mut parts, &state).await;

        assert!(matches!(result, Err(ApiError::Unauthenticated(_))));
    }

    #[tokio::test]
    async fn test_unknown_token_is_unauthenticated() {
        let state = AppState::new(&test_config()).await.unwrap();
        let mut parts = parts_with_header(Some("Bearer no-such-token"));

        let result = CurrentUser::from_request_parts(&mut parts, &state).await;

        assert!(matches!(
            result,
            Err(ApiError::Unauthenticated("Session not found"))
        ));
    }

    #[tokio::test]
    async fn test_valid_session_resolves_user() {
        let state = AppState::new(&test_config()).await.unwrap();
        let user_id = Uuid::new_v4();
        seed_session(&state, "tok-1", user_id).await;

        let mut parts = parts_with_header(Some("Bearer tok-1"));
        let CurrentUser(resolved) = CurrentUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();

        assert_eq!(resolved, user_id);
    }

    #[tokio::test]
    async fn test_expired_session_is_unauthenticated() {
        let state = AppState::new(&test_config()).await.unwrap();
        let now = Utc::now();
        let session = SessionData::new(
            Uuid::new_v4(),
            now - Duration::hours(2),
            now - Duration::hours(1),
        );
        state
            .cache
            .set(
                &session_key("tok-expired"),
                &serde_json::to_vec(&session).unwrap(),
                None,
            )
            .await
            .unwrap();

        let mut parts = parts_with_header(Some("Bearer tok-expired"));
        let result = CurrentUser::from_request_parts(&mut parts, &state).await;

        assert!(matches!(
            result,
            Err(ApiError::Unauthenticated("Session expired"))
        ));
    }

    #[tokio::test]
    async fn test_corrupt_session_record_is_unauthenticated() {
        let state = AppState::new(&test_config()).await.unwrap();
        state
            .cache
            .set(&session_key("tok-bad"), b"not json", None)
            .await
            .unwrap();

        let mut parts = parts_with_header(Some("Bearer tok-bad"));
        let result = CurrentUser::from_request_parts(&mut parts, &state).await;

        assert!(matches!(
            result,
            Err(ApiError::Unauthenticated("Session not found"))
        ));
    }
}
