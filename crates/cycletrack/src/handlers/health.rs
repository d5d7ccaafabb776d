//! Health check endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /health - Readiness probe.
///
/// Pings both backends. Returns 200 when store and cache are reachable,
/// 503 otherwise, with a JSON body reporting each backend separately.
pub async fn health(State(state): State<AppState>) -> Response {
    let store = state.store.is_alive().await;
    let cache = state.cache.is_alive().await;

    let status = if store && cache {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(serde_json::json!({
            "store": store,
            "cache": cache,
        })),
    )
        .into_response()
}
