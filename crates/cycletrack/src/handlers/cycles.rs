//! Cycle CRUD handlers.
//!
//! These handlers resolve the caller through the `CurrentUser` extractor and
//! go through the cached repository for all data access. Ownership checks
//! live in the repository, not here.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use cycletrack_core::cycle::{Cycle, CycleDraft};
use cycletrack_core::storage::RepositoryError;

use crate::{auth::CurrentUser, handlers::ApiError, state::AppState};

/// Unwraps a JSON body, turning axum's rejection into a 400.
fn json_draft(payload: Result<Json<CycleDraft>, JsonRejection>) -> Result<CycleDraft, ApiError> {
    let Json(draft) = payload
        .map_err(|rejection| RepositoryError::InvalidData(rejection.body_text()))?;
    Ok(draft)
}

/// Create a cycle (POST /cycle).
pub async fn create_cycle(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<CycleDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Cycle>), ApiError> {
    let draft = json_draft(payload)?;
    let cycle = state.cycles.create_cycle(user_id, draft).await?;
    Ok((StatusCode::CREATED, Json(cycle)))
}

/// List the caller's cycles (GET /cycle).
pub async fn list_cycles(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Cycle>>, ApiError> {
    let cycles = state.cycles.list_cycles(user_id).await?;
    Ok(Json(cycles))
}

/// Fully replace a cycle (PUT /cycle/{id}).
pub async fn update_cycle(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(cycle_id): Path<Uuid>,
    payload: Result<Json<CycleDraft>, JsonRejection>,
) -> Result<Json<Cycle>, ApiError> {
    let draft = json_draft(payload)?;
    let cycle = state.cycles.update_cycle(user_id, cycle_id, draft).await?;
    Ok(Json(cycle))
}

/// Delete a cycle (DELETE /cycle/{id}).
pub async fn delete_cycle(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(cycle_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.cycles.delete_cycle(user_id, cycle_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
