//! Handlers for the `/actors` resource. Every endpoint checks a permission.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use ensemble_core::types::DbId;
use ensemble_http::{ApiError, ApiResult, BearerClaims, ValidatedJson};

use crate::models::actor::{CreateActor, UpdateActor};
use crate::repositories::ActorRepo;
use crate::state::AppState;

/// GET /actors
///
/// Requires `get:actors`. An empty table answers 404.
pub async fn list(
    BearerClaims(claims): BearerClaims,
    State(state): State<AppState>,
) -> ApiResult<Json<serde_json::Value>> {
    claims.check_permission("get:actors")?;

    let actors = ActorRepo::list(&state.pool).await?;
    if actors.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "actors": actors,
    })))
}

/// POST /actors
///
/// Requires `post:actor`. A body missing name, age or gender is a 400.
pub async fn create(
    BearerClaims(claims): BearerClaims,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateActor>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    claims.check_permission("post:actor")?;

    let created = ActorRepo::create(&state.pool, &input).await?;
    let actors = ActorRepo::list(&state.pool).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "created": created.id,
            "actors": actors,
        })),
    ))
}

/// PATCH /actors/{id}
///
/// Requires `patch:actor`. Partial update; a body naming no field is a 400.
pub async fn update(
    BearerClaims(claims): BearerClaims,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateActor>,
) -> ApiResult<Json<serde_json::Value>> {
    claims.check_permission("patch:actor")?;

    if input.is_empty() {
        return Err(ApiError::BadRequest);
    }

    ActorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(ApiError::NotFound)?;
    let actors = ActorRepo::list(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "patched_actor": id,
        "actors": actors,
    })))
}

/// DELETE /actors/{id}
///
/// Requires `delete:actor`.
pub async fn delete(
    BearerClaims(claims): BearerClaims,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<serde_json::Value>> {
    claims.check_permission("delete:actor")?;

    if !ActorRepo::delete(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "deleted_actor": id,
    })))
}
