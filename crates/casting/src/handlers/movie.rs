//! Handlers for the `/movies` resource. Every endpoint checks a permission.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use ensemble_core::types::DbId;
use ensemble_http::{ApiError, ApiResult, BearerClaims, ValidatedJson};

use crate::models::movie::{CreateMovie, UpdateMovie};
use crate::repositories::MovieRepo;
use crate::state::AppState;

/// GET /movies
///
/// Requires `get:movies`. An empty table answers 404.
pub async fn list(
    BearerClaims(claims): BearerClaims,
    State(state): State<AppState>,
) -> ApiResult<Json<serde_json::Value>> {
    claims.check_permission("get:movies")?;

    let movies = MovieRepo::list(&state.pool).await?;
    if movies.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "movies": movies,
    })))
}

/// POST /movies
///
/// Requires `post:movie`. A body missing title or release date is a 400.
pub async fn create(
    BearerClaims(claims): BearerClaims,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMovie>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    claims.check_permission("post:movie")?;

    let created = MovieRepo::create(&state.pool, &input).await?;
    let movies = MovieRepo::list(&state.pool).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "created": created.id,
            "movies": movies,
        })),
    ))
}

/// PATCH /movies/{id}
///
/// Requires `patch:movie`. Partial update; a body naming no field is a 400.
pub async fn update(
    BearerClaims(claims): BearerClaims,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateMovie>,
) -> ApiResult<Json<serde_json::Value>> {
    claims.check_permission("patch:movie")?;

    if input.is_empty() {
        return Err(ApiError::BadRequest);
    }

    MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(ApiError::NotFound)?;
    let movies = MovieRepo::list(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "patched_movie": id,
        "movies": movies,
    })))
}

/// DELETE /movies/{id}
///
/// Requires `delete:movie`.
pub async fn delete(
    BearerClaims(claims): BearerClaims,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<serde_json::Value>> {
    claims.check_permission("delete:movie")?;

    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "deleted_movie": id,
    })))
}
