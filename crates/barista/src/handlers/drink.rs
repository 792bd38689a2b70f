//! Handlers for the `/drinks` resource.
//!
//! The public menu endpoint serves the short representation; everything
//! touching full recipes sits behind a permission.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use ensemble_core::types::DbId;
use ensemble_http::{ApiError, ApiResult, BearerClaims, ValidatedJson};

use crate::models::drink::{CreateDrink, RecipeInput, UpdateDrink};
use crate::repositories::DrinkRepo;
use crate::state::AppState;

/// GET /drinks
///
/// Public. Short representation; an empty menu answers 404.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<serde_json::Value>> {
    let drinks = DrinkRepo::list(&state.pool).await?;
    if drinks.is_empty() {
        return Err(ApiError::NotFound);
    }

    let drinks: Vec<_> = drinks.iter().map(|drink| drink.short()).collect();

    Ok(Json(json!({
        "success": true,
        "drinks": drinks,
    })))
}

/// GET /drinks-detail
///
/// Requires `get:drinks-detail`. Long representation.
pub async fn detail(
    BearerClaims(claims): BearerClaims,
    State(state): State<AppState>,
) -> ApiResult<Json<serde_json::Value>> {
    claims.check_permission("get:drinks-detail")?;

    let drinks = DrinkRepo::list(&state.pool).await?;
    if drinks.is_empty() {
        return Err(ApiError::NotFound);
    }

    let drinks: Vec<_> = drinks.iter().map(|drink| drink.long()).collect();

    Ok(Json(json!({
        "success": true,
        "drinks": drinks,
    })))
}

/// POST /drinks
///
/// Requires `post:drinks`. The recipe may arrive as one ingredient object
/// or an array; a duplicate title violates the unique constraint and
/// surfaces as 422.
pub async fn create(
    BearerClaims(claims): BearerClaims,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDrink>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    claims.check_permission("post:drinks")?;

    let ingredients = input.recipe.into_ingredients();
    let created = DrinkRepo::create(&state.pool, &input.title, &ingredients).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "drinks": [created.long()],
        })),
    ))
}

/// PATCH /drinks/{id}
///
/// Requires `patch:drinks`. Partial update of title and/or recipe.
pub async fn update(
    BearerClaims(claims): BearerClaims,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateDrink>,
) -> ApiResult<Json<serde_json::Value>> {
    claims.check_permission("patch:drinks")?;

    let ingredients = input.recipe.map(RecipeInput::into_ingredients);
    let updated = DrinkRepo::update(
        &state.pool,
        id,
        input.title.as_deref(),
        ingredients.as_deref(),
    )
    .await?
    .ok_or(ApiError::NotFound)?;

    Ok(Json(json!({
        "success": true,
        "drinks": [updated.long()],
    })))
}

/// DELETE /drinks/{id}
///
/// Requires `delete:drinks`.
pub async fn delete(
    BearerClaims(claims): BearerClaims,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<serde_json::Value>> {
    claims.check_permission("delete:drinks")?;

    if !DrinkRepo::delete(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "delete": id,
    })))
}
