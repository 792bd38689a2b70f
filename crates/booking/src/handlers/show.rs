//! Handlers for the `/shows` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use ensemble_http::{ApiResult, ValidatedJson};

use crate::models::show::CreateShow;
use crate::repositories::ShowRepo;
use crate::state::AppState;

/// GET /shows
///
/// Every show with its venue and artist joined in, soonest first.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<serde_json::Value>> {
    let shows = ShowRepo::list(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "shows": shows,
    })))
}

/// POST /shows
///
/// A non-timestamp start time is a 400; an unknown venue or artist id fails
/// the foreign key and surfaces as 422.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateShow>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let show = ShowRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "show": show,
        })),
    ))
}
