//! Handlers for the `/artists` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use ensemble_core::types::DbId;
use ensemble_http::{ApiError, ApiResult, ValidatedJson};

use crate::models::artist::{ArtistDetail, CreateArtist, UpdateArtist};
use crate::models::SearchRequest;
use crate::repositories::show_repo::ShowWindow;
use crate::repositories::{ArtistRepo, ShowRepo};
use crate::state::AppState;

/// GET /artists
///
/// Id and name of every artist; the detail endpoint carries the rest.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<serde_json::Value>> {
    let artists = ArtistRepo::list_refs(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "artists": artists,
    })))
}

/// GET /artists/{id}
///
/// The full artist with their shows split into past and upcoming around now.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<serde_json::Value>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let past_shows = ShowRepo::for_artist(&state.pool, id, ShowWindow::Past).await?;
    let upcoming_shows = ShowRepo::for_artist(&state.pool, id, ShowWindow::Upcoming).await?;

    let detail = ArtistDetail {
        artist,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    };

    Ok(Json(json!({
        "success": true,
        "artist": detail,
    })))
}

/// POST /artists
///
/// A body missing name, city, or state is a 400.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateArtist>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let artist = ArtistRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "artist": artist,
        })),
    ))
}

/// PATCH /artists/{id}
///
/// Partial update; absent fields keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateArtist>,
) -> ApiResult<Json<serde_json::Value>> {
    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(json!({
        "success": true,
        "artist": artist,
    })))
}

/// DELETE /artists/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<serde_json::Value>> {
    if !ArtistRepo::delete(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "deleted": id,
    })))
}

/// POST /artists/search
///
/// Case-insensitive substring match on the artist name. No hits is not an
/// error: the client renders an empty list.
pub async fn search(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SearchRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let data = ArtistRepo::search(&state.pool, &body.search_term).await?;

    Ok(Json(json!({
        "success": true,
        "count": data.len(),
        "data": data,
    })))
}
