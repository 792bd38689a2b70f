//! Handlers for the `/venues` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use ensemble_core::types::DbId;
use ensemble_http::{ApiError, ApiResult, ValidatedJson};

use crate::models::venue::{
    Area, CreateVenue, UpdateVenue, VenueAreaRow, VenueDetail, VenueSummary,
};
use crate::models::SearchRequest;
use crate::repositories::show_repo::ShowWindow;
use crate::repositories::{ShowRepo, VenueRepo};
use crate::state::AppState;

/// GET /venues
///
/// Venues grouped by (city, state), each carrying its upcoming-show count.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<serde_json::Value>> {
    let rows = VenueRepo::list_area_rows(&state.pool).await?;
    let areas = group_by_area(rows);

    Ok(Json(json!({
        "success": true,
        "areas": areas,
    })))
}

/// Fold area-ordered rows into one entry per (city, state) pair.
fn group_by_area(rows: Vec<VenueAreaRow>) -> Vec<Area> {
    let mut areas: Vec<Area> = Vec::new();
    for row in rows {
        let summary = VenueSummary {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        };
        match areas.last_mut() {
            Some(area) if area.city == row.city && area.state == row.state => {
                area.venues.push(summary);
            }
            _ => areas.push(Area {
                city: row.city,
                state: row.state,
                venues: vec![summary],
            }),
        }
    }
    areas
}

/// GET /venues/{id}
///
/// The full venue with its shows split into past and upcoming around now.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<serde_json::Value>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let past_shows = ShowRepo::for_venue(&state.pool, id, ShowWindow::Past).await?;
    let upcoming_shows = ShowRepo::for_venue(&state.pool, id, ShowWindow::Upcoming).await?;

    let detail = VenueDetail {
        venue,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    };

    Ok(Json(json!({
        "success": true,
        "venue": detail,
    })))
}

/// POST /venues
///
/// A body missing name, city, state, or address is a 400.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateVenue>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let venue = VenueRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "venue": venue,
        })),
    ))
}

/// PATCH /venues/{id}
///
/// Partial update; absent fields keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateVenue>,
) -> ApiResult<Json<serde_json::Value>> {
    let venue = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(json!({
        "success": true,
        "venue": venue,
    })))
}

/// DELETE /venues/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<serde_json::Value>> {
    if !VenueRepo::delete(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "deleted": id,
    })))
}

/// POST /venues/search
///
/// Case-insensitive substring match on the venue name. No hits is not an
/// error: the client renders an empty list.
pub async fn search(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SearchRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let data = VenueRepo::search(&state.pool, &body.search_term).await?;

    Ok(Json(json!({
        "success": true,
        "count": data.len(),
        "data": data,
    })))
}
