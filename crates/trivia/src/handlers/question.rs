//! Handlers for the `/questions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use ensemble_core::pagination::{PageParams, DEFAULT_PAGE_SIZE};
use ensemble_core::types::DbId;
use ensemble_http::{ApiError, ApiResult, ValidatedJson};

use crate::handlers::category::categories_map;
use crate::models::question::{CreateQuestion, SearchRequest};
use crate::repositories::{CategoryRepo, QuestionRepo};
use crate::state::AppState;

/// GET /questions
///
/// One page of questions plus the category map the list view bootstraps
/// from. A page past the end answers 404.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let questions = QuestionRepo::list_page(&state.pool, params.limit(), params.offset()).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    let total = QuestionRepo::count(&state.pool).await?;
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total,
        "categories": categories_map(&categories),
        "current_category": serde_json::Value::Null,
    })))
}

/// POST /questions
///
/// Blank question or answer text is a 400; an unknown category id fails the
/// foreign key and surfaces as 422.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateQuestion>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let created = QuestionRepo::create(&state.pool, &input).await?;

    let questions = QuestionRepo::list_page(&state.pool, DEFAULT_PAGE_SIZE, 0).await?;
    let total = QuestionRepo::count(&state.pool).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "created": created.id,
            "questions": questions,
            "total_questions": total,
        })),
    ))
}

/// DELETE /questions/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<Json<serde_json::Value>> {
    if !QuestionRepo::delete(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }

    let questions = QuestionRepo::list_page(&state.pool, DEFAULT_PAGE_SIZE, 0).await?;
    let total = QuestionRepo::count(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "deleted": id,
        "questions": questions,
        "total_questions": total,
    })))
}

/// POST /questions/search
///
/// Case-insensitive substring match on the question text. No hits is not an
/// error: the client renders an empty list.
pub async fn search(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SearchRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let questions = QuestionRepo::search(&state.pool, &body.search_term).await?;
    let total = questions.len();

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total,
    })))
}
