//! Handlers for the `/categories` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::json;

use ensemble_core::pagination::PageParams;
use ensemble_core::types::DbId;
use ensemble_http::{ApiError, ApiResult};

use crate::models::category::Category;
use crate::repositories::{CategoryRepo, QuestionRepo};
use crate::state::AppState;

/// GET /categories
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<serde_json::Value>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "categories": categories_map(&categories),
        "total_categories": categories.len(),
    })))
}

/// GET /categories/{id}/questions
///
/// One category's questions, paginated. An unknown category or a page past
/// the end both answer 404.
pub async fn questions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let questions =
        QuestionRepo::list_by_category(&state.pool, id, params.limit(), params.offset()).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let total = QuestionRepo::count_by_category(&state.pool, id).await?;

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total,
        "current_category": category.kind,
    })))
}

/// Shape categories as the `{"1": "Science", ...}` map the wire format uses.
pub(crate) fn categories_map(categories: &[Category]) -> serde_json::Map<String, serde_json::Value> {
    categories
        .iter()
        .map(|category| {
            (
                category.id.to_string(),
                serde_json::Value::from(category.kind.clone()),
            )
        })
        .collect()
}
