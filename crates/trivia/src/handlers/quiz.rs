//! Handler for the `/quizzes` endpoint.

use axum::extract::State;
use axum::Json;
use rand::Rng;
use serde_json::json;

use ensemble_http::{ApiResult, ValidatedJson};

use crate::models::question::QuizRequest;
use crate::repositories::QuestionRepo;
use crate::state::AppState;

/// POST /quizzes
///
/// One random question from the requested category that has not been asked
/// this round, or `null` once the pool is exhausted. A category id of `0`
/// (or no category at all) draws from every category.
pub async fn play(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<QuizRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let category_id = body
        .quiz_category
        .as_ref()
        .map(|category| category.id)
        .filter(|&id| id != 0);

    let candidates =
        QuestionRepo::quiz_candidates(&state.pool, category_id, &body.previous_questions).await?;

    if candidates.is_empty() {
        return Ok(Json(json!({
            "success": true,
            "question": serde_json::Value::Null,
        })));
    }

    let pick = rand::rng().random_range(0..candidates.len());
    Ok(Json(json!({
        "success": true,
        "question": candidates[pick],
    })))
}
