//! Route definitions for the trivia service.

use axum::routing::{delete, get, post};
use axum::Router;

use ensemble_http::{method_not_allowed, not_found};

use crate::handlers::{category, health, question, quiz};
use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// GET    /health                     -> health_check
/// GET    /categories                 -> category::list
/// GET    /categories/{id}/questions  -> category::questions
/// GET    /questions                  -> question::list
/// POST   /questions                  -> question::create
/// DELETE /questions/{id}             -> question::delete
/// POST   /questions/search           -> question::search
/// POST   /quizzes                    -> quiz::play
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/categories", get(category::list))
        .route("/categories/{id}/questions", get(category::questions))
        .route("/questions", get(question::list).post(question::create))
        .route("/questions/{id}", delete(question::delete))
        .route("/questions/search", post(question::search))
        .route("/quizzes", post(quiz::play))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
