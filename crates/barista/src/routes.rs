//! Route definitions for the barista service.

use axum::routing::{get, patch};
use axum::Router;

use ensemble_http::{method_not_allowed, not_found};

use crate::handlers::{drink, health};
use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// GET    /health         -> health_check      (public)
/// GET    /drinks         -> drink::list       (public, short form)
/// GET    /drinks-detail  -> drink::detail     (get:drinks-detail)
/// POST   /drinks         -> drink::create     (post:drinks)
/// PATCH  /drinks/{id}    -> drink::update     (patch:drinks)
/// DELETE /drinks/{id}    -> drink::delete     (delete:drinks)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/drinks", get(drink::list).post(drink::create))
        .route("/drinks-detail", get(drink::detail))
        .route("/drinks/{id}", patch(drink::update).delete(drink::delete))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
