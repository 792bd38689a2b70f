//! Route definitions for the casting service.

use axum::routing::{get, patch};
use axum::Router;

use ensemble_http::{method_not_allowed, not_found};

use crate::handlers::{actor, auth, health, movie};
use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// GET    /health       -> health_check            (public)
/// GET    /auth/url     -> auth::login_url         (public)
/// GET    /movies       -> movie::list             (get:movies)
/// POST   /movies       -> movie::create           (post:movie)
/// PATCH  /movies/{id}  -> movie::update           (patch:movie)
/// DELETE /movies/{id}  -> movie::delete           (delete:movie)
/// GET    /actors       -> actor::list             (get:actors)
/// POST   /actors       -> actor::create           (post:actor)
/// PATCH  /actors/{id}  -> actor::update           (patch:actor)
/// DELETE /actors/{id}  -> actor::delete           (delete:actor)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/auth/url", get(auth::login_url))
        .route("/movies", get(movie::list).post(movie::create))
        .route("/movies/{id}", patch(movie::update).delete(movie::delete))
        .route("/actors", get(actor::list).post(actor::create))
        .route("/actors/{id}", patch(actor::update).delete(actor::delete))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
