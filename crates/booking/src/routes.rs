//! Route definitions for the booking service.

use axum::routing::{get, post};
use axum::Router;

use ensemble_http::{method_not_allowed, not_found};

use crate::handlers::{artist, health, show, venue};
use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// GET    /health          -> health_check
/// GET    /venues          -> venue::list
/// POST   /venues          -> venue::create
/// GET    /venues/{id}     -> venue::detail
/// PATCH  /venues/{id}     -> venue::update
/// DELETE /venues/{id}     -> venue::delete
/// POST   /venues/search   -> venue::search
/// GET    /artists         -> artist::list
/// POST   /artists         -> artist::create
/// GET    /artists/{id}    -> artist::detail
/// PATCH  /artists/{id}    -> artist::update
/// DELETE /artists/{id}    -> artist::delete
/// POST   /artists/search  -> artist::search
/// GET    /shows           -> show::list
/// POST   /shows           -> show::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/venues", get(venue::list).post(venue::create))
        .route(
            "/venues/{id}",
            get(venue::detail)
                .patch(venue::update)
                .delete(venue::delete),
        )
        .route("/venues/search", post(venue::search))
        .route("/artists", get(artist::list).post(artist::create))
        .route(
            "/artists/{id}",
            get(artist::detail)
                .patch(artist::update)
                .delete(artist::delete),
        )
        .route("/artists/search", post(artist::search))
        .route("/shows", get(show::list).post(show::create))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
