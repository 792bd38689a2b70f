//! Hosted-login URL helper.

use axum::extract::State;
use axum::Json;
use serde_json::json;

use ensemble_http::{ApiError, ApiResult};

use crate::state::AppState;

/// GET /auth/url
///
/// Public. Assembles the issuer's hosted-login URL so a frontend (or a
/// tester with curl) can obtain a token without knowing the tenant details.
/// Answers 500 when the optional client id / callback settings are missing.
pub async fn login_url(State(state): State<AppState>) -> ApiResult<Json<serde_json::Value>> {
    match state.verifier.config().login_url() {
        Some(url) => Ok(Json(json!({ "url": url }))),
        None => {
            tracing::warn!(
                "AUTH_CLIENT_ID or AUTH_CALLBACK_URL is not set; cannot assemble login URL"
            );
            Err(ApiError::Internal)
        }
    }
}
