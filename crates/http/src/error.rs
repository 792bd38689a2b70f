//! Application-level error type and the JSON envelope it renders to.
//!
//! Every failure, from a bad route to a constraint violation, answers with
//! `{"success": false, "error": <status>, "message": <string>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use ensemble_auth::AuthError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the uniform JSON error envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed request data.
    #[error("bad request")]
    BadRequest,

    /// Nothing behind the requested path.
    #[error("resource not found")]
    NotFound,

    /// Known path, unsupported verb.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Well-formed request that cannot be processed.
    #[error("unprocessable")]
    Unprocessable,

    /// Anything the client cannot be blamed for.
    #[error("internal server error")]
    Internal,

    /// Token extraction, verification, or permission failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            ApiError::Unprocessable => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            ApiError::Internal => {
                tracing::error!("Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            ApiError::Auth(err) => (
                StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                err.to_string(),
            ),
            ApiError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and envelope message.
///
/// - `RowNotFound` maps to 404.
/// - Integrity violations (not-null 23502, foreign key 23503, unique 23505)
///   map to 422: the request parsed fine but the data cannot be stored.
/// - Everything else maps to 500 with the detail logged, not returned.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "resource not found".to_string()),
        sqlx::Error::Database(db_err) => {
            if matches!(db_err.code().as_deref(), Some("23502" | "23503" | "23505")) {
                return (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable".to_string());
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

/// Fallback for routes that do not exist.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for known routes hit with an unsupported verb.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
