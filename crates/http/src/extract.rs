//! Request extractors: validated JSON bodies and verified bearer claims.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::Json;
use validator::Validate;

use ensemble_auth::{extract_bearer, Claims, TokenVerifier};

use crate::error::ApiError;

/// JSON body extractor that also runs `validator::Validate` rules.
///
/// Malformed or missing bodies and failed validations both reject with the
/// standard 400 envelope, so every error a client can provoke has one shape.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| ApiError::BadRequest)?;
        value.validate().map_err(|_| ApiError::BadRequest)?;
        Ok(ValidatedJson(value))
    }
}

/// State that can hand out the process-wide [`TokenVerifier`].
pub trait AuthState {
    fn verifier(&self) -> &TokenVerifier;
}

/// Verified claims extracted from the `Authorization: Bearer` header.
///
/// Handlers check individual permissions themselves, so the string each
/// endpoint requires stays visible at the top of its handler:
///
/// ```ignore
/// async fn create(
///     BearerClaims(claims): BearerClaims,
///     State(state): State<AppState>,
/// ) -> ApiResult<Json<serde_json::Value>> {
///     claims.check_permission("post:drinks")?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BearerClaims(pub Claims);

impl<S> FromRequestParts<S> for BearerClaims
where
    S: AuthState + Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        let token = extract_bearer(header)?;
        let claims = state.verifier().verify(token).await?;
        Ok(BearerClaims(claims))
    }
}
