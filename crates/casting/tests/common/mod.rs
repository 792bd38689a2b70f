use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use sqlx::PgPool;
use tower::ServiceExt;

use ensemble_auth::{AuthConfig, Jwks, TokenVerifier};
use ensemble_casting::config::ServerConfig;
use ensemble_casting::routes;
use ensemble_casting::state::AppState;
use ensemble_http::server::{apply_middleware, cors_layer};

/// Base64 of the HMAC secret carried by the `local-key` JWKS entry below.
/// Tests mint HS256 tokens against it instead of talking to a real issuer.
pub const TEST_SECRET_B64: &str = "ZW5zZW1ibGUtYXV0aC10ZXN0LXNlY3JldC0wMTIzNDU2Nzg5YWJjZGVm";
pub const TEST_KID: &str = "local-key";
pub const TEST_ISSUER: &str = "https://ensemble.test/";
pub const TEST_AUDIENCE: &str = "casting";

const TEST_JWKS: &str = r#"{
    "keys": [
        { "kty": "oct", "kid": "local-key", "alg": "HS256",
          "k": "ZW5zZW1ibGUtYXV0aC10ZXN0LXNlY3JldC0wMTIzNDU2Nzg5YWJjZGVm" }
    ]
}"#;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Authorization configuration matching the static test key set.
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        issuer: TEST_ISSUER.to_string(),
        audience: TEST_AUDIENCE.to_string(),
        client_id: Some("test-client".to_string()),
        callback_url: Some("http://localhost:5173/callback".to_string()),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. The token verifier is pinned to a
/// static JWKS so no network is involved.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_auth(pool, test_auth_config())
}

/// Like [`build_test_app`], with a caller-supplied auth configuration.
pub fn build_test_app_with_auth(pool: PgPool, auth_config: AuthConfig) -> Router {
    let config = test_config();
    let cors = cors_layer(&config.cors_origins);
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let jwks: Jwks = serde_json::from_str(TEST_JWKS).unwrap();
    let state = AppState {
        pool,
        config: Arc::new(config),
        verifier: Arc::new(TokenVerifier::with_static_jwks(auth_config, jwks)),
    };

    apply_middleware(routes::router(), cors, timeout).with_state(state)
}

/// Mint an HS256 access token carrying the given permission strings.
pub fn mint_token(permissions: &[&str]) -> String {
    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(TEST_KID.to_string());
    let now = chrono::Utc::now().timestamp();
    let claims = serde_json::json!({
        "iss": TEST_ISSUER,
        "sub": "auth0|test-user",
        "aud": TEST_AUDIENCE,
        "iat": now,
        "exp": now + 3600,
        "permissions": permissions,
    });
    jsonwebtoken::encode(
        &header,
        &claims,
        &EncodingKey::from_base64_secret(TEST_SECRET_B64).unwrap(),
    )
    .unwrap()
}

/// Token for the casting assistant role: read-only access.
pub fn assistant_token() -> String {
    mint_token(&["get:movies", "get:actors"])
}

/// Token for the casting director role: full actor control plus movie edits.
pub fn director_token() -> String {
    mint_token(&[
        "get:movies",
        "get:actors",
        "post:actor",
        "patch:actor",
        "delete:actor",
        "patch:movie",
    ])
}

/// Token for the executive producer role: everything.
pub fn producer_token() -> String {
    mint_token(&[
        "get:movies",
        "get:actors",
        "post:actor",
        "patch:actor",
        "delete:actor",
        "post:movie",
        "patch:movie",
        "delete:movie",
    ])
}

/// Send a GET request without credentials.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, None, Some(token)).await
}

/// Send a POST request with a JSON body, without credentials.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body), None).await
}

/// Send a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

/// Send a PATCH request with a JSON body and a bearer token.
pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PATCH, uri, Some(body), Some(token)).await
}

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
