use std::sync::Arc;

use sqlx::PgPool;

use ensemble_auth::TokenVerifier;
use ensemble_http::AuthState;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is internally reference-counted and the
/// config and verifier sit behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: PgPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Bearer token verifier, shared so the JWKS cache is process-wide.
    pub verifier: Arc<TokenVerifier>,
}

impl AuthState for AppState {
    fn verifier(&self) -> &TokenVerifier {
        &self.verifier
    }
}
