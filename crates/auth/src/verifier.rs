//! Token verification against a JSON Web Key Set.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Validation};
use tokio::sync::RwLock;

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwks::{Jwk, Jwks};

/// Pull the bearer token out of an `Authorization` header value.
///
/// The header must be exactly `Bearer <token>`; the scheme is matched
/// case-insensitively.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;
    let mut parts = header.split_whitespace();
    let scheme = parts.next().ok_or(AuthError::MalformedHeader)?;
    let token = parts.next().ok_or(AuthError::MalformedHeader)?;
    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MalformedHeader);
    }
    Ok(token)
}

/// Verifies bearer tokens against the configured key set.
///
/// The key set is fetched lazily on first use and cached for the life of the
/// process. A token signed by an unknown `kid` triggers one refetch before
/// failing, so key rotation at the issuer does not require a restart.
pub struct TokenVerifier {
    config: AuthConfig,
    client: reqwest::Client,
    jwks: RwLock<Option<Jwks>>,
    /// When set, the verifier never fetches. Used for air-gapped setups
    /// and in tests.
    static_keys: bool,
}

impl TokenVerifier {
    /// Build a verifier that fetches the key set from the issuer.
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            jwks: RwLock::new(None),
            static_keys: false,
        }
    }

    /// Build a verifier over a fixed key set that never touches the network.
    pub fn with_static_jwks(config: AuthConfig, jwks: Jwks) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            jwks: RwLock::new(Some(jwks)),
            static_keys: true,
        }
    }

    /// The configuration this verifier was built with.
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Verify signature, expiry, audience and issuer; return the claims.
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::Malformed)?;
        let kid = header.kid.ok_or(AuthError::Malformed)?;

        let jwk = self.find_key(&kid).await?;
        let key = jwk.decoding_key()?;

        let mut validation = Validation::new(jwk.algorithm()?);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);

        let data = decode::<Claims>(token, &key, &validation).map_err(|err| match err.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => AuthError::InvalidClaims,
            _ => AuthError::MalformedToken,
        })?;
        Ok(data.claims)
    }

    /// Look up `kid` in the cached key set, refetching once on a miss.
    async fn find_key(&self, kid: &str) -> Result<Jwk, AuthError> {
        if let Some(jwks) = self.jwks.read().await.as_ref() {
            if let Some(jwk) = jwks.find(kid) {
                return Ok(jwk.clone());
            }
            if self.static_keys {
                return Err(AuthError::UnknownKeyId);
            }
        }

        let fresh = self.fetch_jwks().await?;
        let jwk = fresh.find(kid).cloned();
        *self.jwks.write().await = Some(fresh);
        jwk.ok_or(AuthError::UnknownKeyId)
    }

    async fn fetch_jwks(&self) -> Result<Jwks, AuthError> {
        let url = self.config.jwks_url();
        tracing::debug!(%url, "Fetching JWKS");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| AuthError::JwksFetch(err.to_string()))?;
        response
            .json::<Jwks>()
            .await
            .map_err(|err| AuthError::JwksFetch(err.to_string()))
    }
}
