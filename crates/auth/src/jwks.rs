//! JSON Web Key Set parsing and key construction.

use jsonwebtoken::{Algorithm, DecodingKey};
use serde::Deserialize;

use crate::error::AuthError;

/// A JWKS document as served at `.well-known/jwks.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}

/// A single key from a JWKS document.
///
/// RSA keys carry the `n`/`e` modulus and exponent the issuer publishes.
/// Symmetric keys (`kty: "oct"`) carry `k`, a base64 secret; they let a
/// deployment point the verifier at a locally served document instead of a
/// third-party tenant.
#[derive(Debug, Clone, Deserialize)]
pub struct Jwk {
    pub kty: String,
    #[serde(default)]
    pub kid: Option<String>,
    #[serde(default)]
    pub alg: Option<String>,
    #[serde(default)]
    pub n: Option<String>,
    #[serde(default)]
    pub e: Option<String>,
    #[serde(default)]
    pub k: Option<String>,
}

impl Jwks {
    /// Find a key by `kid`.
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|key| key.kid.as_deref() == Some(kid))
    }
}

impl Jwk {
    /// Signing algorithm for this key: the `alg` field when present,
    /// otherwise inferred from the key type.
    pub fn algorithm(&self) -> Result<Algorithm, AuthError> {
        match self.alg.as_deref() {
            Some(alg) => alg
                .parse()
                .map_err(|_| AuthError::UnsupportedKey(format!("algorithm {alg}"))),
            None => match self.kty.as_str() {
                "RSA" => Ok(Algorithm::RS256),
                "oct" => Ok(Algorithm::HS256),
                other => Err(AuthError::UnsupportedKey(format!("key type {other}"))),
            },
        }
    }

    /// Build the decoding key used for signature verification.
    pub fn decoding_key(&self) -> Result<DecodingKey, AuthError> {
        match self.kty.as_str() {
            "RSA" => {
                let (n, e) = self
                    .n
                    .as_deref()
                    .zip(self.e.as_deref())
                    .ok_or_else(|| AuthError::UnsupportedKey("RSA key without n/e".into()))?;
                DecodingKey::from_rsa_components(n, e)
                    .map_err(|_| AuthError::UnsupportedKey("invalid RSA components".into()))
            }
            "oct" => {
                let k = self
                    .k
                    .as_deref()
                    .ok_or_else(|| AuthError::UnsupportedKey("oct key without k".into()))?;
                DecodingKey::from_base64_secret(k)
                    .map_err(|_| AuthError::UnsupportedKey("invalid base64 secret".into()))
            }
            other => Err(AuthError::UnsupportedKey(format!("key type {other}"))),
        }
    }
}
