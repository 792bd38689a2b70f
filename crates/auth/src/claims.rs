//! Decoded token claims and permission checks.

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Claims decoded from a verified access token.
///
/// Audience, issuer and expiry are validated during decoding, so only the
/// fields handlers actually consume are carried here. `permissions` is kept
/// as an `Option` because a token *without* the claim is treated differently
/// from one with an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, e.g. `auth0|5f7c...`.
    #[serde(default)]
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Permission strings granted to this token, e.g. `post:drinks`.
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

impl Claims {
    /// Check that the token grants `permission`.
    ///
    /// A token with no permissions claim is a malformed token
    /// ([`AuthError::PermissionsMissing`], HTTP 400); one that has the claim
    /// but not the permission is forbidden (HTTP 403).
    pub fn check_permission(&self, permission: &str) -> Result<(), AuthError> {
        let permissions = self
            .permissions
            .as_ref()
            .ok_or(AuthError::PermissionsMissing)?;
        if permissions.iter().any(|p| p == permission) {
            Ok(())
        } else {
            Err(AuthError::Forbidden(permission.to_string()))
        }
    }
}
