//! Authorization failure taxonomy.

/// Everything that can go wrong between reading the `Authorization` header
/// and accepting a permission, roughly in pipeline order.
///
/// Each variant maps to a fixed HTTP status via [`AuthError::status`]; the
/// `Display` text becomes the response `message`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header on the request.
    #[error("Authorization header is expected")]
    MissingHeader,

    /// Header present but not exactly `Bearer <token>`.
    #[error("Authorization header must be a bearer token")]
    MalformedHeader,

    /// The JWT header could not be decoded, or names no `kid`.
    #[error("Authorization malformed")]
    Malformed,

    /// Signature verification or payload parsing failed.
    #[error("Unable to parse authentication token")]
    MalformedToken,

    /// The token's `kid` is not in the key set, even after a refresh.
    #[error("Unable to find the appropriate key")]
    UnknownKeyId,

    /// Key material the verifier cannot build a decoding key from.
    #[error("Unsupported key: {0}")]
    UnsupportedKey(String),

    /// The token's `exp` is in the past.
    #[error("Token expired")]
    TokenExpired,

    /// Audience or issuer did not match the configured values.
    #[error("Incorrect claims. Check the audience and issuer")]
    InvalidClaims,

    /// The token verified but carries no permissions claim at all.
    #[error("Permissions not included in token")]
    PermissionsMissing,

    /// The permissions claim lacks the required permission.
    #[error("Permission not found: {0}")]
    Forbidden(String),

    /// The key set could not be fetched or deserialized.
    #[error("Failed to fetch signing keys: {0}")]
    JwksFetch(String),
}

impl AuthError {
    /// HTTP status code this failure maps to.
    pub fn status(&self) -> u16 {
        match self {
            AuthError::MissingHeader
            | AuthError::MalformedHeader
            | AuthError::Malformed
            | AuthError::TokenExpired
            | AuthError::InvalidClaims => 401,
            AuthError::MalformedToken
            | AuthError::UnknownKeyId
            | AuthError::UnsupportedKey(_)
            | AuthError::PermissionsMissing => 400,
            AuthError::Forbidden(_) => 403,
            AuthError::JwksFetch(_) => 500,
        }
    }
}
