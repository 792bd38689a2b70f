//! Bearer-token authorization against a third-party issuer.
//!
//! Tokens are verified against the issuer's JSON Web Key Set and carry a
//! `permissions` claim that handlers check per endpoint. The crate is
//! framework-free; the HTTP glue lives in `ensemble-http`.

pub mod claims;
pub mod config;
pub mod error;
pub mod jwks;
pub mod verifier;

pub use claims::Claims;
pub use config::AuthConfig;
pub use error::AuthError;
pub use jwks::{Jwk, Jwks};
pub use verifier::{extract_bearer, TokenVerifier};
