//! HTTP plumbing shared by every ensemble service: the JSON error envelope,
//! request extractors, and the middleware stack the binaries assemble.

pub mod error;
pub mod extract;
pub mod server;

pub use error::{method_not_allowed, not_found, ApiError, ApiResult};
pub use extract::{AuthState, BearerClaims, ValidatedJson};
