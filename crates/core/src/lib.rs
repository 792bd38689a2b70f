//! Shared primitives for the ensemble services.
//!
//! Everything here is framework-free: scalar type aliases and pagination
//! arithmetic used by the service crates.

pub mod pagination;
pub mod types;
