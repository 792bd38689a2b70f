pub mod actor;
pub mod auth;
pub mod health;
pub mod movie;
