//! Coffee shop drink API: a public menu plus permission-scoped recipe
//! management, backed by PostgreSQL.

pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
