//! Movie casting API: movie and actor management behind permission-scoped
//! bearer tokens, backed by PostgreSQL.

pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
