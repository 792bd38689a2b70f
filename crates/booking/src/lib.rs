//! Venue and artist booking API: grouped venue listings, fuzzy search, and
//! show scheduling with past/upcoming splits, backed by PostgreSQL.

pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
