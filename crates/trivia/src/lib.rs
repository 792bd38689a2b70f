//! Trivia question API: categories, paginated questions, search, and quiz
//! rounds, backed by PostgreSQL.

pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
