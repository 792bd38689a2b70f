pub mod actor;
pub mod movie;
