pub mod artist;
pub mod health;
pub mod show;
pub mod venue;
