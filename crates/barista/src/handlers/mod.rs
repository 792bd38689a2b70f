pub mod drink;
pub mod health;
