pub mod category;
pub mod health;
pub mod question;
pub mod quiz;
