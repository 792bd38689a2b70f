pub mod drink_repo;

pub use drink_repo::DrinkRepo;
