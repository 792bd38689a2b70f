pub mod actor_repo;
pub mod movie_repo;

pub use actor_repo::ActorRepo;
pub use movie_repo::MovieRepo;
