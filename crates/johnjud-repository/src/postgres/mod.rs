//! PostgreSQL implementations of the repository traits.

mod adopt_repository;
mod like_repository;
mod pet_repository;

pub use adopt_repository::PgAdoptRepository;
pub use like_repository::PgLikeRepository;
pub use pet_repository::PgPetRepository;
