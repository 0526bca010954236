//! Data Transfer Objects (DTOs).

mod like_dto;
mod pet_dto;

pub use like_dto::*;
pub use pet_dto::*;
