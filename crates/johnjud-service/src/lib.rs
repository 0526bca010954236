//! # Johnjud Service
//!
//! Business logic for the Johnjud backend: the pet listing pipeline
//! (filter, paginate, attach images), pet CRUD with visibility and adoption,
//! and likes.

pub mod dto;
pub mod filter;
pub mod image_service;
pub mod r#impl;
pub mod like_service;
pub mod mappers;
pub mod pet_service;

pub use dto::*;
pub use filter::{filter_pets, PetFilter};
pub use image_service::*;
pub use like_service::*;
pub use mappers::assemble_images;
pub use pet_service::*;
pub use r#impl::{LikeServiceImpl, PetServiceImpl};
