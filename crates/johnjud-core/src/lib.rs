//! # Johnjud Core
//!
//! Core types shared by every layer of the Johnjud backend: the error
//! taxonomy, typed identifiers, storage records for pets, likes and
//! adoptions, in-memory pagination, and the injected logger.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod telemetry;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use telemetry::Logger;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::{module, Component, HasComponent, Interface};
