//! gRPC service implementations.

mod health_service;
mod like_service;
mod pet_service;
mod status;

pub use health_service::*;
pub use like_service::*;
pub use pet_service::*;
pub use status::to_status;
