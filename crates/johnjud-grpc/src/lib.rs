//! # Johnjud gRPC
//!
//! gRPC transport for the Johnjud backend using Tonic: the pet, like and
//! health servers, plus the client for the remote image service.

pub mod clients;
pub mod proto;
pub mod server;
pub mod services;

pub use clients::*;
pub use server::*;
pub use services::*;
