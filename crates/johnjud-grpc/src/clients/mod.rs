//! Clients for the remote services the backend depends on.

mod image_client;

pub use image_client::*;
