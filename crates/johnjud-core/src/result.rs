//! Result type aliases for the Johnjud backend.

use crate::JohnjudError;

/// A specialized `Result` type for Johnjud operations.
pub type JohnjudResult<T> = Result<T, JohnjudError>;
