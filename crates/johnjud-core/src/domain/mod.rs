//! Storage-side records and their value types.

mod adopt;
mod like;
mod pet;
mod pet_traits;

pub use adopt::*;
pub use like::*;
pub use pet::*;
pub use pet_traits::*;
