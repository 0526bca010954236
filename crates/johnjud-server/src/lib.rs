//! # Johnjud Server Library
//!
//! Dependency injection wiring and startup helpers for the Johnjud
//! backend binary.

pub mod di;
pub mod startup;
