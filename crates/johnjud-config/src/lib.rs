//! # Johnjud Config
//!
//! Layered configuration for the Johnjud backend: TOML files, a `.env`
//! file, `JOHNJUD__*` environment variables, and the flat variables used by
//! existing deployments (`DB_URL`, `APP_PORT`, `APP_ENV`, `SERVICE_FILE`).

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
