//! Configuration loader with layered sources.

use crate::AppConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use johnjud_core::{JohnjudError, JohnjudResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Flat environment variables understood by existing deployments, and the
/// configuration keys they override.
const LEGACY_DB_URL: &str = "DB_URL";
const LEGACY_APP_PORT: &str = "APP_PORT";
const LEGACY_APP_ENV: &str = "APP_ENV";
const LEGACY_SERVICE_FILE: &str = "SERVICE_FILE";

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a loader reading TOML files from `config_dir`.
    ///
    /// Sources, later ones winning:
    /// 1. `default.toml`
    /// 2. `{environment}.toml`
    /// 3. `local.toml` (not committed to version control)
    /// 4. `JOHNJUD__SECTION__KEY` environment variables
    /// 5. `DB_URL`, `APP_PORT`, `APP_ENV`, `SERVICE_FILE`
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Loader for the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Loads `.env` if present, then builds the configuration from the
    /// process environment.
    pub fn load(&self) -> JohnjudResult<AppConfig> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        self.load_with(|key| std::env::var(key).ok())
    }

    /// Builds the configuration, reading flat variables through `env`.
    fn load_with<F>(&self, env: F) -> JohnjudResult<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = env("JOHNJUD__APP__ENVIRONMENT")
            .or_else(|| env(LEGACY_APP_ENV))
            .unwrap_or_else(|| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = self.config_dir.join(format!("{name}.toml"));
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("JOHNJUD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder = apply_legacy_overrides(builder, &env)?;

        let config = builder.build().map_err(config_error_to_johnjud_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_johnjud_error)?;

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Maps the flat deployment variables onto their configuration keys.
fn apply_legacy_overrides<F>(
    builder: ConfigBuilder<DefaultState>,
    env: &F,
) -> JohnjudResult<ConfigBuilder<DefaultState>>
where
    F: Fn(&str) -> Option<String>,
{
    let port = env(LEGACY_APP_PORT)
        .map(|raw| {
            raw.trim().parse::<u16>().map(i64::from).map_err(|e| {
                JohnjudError::Configuration(format!("{LEGACY_APP_PORT} is not a valid port: {e}"))
            })
        })
        .transpose()?;

    builder
        .set_override_option("database.url", env(LEGACY_DB_URL))
        .and_then(|b| b.set_override_option("server.grpc_port", port))
        .and_then(|b| b.set_override_option("app.environment", env(LEGACY_APP_ENV)))
        .and_then(|b| b.set_override_option("image_service.url", env(LEGACY_SERVICE_FILE)))
        .map_err(config_error_to_johnjud_error)
}

/// Validates the configuration.
fn validate_config(config: &AppConfig) -> JohnjudResult<()> {
    if config.database.url.is_empty() {
        return Err(JohnjudError::Configuration("Database URL is required".to_string()));
    }

    if config.image_service.url.is_empty() {
        return Err(JohnjudError::Configuration(
            "Image service URL is required".to_string(),
        ));
    }

    if config.image_service.timeout_ms == 0 {
        return Err(JohnjudError::Configuration(
            "Image service timeout must be positive".to_string(),
        ));
    }

    if !matches!(config.observability.log_format.as_str(), "json" | "pretty") {
        warn!(
            "Unknown log format '{}', falling back to compact output",
            config.observability.log_format
        );
    }

    Ok(())
}

fn config_error_to_johnjud_error(err: ConfigError) -> JohnjudError {
    JohnjudError::Configuration(err.to_string())
}
