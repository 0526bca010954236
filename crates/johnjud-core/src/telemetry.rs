//! Structured logging.
//!
//! Components never log through a process-wide handle of their own: each
//! one receives a [`Logger`] in its constructor, tagged with the component
//! name, and every event it emits carries `service` and `module` fields.

use std::fmt::Display;

/// Injected structured logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    service: &'static str,
}

impl Logger {
    /// Creates a logger for the named component.
    #[must_use]
    pub const fn new(service: &'static str) -> Self {
        Self { service }
    }

    /// Returns the component name attached to every event.
    #[must_use]
    pub const fn service(&self) -> &'static str {
        self.service
    }

    pub fn debug(&self, module: &str, message: impl Display) {
        tracing::debug!(service = self.service, module = module, "{}", message);
    }

    pub fn info(&self, module: &str, message: impl Display) {
        tracing::info!(service = self.service, module = module, "{}", message);
    }

    pub fn warn(&self, module: &str, message: impl Display) {
        tracing::warn!(service = self.service, module = module, "{}", message);
    }

    pub fn error(&self, module: &str, message: impl Display) {
        tracing::error!(service = self.service, module = module, "{}", message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("backend")
    }
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `log_level` when set. `log_format` is either
/// `json` or `pretty`; anything else falls back to the compact text format.
#[cfg(feature = "telemetry")]
pub fn init_logging(log_level: &str, log_format: &str) -> crate::JohnjudResult<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},johnjud=debug")));

    let registry = tracing_subscriber::registry().with(filter);

    let result = match log_format {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        "pretty" => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_target(true))
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };

    result.map_err(|e| crate::JohnjudError::Configuration(format!("Failed to init logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_carries_service_name() {
        let logger = Logger::new("pet");
        assert_eq!(logger.service(), "pet");
        assert_eq!(Logger::default().service(), "backend");
    }

    #[test]
    fn test_logger_calls_without_subscriber() {
        let logger = Logger::new("pet");
        logger.debug("find one", "looking up pet");
        logger.info("find one", format_args!("found {}", 1));
        logger.warn("find one", "slow");
        logger.error("find one", "boom");
    }
}
