//! Database connection pool management.

use async_trait::async_trait;
use johnjud_config::DatabaseConfig;
use johnjud_core::{Interface, JohnjudError, JohnjudResult};
use shaku::Component;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use tracing::{info, warn};

/// Interface for database pool operations.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying PostgreSQL pool.
    fn inner(&self) -> &PgPool;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> JohnjudResult<()>;

    /// Runs database migrations.
    async fn run_migrations(&self) -> JohnjudResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
#[derive(Component, Clone)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Connects to PostgreSQL using the pool settings from `config`.
    ///
    /// SQL statement logging stays at the driver default (debug level) when
    /// `config.log_queries` is set and is disabled otherwise.
    pub async fn connect(config: &DatabaseConfig) -> JohnjudResult<Self> {
        info!("Connecting to PostgreSQL database...");

        let mut options = PgConnectOptions::from_str(&config.url)
            .map_err(|e| JohnjudError::Configuration(format!("Invalid database URL: {e}")))?;
        if !config.log_queries {
            options = options.disable_statement_logging();
        }

        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                JohnjudError::Unavailable(format!("Failed to connect to database: {e}"))
            })?;

        info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    #[must_use]
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &PgPool {
        &self.pool
    }

    async fn health_check(&self) -> JohnjudResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| JohnjudError::Unavailable(format!("Health check failed: {e}")))?;
        Ok(())
    }

    async fn run_migrations(&self) -> JohnjudResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| JohnjudError::Database(format!("Migration failed: {e}")))?;
        info!("Database migrations completed");
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}
