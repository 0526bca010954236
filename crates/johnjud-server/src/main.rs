//! # Johnjud Backend Server
//!
//! Main entry point: loads configuration, connects to PostgreSQL, wires the
//! services and serves gRPC until SIGINT or SIGTERM.

use johnjud_config::{AppConfig, ConfigLoader, ObservabilityConfig};
use johnjud_core::telemetry::init_logging;
use johnjud_core::{JohnjudError, JohnjudResult};
use johnjud_grpc::GrpcServer;
use johnjud_repository::{DatabasePool, DatabasePoolInterface};
use johnjud_server::di::{build_app_module, DatabaseResolver, ServiceResolver};
use johnjud_server::startup::print_startup_info;
use tokio::signal;
use tokio::sync::oneshot;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let config = ConfigLoader::from_default_location().load();

    let observability = config
        .as_ref()
        .map(|c| c.observability.clone())
        .unwrap_or_else(|_| ObservabilityConfig::default());
    if let Err(e) = init_logging(&observability.log_level, &observability.log_format) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    info!("Starting Johnjud backend...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let result = match config {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> JohnjudResult<()> {
    info!("Environment: {}", config.app.environment);

    let mut db_config = config.database.clone();
    db_config.log_queries |= config.app.is_development();

    let db_pool = DatabasePool::connect(&db_config).await?;
    db_pool.run_migrations().await?;

    let module = build_app_module(&db_pool, &config.image_service)?;

    let grpc_server = GrpcServer::new(&config.server, module.pet_service(), module.like_service())?;
    print_startup_info(&config);

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut serving = tokio::spawn(grpc_server.serve_with_shutdown(async {
        let _ = stop_rx.await;
    }));

    tokio::select! {
        result = &mut serving => {
            // Server stopped on its own, e.g. the port was taken
            return result
                .map_err(|e| JohnjudError::Internal(format!("gRPC server task failed: {e}")))?;
        }
        () = shutdown_signal() => {}
    }

    let _ = stop_tx.send(());
    let grace = config.server.shutdown_timeout();
    match tokio::time::timeout(grace, &mut serving).await {
        Ok(result) => {
            result.map_err(|e| JohnjudError::Internal(format!("gRPC server task failed: {e}")))??;
        }
        Err(_) => {
            warn!("In-flight calls still running after {:?}, forcing shutdown", grace);
            serving.abort();
        }
    }

    module.database_pool().close().await;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
