//! Server startup utilities.

use johnjud_config::AppConfig;
use tracing::info;

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("{} v{} ({})", config.app.name, config.app.version, config.app.environment);
    info!("gRPC API:      http://{}", config.server.grpc_addr());
    info!("Image service: {}", config.image_service.url);
    info!("Health:        johnjud.health.v1.Health/Check on the gRPC port");
    info!("{}", separator);
}
