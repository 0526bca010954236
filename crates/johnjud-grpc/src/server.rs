//! gRPC server setup.

use crate::proto::{self, health, like, pet};
use crate::services::{HealthServiceImpl, LikeGrpcService, PetGrpcService};
use johnjud_config::ServerConfig;
use johnjud_core::{JohnjudError, JohnjudResult};
use johnjud_service::{LikeService, PetService};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;
use tonic_reflection::server::v1::{ServerReflection, ServerReflectionServer};
use tracing::info;

/// gRPC server exposing the pet, like and health services.
pub struct GrpcServer {
    addr: SocketAddr,
    pet_service: Arc<dyn PetService>,
    like_service: Arc<dyn LikeService>,
    health: HealthServiceImpl,
}

impl GrpcServer {
    /// Creates a new gRPC server.
    pub fn new(
        config: &ServerConfig,
        pet_service: Arc<dyn PetService>,
        like_service: Arc<dyn LikeService>,
    ) -> JohnjudResult<Self> {
        let addr = config.grpc_addr().parse().map_err(|e| {
            JohnjudError::Configuration(format!(
                "Invalid gRPC address '{}': {}",
                config.grpc_addr(),
                e
            ))
        })?;

        Ok(Self {
            addr,
            pet_service,
            like_service,
            health: HealthServiceImpl::new(),
        })
    }

    /// Returns the address the server binds to.
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns a handle to the health service, e.g. to report `NOT_SERVING`.
    pub fn health(&self) -> HealthServiceImpl {
        self.health.clone()
    }

    /// Serves until `signal` resolves, then stops accepting calls and
    /// drains in-flight ones.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> JohnjudResult<()>
    where
        F: Future<Output = ()> + Send,
    {
        info!("Starting gRPC server on {}", self.addr);

        let reflection = reflection_service()?;
        let health = self.health.clone();
        let shutdown = async move {
            signal.await;
            health.set_not_serving();
            info!("Shutdown signal received, draining gRPC calls");
        };

        Server::builder()
            .add_service(reflection)
            .add_service(health::health_server::HealthServer::new(self.health))
            .add_service(pet::pet_service_server::PetServiceServer::new(
                PetGrpcService::new(self.pet_service),
            ))
            .add_service(like::like_service_server::LikeServiceServer::new(
                LikeGrpcService::new(self.like_service),
            ))
            .serve_with_shutdown(self.addr, shutdown)
            .await
            .map_err(|e| JohnjudError::Internal(format!("gRPC server error: {e}")))?;

        info!("gRPC server stopped");
        Ok(())
    }
}

/// Builds the server reflection service over the compiled descriptors.
fn reflection_service() -> JohnjudResult<ServerReflectionServer<impl ServerReflection>> {
    tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(proto::FILE_DESCRIPTOR_SET)
        .build_v1()
        .map_err(|e| JohnjudError::Internal(format!("Failed to build reflection service: {e}")))
}
