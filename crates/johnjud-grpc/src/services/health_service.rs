//! gRPC health service implementation.

use crate::proto::health::{
    health_check_response::ServingStatus, health_server::Health, HealthCheckRequest,
    HealthCheckResponse,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};
use tracing::debug;

/// Fully-qualified names of the services this process answers for.
pub const SERVICE_NAMES: [&str; 2] = [
    "johnjud.backend.pet.v1.PetService",
    "johnjud.backend.like.v1.LikeService",
];

/// Health service implementation.
///
/// Reports `SERVING` for the empty name and every registered service until
/// [`HealthServiceImpl::set_not_serving`] is called.
#[derive(Debug, Clone)]
pub struct HealthServiceImpl {
    serving: Arc<AtomicBool>,
}

impl Default for HealthServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthServiceImpl {
    /// Creates a new health service.
    pub fn new() -> Self {
        Self {
            serving: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Flips every service to `NOT_SERVING`, typically on shutdown.
    pub fn set_not_serving(&self) {
        self.serving.store(false, Ordering::SeqCst);
    }

    fn get_status(&self, service: &str) -> ServingStatus {
        debug!("Health check for service: {}", service);

        if !service.is_empty() && !SERVICE_NAMES.contains(&service) {
            return ServingStatus::ServiceUnknown;
        }
        if self.serving.load(Ordering::SeqCst) {
            ServingStatus::Serving
        } else {
            ServingStatus::NotServing
        }
    }
}

#[tonic::async_trait]
impl Health for HealthServiceImpl {
    async fn check(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        let req = request.into_inner();
        let status = self.get_status(&req.service);

        Ok(Response::new(HealthCheckResponse {
            status: status.into(),
        }))
    }

    type WatchStream = ReceiverStream<Result<HealthCheckResponse, Status>>;

    async fn watch(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        let req = request.into_inner();
        let status = self.get_status(&req.service);

        let (tx, rx) = tokio::sync::mpsc::channel(1);

        // Initial status only
        let _ = tx
            .send(Ok(HealthCheckResponse {
                status: status.into(),
            }))
            .await;

        Ok(Response::new(ReceiverStream::new(rx)))
    }
}
