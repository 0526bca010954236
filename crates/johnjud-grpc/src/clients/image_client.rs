//! Remote image service client via gRPC.

use crate::proto::image;
use crate::services::from_proto_image;
use async_trait::async_trait;
use johnjud_config::ImageServiceConfig;
use johnjud_core::{Component, JohnjudError, JohnjudResult, Logger, PetId};
use johnjud_service::{ImageDto, ImageService};
use std::future::Future;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};

const SERVICE: &str = "image";

/// Image service client that talks to the file service over gRPC.
///
/// Every call is bounded by the configured timeout.
#[derive(Component)]
#[shaku(interface = ImageService)]
pub struct GrpcImageClient {
    client: image::image_service_client::ImageServiceClient<Channel>,
    timeout: Duration,
    #[shaku(default = Logger::new("image"))]
    logger: Logger,
}

impl GrpcImageClient {
    /// Creates a client over an existing channel.
    pub fn new(channel: Channel, timeout: Duration, logger: Logger) -> Self {
        Self {
            client: image::image_service_client::ImageServiceClient::new(channel),
            timeout,
            logger,
        }
    }

    /// Creates a client whose channel connects on first use.
    pub fn connect_lazy(config: &ImageServiceConfig, logger: Logger) -> JohnjudResult<Self> {
        let channel = lazy_channel(config)?;
        Ok(Self::new(channel, config.timeout(), logger))
    }

    async fn call<T, F>(&self, module: &str, fut: F) -> JohnjudResult<T>
    where
        F: Future<Output = Result<tonic::Response<T>, tonic::Status>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(response)) => Ok(response.into_inner()),
            Ok(Err(status)) => {
                self.logger.warn(
                    module,
                    format_args!(
                        "image service returned {:?}: {}",
                        status.code(),
                        status.message()
                    ),
                );
                Err(map_grpc_error(&status))
            }
            Err(_) => {
                self.logger
                    .warn(module, format_args!("image service timed out after {:?}", self.timeout));
                Err(JohnjudError::Unavailable(format!(
                    "image service did not answer within {:?}",
                    self.timeout
                )))
            }
        }
    }
}

/// Builds a channel to the image service without connecting.
///
/// A bare `host:port` target is dialed over plain HTTP/2.
pub fn lazy_channel(config: &ImageServiceConfig) -> JohnjudResult<Channel> {
    let endpoint = Endpoint::from_shared(endpoint_uri(&config.url)).map_err(|e| {
        JohnjudError::Configuration(format!("Invalid image service URL '{}': {e}", config.url))
    })?;
    Ok(endpoint.connect_timeout(config.timeout()).connect_lazy())
}

fn endpoint_uri(target: &str) -> String {
    if target.contains("://") {
        target.to_string()
    } else {
        format!("http://{target}")
    }
}

#[async_trait]
impl ImageService for GrpcImageClient {
    async fn find_by_pet_id(&self, pet_id: PetId) -> JohnjudResult<Vec<ImageDto>> {
        self.logger
            .debug("find by pet id", format_args!("Fetching images of pet: {pet_id}"));

        let mut client = self.client.clone();
        let response = self
            .call(
                "find by pet id",
                client.find_by_pet_id(image::FindImageByPetIdRequest {
                    pet_id: pet_id.to_string(),
                }),
            )
            .await?;

        Ok(response.images.into_iter().map(from_proto_image).collect())
    }

    async fn assign_pet(&self, pet_id: PetId, image_ids: Vec<String>) -> JohnjudResult<()> {
        self.logger.debug(
            "assign pet",
            format_args!("Assigning {} images to pet: {pet_id}", image_ids.len()),
        );

        let mut client = self.client.clone();
        let response = self
            .call(
                "assign pet",
                client.assign_pet(image::AssignPetRequest {
                    ids: image_ids,
                    pet_id: pet_id.to_string(),
                }),
            )
            .await?;

        if !response.success {
            return Err(JohnjudError::ExternalService {
                service: SERVICE.to_string(),
                message: "assign pet was not acknowledged".to_string(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for GrpcImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrpcImageClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Maps a remote status onto a local error. The remote message is logged by
/// the caller and never copied.
fn map_grpc_error(status: &tonic::Status) -> JohnjudError {
    match status.code() {
        tonic::Code::Unavailable | tonic::Code::DeadlineExceeded => {
            JohnjudError::unavailable("image service unavailable")
        }
        tonic::Code::NotFound => JohnjudError::not_found("Image", "unknown"),
        tonic::Code::InvalidArgument => {
            JohnjudError::validation("image service rejected the request")
        }
        code => JohnjudError::ExternalService {
            service: SERVICE.to_string(),
            message: format!("call failed with {code:?}"),
        },
    }
}
