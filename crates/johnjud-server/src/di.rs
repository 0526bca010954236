//! Dependency injection module using Shaku.
//!
//! `AppModule` wires the whole backend into one process: the PostgreSQL
//! pool and repositories, the remote image client, and the pet and like
//! services.

use johnjud_config::ImageServiceConfig;
use johnjud_core::{module, HasComponent, JohnjudResult};
use johnjud_grpc::proto::image::image_service_client::ImageServiceClient;
use johnjud_grpc::{lazy_channel, GrpcImageClient, GrpcImageClientParameters};
use johnjud_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, PgAdoptRepository,
    PgLikeRepository, PgPetRepository,
};
use johnjud_service::{ImageService, LikeService, LikeServiceImpl, PetService, PetServiceImpl};
use std::sync::Arc;

// ============================================================================
// Shaku Module Definitions
// ============================================================================

module! {
    pub AppModule {
        components = [
            DatabasePool,
            PgPetRepository,
            PgLikeRepository,
            PgAdoptRepository,
            GrpcImageClient,
            PetServiceImpl,
            LikeServiceImpl,
        ],
        providers = [],
    }
}

// ============================================================================
// Module Builders
// ============================================================================

/// Builds the application module over an established pool.
///
/// The image service channel is lazy, so this never waits on the network.
pub fn build_app_module(
    db_pool: &DatabasePool,
    image_config: &ImageServiceConfig,
) -> JohnjudResult<Arc<AppModule>> {
    let channel = lazy_channel(image_config)?;

    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<GrpcImageClient>(GrpcImageClientParameters {
            client: ImageServiceClient::new(channel),
            timeout: image_config.timeout(),
            logger: johnjud_core::Logger::new("image"),
        })
        .build();

    Ok(Arc::new(module))
}

// ============================================================================
// Module Resolution Helpers
// ============================================================================

/// Resolves the business services.
pub trait ServiceResolver {
    fn pet_service(&self) -> Arc<dyn PetService>;

    fn like_service(&self) -> Arc<dyn LikeService>;

    fn image_service(&self) -> Arc<dyn ImageService>;
}

impl ServiceResolver for AppModule {
    fn pet_service(&self) -> Arc<dyn PetService> {
        self.resolve()
    }

    fn like_service(&self) -> Arc<dyn LikeService> {
        self.resolve()
    }

    fn image_service(&self) -> Arc<dyn ImageService> {
        self.resolve()
    }
}

/// Resolves the database pool.
pub trait DatabaseResolver {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl DatabaseResolver for AppModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
