//! Image service client trait.

use crate::dto::ImageDto;
use async_trait::async_trait;
use johnjud_core::{Interface, JohnjudResult, PetId};

/// Remote image service as seen by the pet service.
#[async_trait]
pub trait ImageService: Interface + Send + Sync {
    /// Returns the images attached to a pet, in the service's order.
    async fn find_by_pet_id(&self, pet_id: PetId) -> JohnjudResult<Vec<ImageDto>>;

    /// Attaches the given images to a pet.
    async fn assign_pet(&self, pet_id: PetId, image_ids: Vec<String>) -> JohnjudResult<()>;
}
