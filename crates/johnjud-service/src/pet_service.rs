//! Pet service trait definition.

use crate::dto::{FindAllPetsQuery, PetDto, PetListResponse};
use async_trait::async_trait;
use johnjud_core::{Interface, JohnjudResult, PetId};

/// Pet service trait.
#[async_trait]
pub trait PetService: Interface + Send + Sync {
    /// Creates a pet, attaches the images it names and returns it.
    async fn create(&self, pet: PetDto) -> JohnjudResult<PetDto>;

    /// Gets a pet by ID.
    async fn find_one(&self, id: PetId) -> JohnjudResult<PetDto>;

    /// Lists pets matching the query, one page at a time.
    async fn find_all(&self, query: FindAllPetsQuery) -> JohnjudResult<PetListResponse>;

    /// Updates a pet and returns the persisted state.
    async fn update(&self, id: PetId, pet: PetDto) -> JohnjudResult<PetDto>;

    /// Soft-deletes a pet.
    async fn delete(&self, id: PetId) -> JohnjudResult<bool>;

    /// Shows or hides a pet from non-admin listings.
    async fn change_view(&self, id: PetId, visible: bool) -> JohnjudResult<bool>;

    /// Records the user adopting a pet.
    async fn adopt_pet(&self, id: PetId, user_id: String) -> JohnjudResult<bool>;
}
