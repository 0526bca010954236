//! Repository trait definitions.
//!
//! Soft-deleted rows are invisible through every method: reads never return
//! them and writes never touch them.

use async_trait::async_trait;
use johnjud_core::{
    Adopt, AdoptId, Interface, JohnjudResult, Like, LikeId, Pet, PetId, PetPatch, UserId,
};

/// Pet repository trait.
#[async_trait]
pub trait PetRepository: Interface + Send + Sync {
    /// Returns every live pet, oldest first.
    ///
    /// Pets explicitly marked invisible are skipped unless `include_hidden`
    /// is set (admin views).
    async fn find_all(&self, include_hidden: bool) -> JohnjudResult<Vec<Pet>>;

    /// Finds a pet by ID.
    async fn find_one(&self, id: PetId) -> JohnjudResult<Option<Pet>>;

    /// Persists a new pet and returns the stored record.
    async fn create(&self, pet: &Pet) -> JohnjudResult<Pet>;

    /// Applies `patch` to a live pet. Returns `None` when no such pet exists.
    async fn update(&self, id: PetId, patch: &PetPatch) -> JohnjudResult<Option<Pet>>;

    /// Soft-deletes a pet. Returns `false` when no live pet had that ID.
    async fn delete(&self, id: PetId) -> JohnjudResult<bool>;
}

/// Like repository trait.
#[async_trait]
pub trait LikeRepository: Interface + Send + Sync {
    /// Finds the live likes of a user, oldest first.
    async fn find_by_user_id(&self, user_id: UserId) -> JohnjudResult<Vec<Like>>;

    /// Persists a new like. A second live like for the same pair is a conflict.
    async fn create(&self, like: &Like) -> JohnjudResult<Like>;

    /// Soft-deletes a like. Returns `false` when no live like had that ID.
    async fn delete(&self, id: LikeId) -> JohnjudResult<bool>;
}

/// Adoption repository trait.
#[async_trait]
pub trait AdoptRepository: Interface + Send + Sync {
    /// Returns every live adoption record.
    async fn find_all(&self) -> JohnjudResult<Vec<Adopt>>;

    /// Persists a new adoption record.
    async fn create(&self, adopt: &Adopt) -> JohnjudResult<Adopt>;

    /// Soft-deletes an adoption record.
    async fn delete(&self, id: AdoptId) -> JohnjudResult<bool>;
}
