//! Like service trait definition.

use crate::dto::LikeDto;
use async_trait::async_trait;
use johnjud_core::{Interface, JohnjudResult, LikeId, UserId};

/// Like service trait.
#[async_trait]
pub trait LikeService: Interface + Send + Sync {
    /// Lists a user's likes. A user without likes gets an empty list.
    async fn find_by_user_id(&self, user_id: UserId) -> JohnjudResult<Vec<LikeDto>>;

    /// Creates a like. Liking the same pet twice is a conflict.
    async fn create(&self, like: LikeDto) -> JohnjudResult<LikeDto>;

    /// Soft-deletes a like.
    async fn delete(&self, id: LikeId) -> JohnjudResult<bool>;
}
