//! Like service implementation.

use super::classify;
use crate::dto::LikeDto;
use crate::like_service::LikeService;
use async_trait::async_trait;
use johnjud_core::{JohnjudError, JohnjudResult, LikeId, Logger, UserId};
use johnjud_repository::LikeRepository;
use shaku::Component;
use std::sync::Arc;

#[derive(Component)]
#[shaku(interface = LikeService)]
pub struct LikeServiceImpl {
    #[shaku(inject)]
    like_repository: Arc<dyn LikeRepository>,
    #[shaku(default = Logger::new("like"))]
    logger: Logger,
}

impl LikeServiceImpl {
    #[must_use]
    pub fn new(like_repository: Arc<dyn LikeRepository>, logger: Logger) -> Self {
        Self {
            like_repository,
            logger,
        }
    }
}

#[async_trait]
impl LikeService for LikeServiceImpl {
    async fn find_by_user_id(&self, user_id: UserId) -> JohnjudResult<Vec<LikeDto>> {
        self.logger
            .debug("find by user id", format_args!("Listing likes of user: {user_id}"));

        let likes = self
            .like_repository
            .find_by_user_id(user_id)
            .await
            .map_err(|e| classify(&self.logger, "find by user id", e, "failed to query likes"))?;

        Ok(likes.iter().map(LikeDto::from).collect())
    }

    async fn create(&self, like: LikeDto) -> JohnjudResult<LikeDto> {
        self.logger.debug(
            "create",
            format_args!("Creating like: user {} pet {}", like.user_id, like.pet_id),
        );

        let record = like.to_record()?;
        let created = self
            .like_repository
            .create(&record)
            .await
            .map_err(|e| classify(&self.logger, "create", e, "failed to create like"))?;

        self.logger.info("create", format_args!("Like created: {}", created.id));
        Ok(LikeDto::from(&created))
    }

    async fn delete(&self, id: LikeId) -> JohnjudResult<bool> {
        self.logger.debug("delete", format_args!("Deleting like: {id}"));

        let deleted = self
            .like_repository
            .delete(id)
            .await
            .map_err(|e| classify(&self.logger, "delete", e, "failed to delete like"))?;

        if !deleted {
            return Err(JohnjudError::not_found("Like", id));
        }
        Ok(true)
    }
}

impl std::fmt::Debug for LikeServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LikeServiceImpl").finish_non_exhaustive()
    }
}
