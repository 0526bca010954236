//! Like gRPC service implementation.

use super::status::{parse_like_id, parse_user_id, to_status};
use crate::proto::like;
use johnjud_service::{LikeDto, LikeService};
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::debug;

/// Like gRPC service implementation.
pub struct LikeGrpcService {
    like_service: Arc<dyn LikeService>,
}

impl LikeGrpcService {
    /// Creates a new like gRPC service.
    pub fn new(like_service: Arc<dyn LikeService>) -> Self {
        Self { like_service }
    }
}

#[tonic::async_trait]
impl like::like_service_server::LikeService for LikeGrpcService {
    async fn find_by_user_id(
        &self,
        request: Request<like::FindLikeByUserIdRequest>,
    ) -> Result<Response<like::FindLikeByUserIdResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC FindByUserId: {}", req.user_id);

        let user_id = parse_user_id(&req.user_id)?;
        let likes = self
            .like_service
            .find_by_user_id(user_id)
            .await
            .map_err(to_status)?;

        Ok(Response::new(like::FindLikeByUserIdResponse {
            likes: likes.into_iter().map(to_proto_like).collect(),
        }))
    }

    async fn create(
        &self,
        request: Request<like::CreateLikeRequest>,
    ) -> Result<Response<like::CreateLikeResponse>, Status> {
        let req = request.into_inner();
        let like = req
            .like
            .ok_or_else(|| Status::invalid_argument("like is required"))?;
        debug!("gRPC CreateLike: user {} pet {}", like.user_id, like.pet_id);

        let created = self
            .like_service
            .create(LikeDto {
                id: like.id,
                user_id: like.user_id,
                pet_id: like.pet_id,
            })
            .await
            .map_err(to_status)?;

        Ok(Response::new(like::CreateLikeResponse {
            like: Some(to_proto_like(created)),
        }))
    }

    async fn delete(
        &self,
        request: Request<like::DeleteLikeRequest>,
    ) -> Result<Response<like::DeleteLikeResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC DeleteLike: {}", req.id);

        let id = parse_like_id(&req.id)?;
        let success = self.like_service.delete(id).await.map_err(to_status)?;

        Ok(Response::new(like::DeleteLikeResponse { success }))
    }
}

fn to_proto_like(dto: LikeDto) -> like::Like {
    like::Like {
        id: dto.id,
        user_id: dto.user_id,
        pet_id: dto.pet_id,
    }
}
