//! Error-to-status mapping and request parsing shared by the handlers.

use johnjud_core::{JohnjudError, LikeId, PetId, UserId};
use tonic::Status;
use tracing::{debug, error};

/// Maps a service error onto a gRPC status.
///
/// Infrastructure errors never reach the caller verbatim.
pub fn to_status(err: JohnjudError) -> Status {
    match err {
        JohnjudError::NotFound { .. } => {
            debug!("gRPC not found: {}", err);
            Status::not_found(err.to_string())
        }
        JohnjudError::Validation(msg) => {
            debug!("gRPC invalid argument: {}", msg);
            Status::invalid_argument(msg)
        }
        JohnjudError::Conflict(msg) => {
            debug!("gRPC already exists: {}", msg);
            Status::already_exists(msg)
        }
        JohnjudError::Unavailable(msg) => {
            error!("gRPC unavailable: {}", msg);
            Status::unavailable(msg)
        }
        JohnjudError::NotImplemented(msg) => Status::unimplemented(msg),
        JohnjudError::Internal(msg) => {
            error!("gRPC internal error: {}", msg);
            Status::internal(msg)
        }
        other => {
            error!("gRPC error: {:?}", other);
            Status::internal("internal error")
        }
    }
}

pub(crate) fn parse_pet_id(id: &str) -> Result<PetId, Status> {
    PetId::parse(id).map_err(|e| Status::invalid_argument(format!("Invalid pet ID: {e}")))
}

pub(crate) fn parse_user_id(id: &str) -> Result<UserId, Status> {
    UserId::parse(id).map_err(|e| Status::invalid_argument(format!("Invalid user ID: {e}")))
}

pub(crate) fn parse_like_id(id: &str) -> Result<LikeId, Status> {
    LikeId::parse(id).map_err(|e| Status::invalid_argument(format!("Invalid like ID: {e}")))
}
