//! Like-related DTOs.

use johnjud_core::rules;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wire-side like. `id` is empty on create.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct LikeDto {
    pub id: String,

    #[validate(custom(function = "rules::uuid", message = "must be a UUID"))]
    pub user_id: String,

    #[validate(custom(function = "rules::uuid", message = "must be a UUID"))]
    pub pet_id: String,
}
