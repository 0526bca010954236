//! Like record.

use crate::{LikeId, PetId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's like on a pet. At most one live like exists per `(user, pet)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: LikeId,
    pub user_id: UserId,
    pub pet_id: PetId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Like {
    /// Creates a fresh like with a new id.
    #[must_use]
    pub fn new(user_id: UserId, pet_id: PetId) -> Self {
        let now = Utc::now();
        Self {
            id: LikeId::new(),
            user_id,
            pet_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}
