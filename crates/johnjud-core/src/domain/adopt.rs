//! Adoption record.

use crate::{AdoptId, PetId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Links a user to a pet they adopted.
///
/// Either side may be cleared when the referenced pet or user row is
/// removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adopt {
    pub id: AdoptId,
    pub pet_id: Option<PetId>,
    pub user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Adopt {
    #[must_use]
    pub fn new(pet_id: PetId, user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: AdoptId::new(),
            pet_id: Some(pet_id),
            user_id: Some(user_id),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}
