//! # Johnjud Repository
//!
//! Data access for pets, likes and adoptions on PostgreSQL.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn PetRepository>   (repository interface)
//! PgPetRepository               (SQLx implementation)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! PostgreSQL
//! ```
//!
//! Every table carries a `deleted_at` column. Deletes only stamp it, and
//! every query filters on `deleted_at IS NULL`.

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;
    use johnjud_core::{JohnjudError, JohnjudResult, Like, LikeId, Pet, PetId, PetPatch, UserId};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory pet store mirroring the soft-delete rules of the SQL one.
    struct InMemoryPetRepository {
        pets: Mutex<Vec<Pet>>,
    }

    impl InMemoryPetRepository {
        fn new() -> Self {
            Self {
                pets: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PetRepository for InMemoryPetRepository {
        async fn find_all(&self, include_hidden: bool) -> JohnjudResult<Vec<Pet>> {
            Ok(self
                .pets
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.is_active())
                .filter(|p| include_hidden || p.is_visible != Some(false))
                .cloned()
                .collect())
        }

        async fn find_one(&self, id: PetId) -> JohnjudResult<Option<Pet>> {
            Ok(self
                .pets
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id && p.is_active())
                .cloned())
        }

        async fn create(&self, pet: &Pet) -> JohnjudResult<Pet> {
            self.pets.lock().unwrap().push(pet.clone());
            Ok(pet.clone())
        }

        async fn update(&self, id: PetId, patch: &PetPatch) -> JohnjudResult<Option<Pet>> {
            let mut pets = self.pets.lock().unwrap();
            let Some(pet) = pets.iter_mut().find(|p| p.id == id && p.is_active()) else {
                return Ok(None);
            };
            patch.apply_to(pet);
            pet.updated_at = Utc::now();
            Ok(Some(pet.clone()))
        }

        async fn delete(&self, id: PetId) -> JohnjudResult<bool> {
            let mut pets = self.pets.lock().unwrap();
            match pets.iter_mut().find(|p| p.id == id && p.is_active()) {
                Some(pet) => {
                    pet.deleted_at = Some(Utc::now());
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    /// In-memory like store enforcing one live like per (user, pet).
    struct InMemoryLikeRepository {
        likes: Mutex<HashMap<LikeId, Like>>,
    }

    impl InMemoryLikeRepository {
        fn new() -> Self {
            Self {
                likes: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl LikeRepository for InMemoryLikeRepository {
        async fn find_by_user_id(&self, user_id: UserId) -> JohnjudResult<Vec<Like>> {
            Ok(self
                .likes
                .lock()
                .unwrap()
                .values()
                .filter(|l| l.user_id == user_id && l.deleted_at.is_none())
                .cloned()
                .collect())
        }

        async fn create(&self, like: &Like) -> JohnjudResult<Like> {
            let mut likes = self.likes.lock().unwrap();
            let duplicate = likes.values().any(|l| {
                l.user_id == like.user_id && l.pet_id == like.pet_id && l.deleted_at.is_none()
            });
            if duplicate {
                return Err(JohnjudError::conflict("like already exists"));
            }
            likes.insert(like.id, like.clone());
            Ok(like.clone())
        }

        async fn delete(&self, id: LikeId) -> JohnjudResult<bool> {
            let mut likes = self.likes.lock().unwrap();
            match likes.get_mut(&id).filter(|l| l.deleted_at.is_none()) {
                Some(like) => {
                    like.deleted_at = Some(Utc::now());
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    fn pet(name: &str, visible: Option<bool>) -> Pet {
        Pet {
            name: name.to_string(),
            birthdate: "2023-01-01T00:00:00Z".to_string(),
            is_visible: visible,
            ..Pet::default()
        }
    }

    // =============================================================================
    // PetRepository Tests
    // =============================================================================

    #[tokio::test]
    async fn test_find_all_hides_invisible_pets() {
        let repo = InMemoryPetRepository::new();
        repo.create(&pet("shown", Some(true))).await.unwrap();
        repo.create(&pet("unknown", None)).await.unwrap();
        repo.create(&pet("hidden", Some(false))).await.unwrap();

        let public: Vec<String> = repo
            .find_all(false)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(public, vec!["shown", "unknown"]);

        assert_eq!(repo.find_all(true).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_deleted_pet_is_invisible() {
        let repo = InMemoryPetRepository::new();
        let created = repo.create(&pet("Mochi", Some(true))).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find_one(created.id).await.unwrap().is_none());
        assert!(repo.find_all(true).await.unwrap().is_empty());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_missing_pet_returns_none() {
        let repo = InMemoryPetRepository::new();
        let updated = repo
            .update(PetId::new(), &PetPatch::visibility(false))
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_update_applies_only_present_fields() {
        let repo = InMemoryPetRepository::new();
        let created = repo.create(&pet("Mochi", Some(true))).await.unwrap();

        let updated = repo
            .update(created.id, &PetPatch::adoption("user-1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.adopt_by.as_deref(), Some("user-1"));
        assert_eq!(updated.name, "Mochi");
        assert_eq!(updated.is_visible, Some(true));
    }

    // =============================================================================
    // LikeRepository Tests
    // =============================================================================

    #[tokio::test]
    async fn test_duplicate_like_conflicts() {
        let repo = InMemoryLikeRepository::new();
        let user = UserId::new();
        let pet = PetId::new();

        repo.create(&Like::new(user, pet)).await.unwrap();
        let err = repo.create(&Like::new(user, pet)).await.unwrap_err();
        assert!(matches!(err, JohnjudError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_like_can_be_recreated_after_delete() {
        let repo = InMemoryLikeRepository::new();
        let user = UserId::new();
        let pet = PetId::new();

        let first = repo.create(&Like::new(user, pet)).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());
        assert!(repo.find_by_user_id(user).await.unwrap().is_empty());

        repo.create(&Like::new(user, pet)).await.unwrap();
        assert_eq!(repo.find_by_user_id(user).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_unknown_like() {
        let repo = InMemoryLikeRepository::new();
        assert!(!repo.delete(LikeId::new()).await.unwrap());
    }
}
