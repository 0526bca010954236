//! Integration tests for PgLikeRepository.
//!
//! Requires Docker; run with `cargo test -- --ignored`.

mod common;

use common::TestDatabase;
use johnjud_core::{JohnjudError, Like, LikeId, Logger, Pet, PetId, UserId};
use johnjud_repository::{LikeRepository, PetRepository, PgLikeRepository, PgPetRepository};

async fn seed_pet(db: &TestDatabase) -> PetId {
    let repo = PgPetRepository::new(db.pool(), Logger::new("pet repository"));
    let pet = Pet {
        name: "Mochi".to_string(),
        birthdate: "2023-06-01".to_string(),
        ..Pet::default()
    };
    repo.create(&pet).await.expect("Failed to seed pet").id
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_create_and_find_by_user() {
    let db = TestDatabase::new().await;
    let repo = PgLikeRepository::new(db.pool(), Logger::new("like repository"));

    let user_id = UserId::from_uuid(db.insert_user().await);
    let other_user = UserId::from_uuid(db.insert_user().await);
    let first_pet = seed_pet(&db).await;
    let second_pet = seed_pet(&db).await;

    repo.create(&Like::new(user_id, first_pet)).await.unwrap();
    repo.create(&Like::new(user_id, second_pet)).await.unwrap();
    repo.create(&Like::new(other_user, first_pet)).await.unwrap();

    let likes = repo.find_by_user_id(user_id).await.expect("Query failed");
    assert_eq!(likes.len(), 2);
    assert!(likes.iter().all(|l| l.user_id == user_id));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_duplicate_like_is_conflict() {
    let db = TestDatabase::new().await;
    let repo = PgLikeRepository::new(db.pool(), Logger::new("like repository"));

    let user_id = UserId::from_uuid(db.insert_user().await);
    let pet_id = seed_pet(&db).await;

    repo.create(&Like::new(user_id, pet_id)).await.unwrap();
    let err = repo.create(&Like::new(user_id, pet_id)).await.unwrap_err();
    assert!(matches!(err, JohnjudError::Conflict(_)));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_like_for_unknown_pet_is_rejected() {
    let db = TestDatabase::new().await;
    let repo = PgLikeRepository::new(db.pool(), Logger::new("like repository"));

    let user_id = UserId::from_uuid(db.insert_user().await);
    let err = repo.create(&Like::new(user_id, PetId::new())).await.unwrap_err();
    assert!(matches!(err, JohnjudError::Validation(_)));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_delete_then_like_again() {
    let db = TestDatabase::new().await;
    let repo = PgLikeRepository::new(db.pool(), Logger::new("like repository"));

    let user_id = UserId::from_uuid(db.insert_user().await);
    let pet_id = seed_pet(&db).await;

    let like = repo.create(&Like::new(user_id, pet_id)).await.unwrap();
    assert!(repo.delete(like.id).await.unwrap());
    assert!(repo.find_by_user_id(user_id).await.unwrap().is_empty());
    assert!(!repo.delete(like.id).await.unwrap());

    repo.create(&Like::new(user_id, pet_id)).await.unwrap();
    assert_eq!(repo.find_by_user_id(user_id).await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_delete_unknown_like() {
    let db = TestDatabase::new().await;
    let repo = PgLikeRepository::new(db.pool(), Logger::new("like repository"));

    assert!(!repo.delete(LikeId::new()).await.unwrap());
}
