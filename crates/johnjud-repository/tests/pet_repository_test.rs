//! Integration tests for PgPetRepository.
//!
//! These tests run against a real PostgreSQL database using testcontainers.
//! Requires Docker; run with `cargo test -- --ignored`.

mod common;

use common::TestDatabase;
use johnjud_core::{Gender, Logger, Pet, PetId, PetPatch, PetStatus};
use johnjud_repository::{PetRepository, PgPetRepository};

fn create_test_pet(name: &str, visible: Option<bool>) -> Pet {
    Pet {
        pet_type: "dog".to_string(),
        species: Some("labrador".to_string()),
        name: name.to_string(),
        birthdate: "2023-06-01T00:00:00Z".to_string(),
        gender: Gender::Female,
        color: "brown".to_string(),
        status: PetStatus::FindHome,
        is_sterile: Some(true),
        is_vaccinated: None,
        is_visible: visible,
        origin: "shelter".to_string(),
        contact: "line: johnjud".to_string(),
        ..Pet::default()
    }
}

fn repository(db: &TestDatabase) -> PgPetRepository {
    PgPetRepository::new(db.pool(), Logger::new("pet repository"))
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_create_and_find_one() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);

    let pet = create_test_pet("Mochi", Some(true));
    let created = repo.create(&pet).await.expect("Failed to create pet");
    assert_eq!(created.id, pet.id);
    assert_eq!(created.name, "Mochi");
    assert!(created.deleted_at.is_none());

    let found = repo
        .find_one(pet.id)
        .await
        .expect("Failed to find pet")
        .expect("Pet not found");

    assert_eq!(found.pet_type, "dog");
    assert_eq!(found.species.as_deref(), Some("labrador"));
    assert_eq!(found.gender, Gender::Female);
    assert_eq!(found.status, PetStatus::FindHome);
    assert_eq!(found.is_sterile, Some(true));
    assert_eq!(found.is_vaccinated, None);
    assert_eq!(found.adopt_by, None);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_find_one_not_found() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);

    let result = repo.find_one(PetId::new()).await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_find_all_respects_visibility() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);

    repo.create(&create_test_pet("shown", Some(true))).await.unwrap();
    repo.create(&create_test_pet("unknown", None)).await.unwrap();
    repo.create(&create_test_pet("hidden", Some(false))).await.unwrap();

    let public = repo.find_all(false).await.expect("Query failed");
    let names: Vec<&str> = public.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["shown", "unknown"]);

    let admin = repo.find_all(true).await.expect("Query failed");
    assert_eq!(admin.len(), 3);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_update_patches_only_present_fields() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);

    let pet = repo.create(&create_test_pet("Mochi", Some(true))).await.unwrap();

    let patch = PetPatch {
        name: Some("Mochi II".to_string()),
        is_vaccinated: Some(false),
        ..PetPatch::default()
    };
    let updated = repo
        .update(pet.id, &patch)
        .await
        .expect("Failed to update pet")
        .expect("Pet not found");

    assert_eq!(updated.name, "Mochi II");
    assert_eq!(updated.is_vaccinated, Some(false));
    assert_eq!(updated.color, "brown");
    assert_eq!(updated.is_visible, Some(true));
    assert!(updated.updated_at >= pet.updated_at);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_update_can_hide_and_adopt() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);

    let pet = repo.create(&create_test_pet("Mochi", Some(true))).await.unwrap();

    repo.update(pet.id, &PetPatch::visibility(false)).await.unwrap();
    let adopted = repo
        .update(pet.id, &PetPatch::adoption("user-42"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(adopted.is_visible, Some(false));
    assert_eq!(adopted.adopt_by.as_deref(), Some("user-42"));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_update_missing_pet() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);

    let result = repo
        .update(PetId::new(), &PetPatch::visibility(true))
        .await
        .expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_delete_is_soft_and_final() {
    let db = TestDatabase::new().await;
    let repo = repository(&db);

    let pet = repo.create(&create_test_pet("Mochi", Some(true))).await.unwrap();

    assert!(repo.delete(pet.id).await.expect("Failed to delete"));
    assert!(repo.find_one(pet.id).await.unwrap().is_none());
    assert!(repo.find_all(true).await.unwrap().is_empty());
    assert!(repo
        .update(pet.id, &PetPatch::visibility(true))
        .await
        .unwrap()
        .is_none());

    assert!(!repo.delete(pet.id).await.expect("Failed to delete"));
}
