//! PostgreSQL pet repository implementation.

use crate::{traits::PetRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use johnjud_core::{Gender, JohnjudResult, Logger, Pet, PetId, PetPatch, PetStatus};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use uuid::Uuid;

macro_rules! pet_columns {
    () => {
        "id, created_at, updated_at, deleted_at, type, species, name, birthdate, \
         gender, color, pattern, habit, caption, status, is_sterile, is_vaccinated, \
         is_visible, is_club_pet, origin, address, contact, adopt_by"
    };
}

/// PostgreSQL pet repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = PetRepository)]
pub struct PgPetRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
    #[shaku(default = Logger::new("pet repository"))]
    logger: Logger,
}

impl PgPetRepository {
    /// Creates a new PostgreSQL pet repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>, logger: Logger) -> Self {
        Self { pool, logger }
    }
}

/// Database row representation of a pet.
#[derive(Debug, FromRow)]
struct PetRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    #[sqlx(rename = "type")]
    pet_type: String,
    species: Option<String>,
    name: String,
    birthdate: String,
    gender: String,
    color: String,
    pattern: String,
    habit: String,
    caption: String,
    status: String,
    is_sterile: Option<bool>,
    is_vaccinated: Option<bool>,
    is_visible: Option<bool>,
    is_club_pet: Option<bool>,
    origin: String,
    address: String,
    contact: String,
    adopt_by: Option<String>,
}

impl From<PetRow> for Pet {
    fn from(row: PetRow) -> Self {
        Self {
            id: PetId::from_uuid(row.id),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
            pet_type: row.pet_type,
            species: row.species,
            name: row.name,
            birthdate: row.birthdate,
            gender: Gender::from_label(&row.gender),
            color: row.color,
            pattern: row.pattern,
            habit: row.habit,
            caption: row.caption,
            status: PetStatus::from_label(&row.status),
            is_sterile: row.is_sterile,
            is_vaccinated: row.is_vaccinated,
            is_visible: row.is_visible,
            is_club_pet: row.is_club_pet,
            origin: row.origin,
            address: row.address,
            contact: row.contact,
            adopt_by: row.adopt_by,
        }
    }
}

#[async_trait]
impl PetRepository for PgPetRepository {
    async fn find_all(&self, include_hidden: bool) -> JohnjudResult<Vec<Pet>> {
        self.logger.debug(
            "find all",
            format_args!("Finding all pets, include_hidden: {include_hidden}"),
        );

        let rows = sqlx::query_as::<_, PetRow>(concat!(
            "SELECT ",
            pet_columns!(),
            r#"
            FROM pets
            WHERE deleted_at IS NULL
              AND ($1 OR is_visible IS DISTINCT FROM FALSE)
            ORDER BY created_at, id
            "#
        ))
        .bind(include_hidden)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Pet::from).collect())
    }

    async fn find_one(&self, id: PetId) -> JohnjudResult<Option<Pet>> {
        self.logger.debug("find one", format_args!("Finding pet by id: {id}"));

        let row = sqlx::query_as::<_, PetRow>(concat!(
            "SELECT ",
            pet_columns!(),
            r#"
            FROM pets
            WHERE id = $1 AND deleted_at IS NULL
            "#
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Pet::from))
    }

    async fn create(&self, pet: &Pet) -> JohnjudResult<Pet> {
        self.logger.debug("create", format_args!("Creating pet: {}", pet.id));

        let row = sqlx::query_as::<_, PetRow>(concat!(
            r#"
            INSERT INTO pets (
                id, created_at, updated_at, type, species, name, birthdate, gender,
                color, pattern, habit, caption, status, is_sterile, is_vaccinated,
                is_visible, is_club_pet, origin, address, contact, adopt_by
            )
            VALUES ($1, NOW(), NOW(), $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                    $12, $13, $14, $15, $16, $17, $18, $19)
            RETURNING "#,
            pet_columns!()
        ))
        .bind(pet.id.into_inner())
        .bind(&pet.pet_type)
        .bind(&pet.species)
        .bind(&pet.name)
        .bind(&pet.birthdate)
        .bind(pet.gender.as_str())
        .bind(&pet.color)
        .bind(&pet.pattern)
        .bind(&pet.habit)
        .bind(&pet.caption)
        .bind(pet.status.as_str())
        .bind(pet.is_sterile)
        .bind(pet.is_vaccinated)
        .bind(pet.is_visible)
        .bind(pet.is_club_pet)
        .bind(&pet.origin)
        .bind(&pet.address)
        .bind(&pet.contact)
        .bind(&pet.adopt_by)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(Pet::from(row))
    }

    async fn update(&self, id: PetId, patch: &PetPatch) -> JohnjudResult<Option<Pet>> {
        self.logger.debug("update", format_args!("Updating pet: {id}"));

        let row = sqlx::query_as::<_, PetRow>(concat!(
            r#"
            UPDATE pets SET
                type = COALESCE($2, type),
                species = COALESCE($3, species),
                name = COALESCE($4, name),
                birthdate = COALESCE($5, birthdate),
                gender = COALESCE($6, gender),
                color = COALESCE($7, color),
                pattern = COALESCE($8, pattern),
                habit = COALESCE($9, habit),
                caption = COALESCE($10, caption),
                status = COALESCE($11, status),
                is_sterile = COALESCE($12, is_sterile),
                is_vaccinated = COALESCE($13, is_vaccinated),
                is_visible = COALESCE($14, is_visible),
                is_club_pet = COALESCE($15, is_club_pet),
                origin = COALESCE($16, origin),
                address = COALESCE($17, address),
                contact = COALESCE($18, contact),
                adopt_by = COALESCE($19, adopt_by),
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING "#,
            pet_columns!()
        ))
        .bind(id.into_inner())
        .bind(&patch.pet_type)
        .bind(&patch.species)
        .bind(&patch.name)
        .bind(&patch.birthdate)
        .bind(patch.gender.map(|g| g.as_str()))
        .bind(&patch.color)
        .bind(&patch.pattern)
        .bind(&patch.habit)
        .bind(&patch.caption)
        .bind(patch.status.map(|s| s.as_str()))
        .bind(patch.is_sterile)
        .bind(patch.is_vaccinated)
        .bind(patch.is_visible)
        .bind(patch.is_club_pet)
        .bind(&patch.origin)
        .bind(&patch.address)
        .bind(&patch.contact)
        .bind(&patch.adopt_by)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Pet::from))
    }

    async fn delete(&self, id: PetId) -> JohnjudResult<bool> {
        self.logger.debug("delete", format_args!("Soft-deleting pet: {id}"));

        let result = sqlx::query(
            r#"
            UPDATE pets
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.into_inner())
        .execute(self.pool.inner())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
