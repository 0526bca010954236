//! PostgreSQL adoption repository implementation.

use crate::{traits::AdoptRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use johnjud_core::{Adopt, AdoptId, JohnjudResult, Logger, PetId, UserId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Component, Clone)]
#[shaku(interface = AdoptRepository)]
pub struct PgAdoptRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
    #[shaku(default = Logger::new("adopt repository"))]
    logger: Logger,
}

impl PgAdoptRepository {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>, logger: Logger) -> Self {
        Self { pool, logger }
    }
}

#[derive(Debug, FromRow)]
struct AdoptRow {
    id: Uuid,
    pet_id: Option<Uuid>,
    user_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<AdoptRow> for Adopt {
    fn from(row: AdoptRow) -> Self {
        Self {
            id: AdoptId::from_uuid(row.id),
            pet_id: row.pet_id.map(PetId::from_uuid),
            user_id: row.user_id.map(UserId::from_uuid),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

#[async_trait]
impl AdoptRepository for PgAdoptRepository {
    async fn find_all(&self) -> JohnjudResult<Vec<Adopt>> {
        self.logger.debug("find all", "Finding all adoptions");

        let rows = sqlx::query_as::<_, AdoptRow>(
            r#"
            SELECT id, pet_id, user_id, created_at, updated_at, deleted_at
            FROM adopts
            WHERE deleted_at IS NULL
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Adopt::from).collect())
    }

    async fn create(&self, adopt: &Adopt) -> JohnjudResult<Adopt> {
        self.logger.debug("create", format_args!("Creating adoption: {}", adopt.id));

        let row = sqlx::query_as::<_, AdoptRow>(
            r#"
            INSERT INTO adopts (id, pet_id, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, pet_id, user_id, created_at, updated_at, deleted_at
            "#,
        )
        .bind(adopt.id.into_inner())
        .bind(adopt.pet_id.map(PetId::into_inner))
        .bind(adopt.user_id.map(UserId::into_inner))
        .fetch_one(self.pool.inner())
        .await?;

        Ok(Adopt::from(row))
    }

    async fn delete(&self, id: AdoptId) -> JohnjudResult<bool> {
        self.logger.debug("delete", format_args!("Soft-deleting adoption: {id}"));

        let result = sqlx::query(
            r#"
            UPDATE adopts
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
