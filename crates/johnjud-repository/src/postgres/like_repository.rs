//! PostgreSQL like repository implementation.

use crate::{traits::LikeRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use johnjud_core::{JohnjudResult, Like, LikeId, Logger, PetId, UserId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use uuid::Uuid;

/// PostgreSQL like repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = LikeRepository)]
pub struct PgLikeRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
    #[shaku(default = Logger::new("like repository"))]
    logger: Logger,
}

impl PgLikeRepository {
    /// Creates a new PostgreSQL like repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>, logger: Logger) -> Self {
        Self { pool, logger }
    }
}

#[derive(Debug, FromRow)]
struct LikeRow {
    id: Uuid,
    user_id: Uuid,
    pet_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<LikeRow> for Like {
    fn from(row: LikeRow) -> Self {
        Self {
            id: LikeId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            pet_id: PetId::from_uuid(row.pet_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> JohnjudResult<Vec<Like>> {
        self.logger
            .debug("find by user id", format_args!("Finding likes of user: {user_id}"));

        let rows = sqlx::query_as::<_, LikeRow>(
            r#"
            SELECT id, user_id, pet_id, created_at, updated_at, deleted_at
            FROM likes
            WHERE user_id = $1 AND deleted_at IS NULL
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Like::from).collect())
    }

    async fn create(&self, like: &Like) -> JohnjudResult<Like> {
        self.logger.debug(
            "create",
            format_args!("Creating like: user {} pet {}", like.user_id, like.pet_id),
        );

        let row = sqlx::query_as::<_, LikeRow>(
            r#"
            INSERT INTO likes (id, user_id, pet_id, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, user_id, pet_id, created_at, updated_at, deleted_at
            "#,
        )
        .bind(like.id.into_inner())
        .bind(like.user_id.into_inner())
        .bind(like.pet_id.into_inner())
        .fetch_one(self.pool.inner())
        .await?;

        Ok(Like::from(row))
    }

    async fn delete(&self, id: LikeId) -> JohnjudResult<bool> {
        self.logger.debug("delete", format_args!("Soft-deleting like: {id}"));

        let result = sqlx::query(
            r#"
            UPDATE likes
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
