//! PostgreSQL implementation of FieldRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tgo_core::traits::{FieldRepository, RepoResult};
use tgo_core::{Field, ObjectId, UserId};

use crate::mappers::{field_from_model, meta};
use crate::models::ObjectModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FieldRepository
#[derive(Clone)]
pub struct PgFieldRepository {
    pool: PgPool,
}

impl PgFieldRepository {
    /// Create a new PgFieldRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FieldRepository for PgFieldRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> RepoResult<Option<Field>> {
        let result = sqlx::query_as::<_, ObjectModel>(
            r#"
            SELECT id, object_type, title, author_id
            FROM tgo_objects
            WHERE id = $1 AND object_type = $2
            "#,
        )
        .bind(id.to_i64())
        .bind(meta::OBJECT_TYPE_FIELD)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(field_from_model))
    }

    #[instrument(skip(self))]
    async fn create(&self, title: &str, owner_id: UserId) -> RepoResult<Field> {
        let model = sqlx::query_as::<_, ObjectModel>(
            r#"
            INSERT INTO tgo_objects (object_type, title, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, object_type, title, author_id
            "#,
        )
        .bind(meta::OBJECT_TYPE_FIELD)
        .bind(title)
        .bind(owner_id.to_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(field_from_model(model))
    }
}
