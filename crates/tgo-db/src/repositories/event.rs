//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tgo_core::traits::{EventRepository, RepoResult};
use tgo_core::{Event, EventPatch, NewEvent, ObjectId};

use crate::mappers::{event_from_meta, meta, new_event_meta, patch_meta};
use crate::models::ObjectModel;

use super::error::{event_not_found, map_db_error, map_missing_object};
use super::meta_rows::{load_object_meta, load_object_value, upsert_object_meta};

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> RepoResult<Option<Event>> {
        let model = sqlx::query_as::<_, ObjectModel>(
            r#"
            SELECT id, object_type, title, author_id
            FROM tgo_objects
            WHERE id = $1 AND object_type = $2
            "#,
        )
        .bind(id.to_i64())
        .bind(meta::OBJECT_TYPE_EVENT)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(model) = model else {
            return Ok(None);
        };

        let values = load_object_meta(&self.pool, model.id)
            .await
            .map_err(map_db_error)?;

        Ok(Some(event_from_meta(id, model.title, &values)))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: ObjectId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM tgo_objects WHERE id = $1 AND object_type = $2)
            "#,
        )
        .bind(id.to_i64())
        .bind(meta::OBJECT_TYPE_EVENT)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, event), fields(title = %event.title))]
    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let rows = new_event_meta(event)?;
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let raw_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO tgo_objects (object_type, title)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(meta::OBJECT_TYPE_EVENT)
        .bind(&event.title)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for (key, value) in &rows {
            upsert_object_meta(&mut *tx, raw_id, key, value)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(Event {
            id: ObjectId::from_i64(raw_id),
            title: event.title.clone(),
            start_date_time: event.start_date_time,
            field_id: event.field_id,
            max_participants: event.max_participants,
            allowed_roles: event.allowed_roles.clone(),
        })
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: ObjectId, patch: &EventPatch) -> RepoResult<Event> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE tgo_objects
            SET title = COALESCE($3, title), updated_at = NOW()
            WHERE id = $1 AND object_type = $2
            "#,
        )
        .bind(id.to_i64())
        .bind(meta::OBJECT_TYPE_EVENT)
        .bind(patch.title.as_deref())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(id));
        }

        for (key, value) in patch_meta(patch) {
            upsert_object_meta(&mut *tx, id.to_i64(), key, &value)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        self.find_by_id(id).await?.ok_or_else(|| event_not_found(id))
    }

    #[instrument(skip(self))]
    async fn allowed_roles(&self, id: ObjectId) -> RepoResult<Option<Vec<String>>> {
        let raw = load_object_value(&self.pool, id.to_i64(), meta::EVENT_ALLOWED_ROLES)
            .await
            .map_err(map_db_error)?;

        Ok(meta::decode_allowed_roles(raw.as_deref()))
    }

    #[instrument(skip(self))]
    async fn set_allowed_roles(&self, id: ObjectId, roles: &[String]) -> RepoResult<()> {
        let value = meta::encode_allowed_roles(roles)?;

        upsert_object_meta(&self.pool, id.to_i64(), meta::EVENT_ALLOWED_ROLES, &value)
            .await
            .map_err(|e| map_missing_object(e, || event_not_found(id)))
    }
}
