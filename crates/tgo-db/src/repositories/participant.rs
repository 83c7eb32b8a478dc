//! PostgreSQL implementation of ParticipantRepository
//!
//! The roster is a single metadata row. Mutations lock that row (`SELECT ... FOR UPDATE`)
//! inside a transaction, so concurrent registrations are serialized per event.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use tgo_core::traits::{ParticipantRepository, RepoResult};
use tgo_core::{AddOutcome, ObjectId, Roster, UserId};

use crate::mappers::meta;

use super::error::{event_not_found, map_db_error, map_missing_object};
use super::meta_rows::{load_object_value, upsert_object_meta};

/// PostgreSQL implementation of ParticipantRepository
#[derive(Clone)]
pub struct PgParticipantRepository {
    pool: PgPool,
}

impl PgParticipantRepository {
    /// Create a new PgParticipantRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a read-modify-write on the locked roster row
    ///
    /// `mutate` returns its result and whether the roster changed; unchanged rosters are
    /// not written back.
    async fn with_locked_roster<T, F>(&self, event_id: ObjectId, mutate: F) -> RepoResult<T>
    where
        F: FnOnce(&mut Roster) -> (T, bool) + Send,
        T: Send,
    {
        let raw_id = event_id.to_i64();
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Make sure there is a row to lock
        sqlx::query(
            r#"
            INSERT INTO tgo_object_meta (object_id, meta_key, meta_value)
            VALUES ($1, $2, '[]')
            ON CONFLICT (object_id, meta_key) DO NOTHING
            "#,
        )
        .bind(raw_id)
        .bind(meta::EVENT_PARTICIPANTS)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_missing_object(e, || event_not_found(event_id)))?;

        let raw = sqlx::query_scalar::<_, String>(
            r#"
            SELECT meta_value FROM tgo_object_meta
            WHERE object_id = $1 AND meta_key = $2
            FOR UPDATE
            "#,
        )
        .bind(raw_id)
        .bind(meta::EVENT_PARTICIPANTS)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let mut roster = meta::decode_roster_for_update(Some(&raw))?;
        let (result, changed) = mutate(&mut roster);

        if changed {
            let encoded = meta::encode_roster(&roster)?;
            upsert_object_meta(&mut *tx, raw_id, meta::EVENT_PARTICIPANTS, &encoded)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(result)
    }
}

#[async_trait]
impl ParticipantRepository for PgParticipantRepository {
    #[instrument(skip(self))]
    async fn list(&self, event_id: ObjectId) -> RepoResult<Vec<UserId>> {
        let raw = load_object_value(&self.pool, event_id.to_i64(), meta::EVENT_PARTICIPANTS)
            .await
            .map_err(map_db_error)?;

        Ok(meta::decode_roster(raw.as_deref()).into_vec())
    }

    #[instrument(skip(self))]
    async fn add(&self, event_id: ObjectId, user_id: UserId) -> RepoResult<bool> {
        self.with_locked_roster(event_id, |roster| {
            let added = roster.add(user_id);
            (added, added)
        })
        .await
    }

    #[instrument(skip(self))]
    async fn add_within_capacity(
        &self,
        event_id: ObjectId,
        user_id: UserId,
        max: u32,
    ) -> RepoResult<AddOutcome> {
        let outcome = self
            .with_locked_roster(event_id, |roster| {
                let outcome = roster.add_within_capacity(user_id, max);
                (outcome, outcome == AddOutcome::Added)
            })
            .await?;

        debug!(?outcome, "Roster append");
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn remove(&self, event_id: ObjectId, user_id: UserId) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let raw = sqlx::query_scalar::<_, String>(
            r#"
            SELECT meta_value FROM tgo_object_meta
            WHERE object_id = $1 AND meta_key = $2
            FOR UPDATE
            "#,
        )
        .bind(event_id.to_i64())
        .bind(meta::EVENT_PARTICIPANTS)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // No roster row, nothing to remove
        let Some(raw) = raw else {
            return Ok(false);
        };

        let mut roster = meta::decode_roster_for_update(Some(&raw))?;
        let removed = roster.remove(user_id);

        if removed {
            let encoded = meta::encode_roster(&roster)?;
            upsert_object_meta(&mut *tx, event_id.to_i64(), meta::EVENT_PARTICIPANTS, &encoded)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(removed)
    }
}
