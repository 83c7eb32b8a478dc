//! PostgreSQL implementation of ProfileRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tgo_core::traits::{ProfileRepository, RepoResult};
use tgo_core::{PlayerProfile, UserId};

use crate::mappers::{meta, profile_from_meta, profile_meta};
use crate::models::MetaModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: UserId) -> RepoResult<PlayerProfile> {
        let keys = [meta::USER_CALLSIGN, meta::USER_LAST_ROLE, meta::USER_LAST_TEAM];

        let rows = sqlx::query_as::<_, MetaModel>(
            r#"
            SELECT meta_key, meta_value FROM tgo_user_meta
            WHERE user_id = $1 AND meta_key = ANY($2)
            "#,
        )
        .bind(user_id.to_i64())
        .bind(&keys[..])
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let values: HashMap<String, String> =
            rows.into_iter().map(|r| (r.meta_key, r.meta_value)).collect();

        Ok(profile_from_meta(&values))
    }

    #[instrument(skip(self, profile))]
    async fn save(&self, user_id: UserId, profile: &PlayerProfile) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for (key, value) in profile_meta(profile) {
            sqlx::query(
                r#"
                INSERT INTO tgo_user_meta (user_id, meta_key, meta_value)
                VALUES ($1, $2, $3)
                ON CONFLICT (user_id, meta_key) DO UPDATE SET meta_value = EXCLUDED.meta_value
                "#,
            )
            .bind(user_id.to_i64())
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }
}
