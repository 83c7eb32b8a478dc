//! Shared metadata row queries

use std::collections::HashMap;

use sqlx::PgExecutor;

use crate::models::MetaModel;

/// All metadata of one object
pub async fn load_object_meta<'e, E>(executor: E, object_id: i64) -> Result<HashMap<String, String>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let rows = sqlx::query_as::<_, MetaModel>(
        r#"
        SELECT meta_key, meta_value FROM tgo_object_meta WHERE object_id = $1
        "#,
    )
    .bind(object_id)
    .fetch_all(executor)
    .await?;

    Ok(rows.into_iter().map(|r| (r.meta_key, r.meta_value)).collect())
}

/// One metadata value of an object
pub async fn load_object_value<'e, E>(
    executor: E,
    object_id: i64,
    key: &str,
) -> Result<Option<String>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT meta_value FROM tgo_object_meta WHERE object_id = $1 AND meta_key = $2
        "#,
    )
    .bind(object_id)
    .bind(key)
    .fetch_optional(executor)
    .await
}

/// Insert or replace one metadata value of an object
pub async fn upsert_object_meta<'e, E>(
    executor: E,
    object_id: i64,
    key: &str,
    value: &str,
) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO tgo_object_meta (object_id, meta_key, meta_value)
        VALUES ($1, $2, $3)
        ON CONFLICT (object_id, meta_key) DO UPDATE SET meta_value = EXCLUDED.meta_value
        "#,
    )
    .bind(object_id)
    .bind(key)
    .bind(value)
    .execute(executor)
    .await?;

    Ok(())
}
