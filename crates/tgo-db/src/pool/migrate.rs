//! Embedded schema migrations
//!
//! Every statement is idempotent, so running the set on each start is safe.

use sqlx::PgPool;
use tracing::info;

const MIGRATIONS: &[(&str, &str)] = &[(
    "0001_metadata_store",
    include_str!("../../migrations/0001_metadata_store.sql"),
)];

/// Apply all schema migrations in order
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    for (name, sql) in MIGRATIONS {
        sqlx::raw_sql(sql).execute(pool).await?;
        info!(migration = %name, "Applied migration");
    }
    Ok(())
}
