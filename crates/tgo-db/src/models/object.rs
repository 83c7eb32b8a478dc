//! Object and metadata row models

use sqlx::FromRow;

/// Database model for tgo_objects table
#[derive(Debug, Clone, FromRow)]
pub struct ObjectModel {
    pub id: i64,
    pub object_type: String,
    pub title: String,
    pub author_id: Option<i64>,
}

/// One key/value row from tgo_object_meta or tgo_user_meta
#[derive(Debug, Clone, FromRow)]
pub struct MetaModel {
    pub meta_key: String,
    pub meta_value: String,
}
