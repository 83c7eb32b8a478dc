//! Field entity <-> model mapper

use tgo_core::{Field, ObjectId, UserId};

use crate::models::ObjectModel;

/// Convert a field object row to the entity
pub fn field_from_model(model: ObjectModel) -> Field {
    Field {
        id: ObjectId::from_i64(model.id),
        title: model.title,
        owner_id: UserId::from_i64(model.author_id.unwrap_or_default()),
    }
}
