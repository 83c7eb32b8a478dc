//! Field entity - the venue an event takes place at

use serde::{Deserialize, Serialize};

use crate::value_objects::{ObjectId, UserId};

/// Field entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: ObjectId,
    pub title: String,
    pub owner_id: UserId,
}
