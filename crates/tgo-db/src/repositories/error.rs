//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use tgo_core::{DomainError, ObjectId};

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Metadata written for a missing object violates the foreign key
pub fn map_missing_object<F>(e: SqlxError, on_missing: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_missing();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create an "event not found" error
pub fn event_not_found(id: ObjectId) -> DomainError {
    DomainError::EventNotFound(id)
}
