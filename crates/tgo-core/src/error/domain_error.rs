//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::ObjectId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Event not found: {0}")]
    EventNotFound(ObjectId),

    #[error("Field not found: {0}")]
    FieldNotFound(ObjectId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid date or time: {0}")]
    InvalidDateTime(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing capability: {0}")]
    MissingCapability(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Event is full")]
    EventFull,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::EventNotFound(_) => "INVALID_EVENT",
            Self::FieldNotFound(_) => "UNKNOWN_FIELD",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidDateTime(_) => "INVALID_DATE_TIME",

            Self::MissingCapability(_) => "MISSING_CAPABILITY",

            Self::EventFull => "EVENT_FULL",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EventNotFound(_) | Self::FieldNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidDateTime(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingCapability(_))
    }

    /// Check if this is an infrastructure failure
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::InternalError(_))
    }
}
