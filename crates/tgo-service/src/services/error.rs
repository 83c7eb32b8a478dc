//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use std::fmt;

use tgo_common::AppError;
use tgo_core::DomainError;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or repository failure
    Domain(DomainError),

    /// Application error (auth, config, etc.)
    App(AppError),

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// Event id in the request does not name an event
    InvalidEvent(String),

    /// Rejected input; the message is shown to the user as-is
    Validation(String),

    /// Capacity reached; the message is shown to the user as-is
    EventFull(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::InvalidEvent(msg)
            | Self::Validation(msg)
            | Self::EventFull(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => Self::status_for_domain(e),
            Self::App(e) => e.status_code(),
            Self::NotFound { .. } => 404,
            Self::InvalidEvent(_) | Self::Validation(_) | Self::EventFull(_) => 400,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidEvent(_) => "INVALID_EVENT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::EventFull(_) => "EVENT_FULL",
        }
    }

    /// HTTP status for a domain error
    ///
    /// Unknown events and fields are request errors (400), not missing resources.
    pub fn status_for_domain(err: &DomainError) -> u16 {
        if err.is_authorization() {
            403
        } else if err.is_validation() || err.is_not_found() || matches!(err, DomainError::EventFull) {
            400
        } else {
            500
        }
    }

    /// Whether the failure is on the server side
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::NotFound { resource, id } => {
                AppError::NotFound(format!("{resource} {id}"))
            }
            ServiceError::InvalidEvent(msg) | ServiceError::Validation(msg) => {
                AppError::Validation(msg)
            }
            ServiceError::EventFull(_) => AppError::Domain(DomainError::EventFull),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
