//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateEventRequest, CreateFieldRequest, RegisterRequest, SetAllowedRolesRequest,
    UpdateEventRequest,
};

pub use responses::{
    AllowedRolesResponse, EventResponse, FieldResponse, HealthChecks, HealthResponse,
    MessageResponse, ParticipantListResponse, ParticipantRow, ReadinessResponse, RolesResponse,
};

pub use mappers::EventDetails;
