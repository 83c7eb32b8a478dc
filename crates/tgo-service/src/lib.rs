//! # tgo-service
//!
//! Application layer containing the role policy, the registration state machine, event and
//! field administration, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    EventAdminService, ParticipantService, RegistrationService, RolePolicy, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StoreBackend,
};
