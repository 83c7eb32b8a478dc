//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of one request.

pub mod context;
pub mod error;
pub mod event_admin;
pub mod participant;
pub mod registration;
pub mod role_policy;

pub use context::{ServiceContext, ServiceContextBuilder, StoreBackend};
pub use error::{ServiceError, ServiceResult};
pub use event_admin::EventAdminService;
pub use participant::ParticipantService;
pub use registration::RegistrationService;
pub use role_policy::RolePolicy;
