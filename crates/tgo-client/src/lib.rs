//! # tgo-client
//!
//! Client side of event registration. It talks to the REST surface only:
//!
//! - [`ApiClient`]: typed calls over `reqwest`
//! - [`ViewModel`]: roster, counter, progress and form state derived from listings
//! - [`RegistrationSession`]: actions that refresh the view-model after every mutation
//! - [`RosterPoller`]: periodic re-fetch of the listing

pub mod api;
pub mod models;
pub mod poller;
pub mod session;
pub mod view;

pub use api::{ApiClient, ClientError};
pub use models::{MessageBody, Participant, ParticipantList, RegistrationForm, RoleOptions, RolesList};
pub use poller::{RosterPoller, DEFAULT_POLL_INTERVAL};
pub use session::RegistrationSession;
pub use view::{FormInputs, Notice, NoticeKind, RoleOption, ViewModel};
