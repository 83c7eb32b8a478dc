//! # tgo-api
//!
//! REST surface of the tactical game organizer, built with Axum. Routes live under
//! `/tactical-game-organizer/v1`; health probes sit outside the namespace.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::API_PREFIX;
pub use server::{create_app, create_app_state, run};
pub use state::AppState;
