//! Application state
//!
//! Holds the shared state for the Axum application: the service context, the
//! configuration and the token verifier.

use std::sync::Arc;

use tgo_common::{AppConfig, JwtService, Messages};
use tgo_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    jwt_service: Arc<JwtService>,
}

impl AppState {
    /// Create a new AppState; the token verifier is built from the JWT settings
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.token_expiry);
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            jwt_service: Arc::new(jwt_service),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the token verifier
    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    /// Message catalog of the configured locale
    pub fn messages(&self) -> &Messages {
        self.service_context.messages()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("config", &"AppConfig")
            .finish()
    }
}
