//! # tgo-common
//!
//! Shared utilities including configuration, error handling, identity tokens, telemetry,
//! and the localized message catalog.

pub mod auth;
pub mod config;
pub mod error;
pub mod i18n;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, JwtService};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, ServerConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use i18n::{Locale, MessageKey, Messages};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
