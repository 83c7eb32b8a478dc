//! # tgo-db
//!
//! Persistence layer implementing the repository traits from `tgo-core`.
//!
//! ## Overview
//!
//! Events, fields and player profiles are stored the way the host platform stores them:
//! objects with key/value metadata. Two stores are provided:
//!
//! - [`PgStore`]-backed repositories over PostgreSQL via SQLx
//! - [`MemoryStore`], a `dashmap`-backed store for development and tests
//!
//! Both encode metadata values through the same [`mappers`], so they agree on every
//! default and fallback.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tgo_db::{create_pool, run_migrations, DatabaseConfig, PgEventRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let events = PgEventRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgEventRepository, PgFieldRepository, PgParticipantRepository, PgProfileRepository, PgStore,
};
