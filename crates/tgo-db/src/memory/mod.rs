//! In-memory metadata store
//!
//! Selected when no database is configured. Holds the same object/metadata shape as the
//! PostgreSQL tables, keyed in `dashmap` maps.

mod store;

pub use store::MemoryStore;
