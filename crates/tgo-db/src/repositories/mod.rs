//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in tgo-core. Every
//! repository reads and writes object or user metadata rows.

mod error;
mod event;
mod field;
mod meta_rows;
mod participant;
mod profile;

pub use event::PgEventRepository;
pub use field::PgFieldRepository;
pub use participant::PgParticipantRepository;
pub use profile::PgProfileRepository;

use sqlx::PgPool;

/// All PostgreSQL repositories sharing one pool
#[derive(Clone)]
pub struct PgStore {
    pub events: PgEventRepository,
    pub fields: PgFieldRepository,
    pub participants: PgParticipantRepository,
    pub profiles: PgProfileRepository,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            events: PgEventRepository::new(pool.clone()),
            fields: PgFieldRepository::new(pool.clone()),
            participants: PgParticipantRepository::new(pool.clone()),
            profiles: PgProfileRepository::new(pool),
        }
    }
}
