//! Service context - dependency container for services
//!
//! Holds the repositories, the role registry and the message catalog. Built once at startup
//! by [`ServiceContextBuilder`] and shared behind an `Arc`.

use std::sync::Arc;

use tgo_common::{Locale, Messages};
use tgo_core::traits::{EventRepository, FieldRepository, ParticipantRepository, ProfileRepository};
use tgo_core::RoleRegistry;
use tgo_db::{MemoryStore, PgPool, PgStore};

use super::error::{ServiceError, ServiceResult};

/// Which persistence backend the repositories talk to
#[derive(Debug, Clone)]
pub enum StoreBackend {
    Postgres(PgPool),
    Memory,
}

impl StoreBackend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory => "memory",
        }
    }

    /// Check that the backend can serve requests
    pub async fn is_healthy(&self) -> bool {
        match self {
            Self::Postgres(pool) => pool.acquire().await.is_ok(),
            Self::Memory => true,
        }
    }
}

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    backend: StoreBackend,

    // Repositories
    event_repo: Arc<dyn EventRepository>,
    field_repo: Arc<dyn FieldRepository>,
    participant_repo: Arc<dyn ParticipantRepository>,
    profile_repo: Arc<dyn ProfileRepository>,

    role_registry: Arc<RoleRegistry>,
    messages: Messages,
}

impl ServiceContext {
    /// Get the persistence backend
    pub fn backend(&self) -> &StoreBackend {
        &self.backend
    }

    // === Repositories ===

    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    pub fn field_repo(&self) -> &dyn FieldRepository {
        self.field_repo.as_ref()
    }

    pub fn participant_repo(&self) -> &dyn ParticipantRepository {
        self.participant_repo.as_ref()
    }

    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    // === Shared tables ===

    /// Get the role registry
    pub fn role_registry(&self) -> &RoleRegistry {
        self.role_registry.as_ref()
    }

    /// Get the message catalog
    pub fn messages(&self) -> &Messages {
        &self.messages
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("backend", &self.backend.name())
            .field("repositories", &"...")
            .field("roles", &self.role_registry.entries().len())
            .field("locale", &self.messages.locale())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    backend: Option<StoreBackend>,
    event_repo: Option<Arc<dyn EventRepository>>,
    field_repo: Option<Arc<dyn FieldRepository>>,
    participant_repo: Option<Arc<dyn ParticipantRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    role_registry: Option<Arc<RoleRegistry>>,
    locale: Locale,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the PostgreSQL repositories over a pool
    pub fn postgres(mut self, pool: PgPool) -> Self {
        let store = PgStore::new(pool.clone());
        self.backend = Some(StoreBackend::Postgres(pool));
        self.event_repo = Some(Arc::new(store.events));
        self.field_repo = Some(Arc::new(store.fields));
        self.participant_repo = Some(Arc::new(store.participants));
        self.profile_repo = Some(Arc::new(store.profiles));
        self
    }

    /// Use one in-memory store for every repository
    pub fn memory(mut self, store: MemoryStore) -> Self {
        self.backend = Some(StoreBackend::Memory);
        self.event_repo = Some(Arc::new(store.clone()));
        self.field_repo = Some(Arc::new(store.clone()));
        self.participant_repo = Some(Arc::new(store.clone()));
        self.profile_repo = Some(Arc::new(store));
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn field_repo(mut self, repo: Arc<dyn FieldRepository>) -> Self {
        self.field_repo = Some(repo);
        self
    }

    pub fn participant_repo(mut self, repo: Arc<dyn ParticipantRepository>) -> Self {
        self.participant_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn role_registry(mut self, registry: Arc<RoleRegistry>) -> Self {
        self.role_registry = Some(registry);
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Build the ServiceContext
    ///
    /// The standard role registry is used unless one was supplied.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let missing = |what: &str| ServiceError::validation(format!("{what} is required"));

        Ok(ServiceContext {
            backend: self.backend.unwrap_or(StoreBackend::Memory),
            event_repo: self.event_repo.ok_or_else(|| missing("event_repo"))?,
            field_repo: self.field_repo.ok_or_else(|| missing("field_repo"))?,
            participant_repo: self
                .participant_repo
                .ok_or_else(|| missing("participant_repo"))?,
            profile_repo: self.profile_repo.ok_or_else(|| missing("profile_repo"))?,
            role_registry: self
                .role_registry
                .unwrap_or_else(|| Arc::new(RoleRegistry::standard())),
            messages: Messages::new(self.locale),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_repositories() {
        let result = ServiceContextBuilder::new().build();
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn test_build_with_memory_store() {
        let ctx = ServiceContextBuilder::new()
            .memory(MemoryStore::new())
            .locale(Locale::Ru)
            .build()
            .unwrap();

        assert_eq!(ctx.backend().name(), "memory");
        assert_eq!(ctx.messages().locale(), Locale::Ru);
        assert_eq!(ctx.role_registry().default_key(), "assault");
    }
}
