//! Event role policy
//!
//! Resolves which roles a player may pick for an event and which role to preselect.

use tgo_core::{AllowedRoles, ObjectId, UserId};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Per-event allow-list over the role registry
pub struct RolePolicy<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RolePolicy<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Roles permitted for an event, default role first
    ///
    /// An absent or empty stored list allows every registered role.
    #[instrument(skip(self))]
    pub async fn allowed_roles(&self, event_id: ObjectId) -> ServiceResult<AllowedRoles> {
        let registry = self.ctx.role_registry();
        let stored = self.ctx.event_repo().allowed_roles(event_id).await?;

        Ok(match stored {
            Some(list) if !list.is_empty() => registry.restrict(&list),
            _ => registry.all(),
        })
    }

    /// Registry-wide role check, independent of any event
    pub fn is_valid_role(&self, key: &str) -> bool {
        self.ctx.role_registry().is_valid_role(key)
    }

    /// Role to preselect for a user
    ///
    /// The last role the user registered with wins if it is still registered; anonymous
    /// users and users without history get the default role.
    #[instrument(skip(self))]
    pub async fn default_role_for_user(&self, user_id: Option<UserId>) -> ServiceResult<String> {
        let registry = self.ctx.role_registry();
        let Some(user_id) = user_id else {
            return Ok(registry.default_key().to_string());
        };

        let profile = self.ctx.profile_repo().find(user_id).await?;
        if registry.is_valid_role(&profile.role) {
            Ok(profile.role)
        } else {
            Ok(registry.default_key().to_string())
        }
    }

    /// Normalize and persist an event's allow-list, returning what was stored
    #[instrument(skip(self, roles))]
    pub async fn save_allowed_roles<S: AsRef<str> + Sync>(
        &self,
        event_id: ObjectId,
        roles: &[S],
    ) -> ServiceResult<Vec<String>> {
        let normalized = self.ctx.role_registry().normalize_allow_list(roles);
        self.ctx
            .event_repo()
            .set_allowed_roles(event_id, &normalized)
            .await?;

        debug!(roles = ?normalized, "Allowed roles saved");
        Ok(normalized)
    }
}
