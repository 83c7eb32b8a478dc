//! Participant store facade
//!
//! Roster bookkeeping and the per-user last profile, on top of the repositories.

use tgo_core::{AddOutcome, ObjectId, PlayerProfile, UserId};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Participant service
pub struct ParticipantService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ParticipantService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Roster in registration order
    pub async fn participants(&self, event_id: ObjectId) -> ServiceResult<Vec<UserId>> {
        Ok(self.ctx.participant_repo().list(event_id).await?)
    }

    /// Append a user; a no-op if already registered
    #[instrument(skip(self))]
    pub async fn add_participant(&self, event_id: ObjectId, user_id: UserId) -> ServiceResult<()> {
        let added = self.ctx.participant_repo().add(event_id, user_id).await?;
        debug!(added, "Participant add");
        Ok(())
    }

    /// Capacity-checked append
    pub async fn add_within_capacity(
        &self,
        event_id: ObjectId,
        user_id: UserId,
        max: u32,
    ) -> ServiceResult<AddOutcome> {
        Ok(self
            .ctx
            .participant_repo()
            .add_within_capacity(event_id, user_id, max)
            .await?)
    }

    /// Remove a user; a no-op if not registered
    #[instrument(skip(self))]
    pub async fn remove_participant(
        &self,
        event_id: ObjectId,
        user_id: UserId,
    ) -> ServiceResult<()> {
        let removed = self.ctx.participant_repo().remove(event_id, user_id).await?;
        debug!(removed, "Participant remove");
        Ok(())
    }

    /// Store the values a user registered with
    #[instrument(skip(self, callsign, team))]
    pub async fn set_last_profile(
        &self,
        user_id: UserId,
        callsign: &str,
        role: &str,
        team: &str,
    ) -> ServiceResult<()> {
        let profile = PlayerProfile::new(callsign, role, team);
        self.ctx.profile_repo().save(user_id, &profile).await?;
        Ok(())
    }

    /// Last used values, empty strings when never stored
    pub async fn last_profile(&self, user_id: UserId) -> ServiceResult<PlayerProfile> {
        Ok(self.ctx.profile_repo().find(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceContextBuilder;
    use tgo_core::NewEvent;
    use tgo_db::MemoryStore;

    async fn setup() -> (ServiceContext, ObjectId) {
        let ctx = ServiceContextBuilder::new()
            .memory(MemoryStore::new())
            .build()
            .unwrap();
        let event = ctx
            .event_repo()
            .create(&NewEvent {
                title: "Urban sweep".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        (ctx, event.id)
    }

    #[tokio::test]
    async fn test_add_is_idempotent_and_ordered() {
        let (ctx, event_id) = setup().await;
        let service = ParticipantService::new(&ctx);

        service.add_participant(event_id, UserId::new(2)).await.unwrap();
        service.add_participant(event_id, UserId::new(1)).await.unwrap();
        service.add_participant(event_id, UserId::new(2)).await.unwrap();

        assert_eq!(
            service.participants(event_id).await.unwrap(),
            vec![UserId::new(2), UserId::new(1)]
        );
    }

    #[tokio::test]
    async fn test_remove_absent_is_noop() {
        let (ctx, event_id) = setup().await;
        let service = ParticipantService::new(&ctx);

        service.remove_participant(event_id, UserId::new(9)).await.unwrap();
        service
            .remove_participant(ObjectId::new(404), UserId::new(9))
            .await
            .unwrap();
        assert!(service.participants(event_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_capacity_outcomes() {
        let (ctx, event_id) = setup().await;
        let service = ParticipantService::new(&ctx);

        let first = service
            .add_within_capacity(event_id, UserId::new(1), 1)
            .await
            .unwrap();
        let second = service
            .add_within_capacity(event_id, UserId::new(2), 1)
            .await
            .unwrap();
        assert_eq!(first, AddOutcome::Added);
        assert_eq!(second, AddOutcome::Full);

        let unlimited = service
            .add_within_capacity(event_id, UserId::new(1), 0)
            .await
            .unwrap();
        assert_eq!(unlimited, AddOutcome::AlreadyRegistered);
    }

    #[tokio::test]
    async fn test_last_profile() {
        let (ctx, _) = setup().await;
        let service = ParticipantService::new(&ctx);
        let user = UserId::new(5);

        assert!(service.last_profile(user).await.unwrap().is_empty());

        service
            .set_last_profile(user, "Viper", "scout", "Red")
            .await
            .unwrap();
        assert_eq!(
            service.last_profile(user).await.unwrap(),
            PlayerProfile::new("Viper", "scout", "Red")
        );
    }
}
