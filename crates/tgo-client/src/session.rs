//! Registration session: user actions against one event
//!
//! Every successful mutation is followed by a fresh listing so the view-model reflects
//! the server's roster.

use tracing::{info, instrument, warn};

use crate::api::{ApiClient, ClientError};
use crate::models::RegistrationForm;
use crate::view::ViewModel;

/// Client, event and view-model for one registration page
#[derive(Debug, Clone)]
pub struct RegistrationSession {
    client: ApiClient,
    event_id: u64,
    view: ViewModel,
}

impl RegistrationSession {
    pub fn new(client: ApiClient, event_id: u64, event_full_text: impl Into<String>) -> Self {
        Self {
            client,
            event_id,
            view: ViewModel::new(event_full_text),
        }
    }

    pub fn event_id(&self) -> u64 {
        self.event_id
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewModel {
        &mut self.view
    }

    /// Re-fetch the listing into the view-model
    #[instrument(skip(self), fields(event_id = self.event_id))]
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let list = self.client.list_participants(self.event_id).await?;
        self.view.apply_listing(&list);
        Ok(())
    }

    /// Submit the form with the current inputs and the given role
    ///
    /// On failure the server's message lands in the view-model and the error is returned.
    /// A failed follow-up listing does not undo a successful registration; the poller
    /// catches up later.
    #[instrument(skip(self), fields(event_id = self.event_id))]
    pub async fn register(&mut self, role: &str) -> Result<String, ClientError> {
        let form = RegistrationForm {
            callsign: self.view.inputs.callsign.clone(),
            role: role.to_string(),
            team: self.view.inputs.team.clone(),
        };

        self.view.begin_submit();
        match self.client.register(self.event_id, &form).await {
            Ok(message) => {
                info!("Registered");
                self.view.register_succeeded(message.clone());
                self.refresh_after_action().await;
                Ok(message)
            }
            Err(e) => {
                warn!(error = %e, "Registration failed");
                self.view.action_failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Cancel the current user's registration
    #[instrument(skip(self), fields(event_id = self.event_id))]
    pub async fn cancel(&mut self) -> Result<String, ClientError> {
        self.view.begin_submit();
        match self.client.cancel(self.event_id).await {
            Ok(message) => {
                info!("Cancelled");
                self.view.cancel_succeeded(message.clone());
                self.refresh_after_action().await;
                Ok(message)
            }
            Err(e) => {
                warn!(error = %e, "Cancellation failed");
                self.view.action_failed(e.to_string());
                Err(e)
            }
        }
    }

    async fn refresh_after_action(&mut self) {
        if let Err(e) = self.refresh().await {
            warn!(error = %e, "Roster refresh after action failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::StatusCode,
        routing::{delete, get, post},
        Json, Router,
    };
    use serde_json::json;
    use tokio::net::TcpListener;

    use crate::api::API_NAMESPACE;
    use crate::view::NoticeKind;

    /// Server whose mutations succeed while every listing fails
    async fn flaky_server() -> String {
        let app = Router::new()
            .route(
                &format!("{API_NAMESPACE}/events/:event_id/register"),
                post(|| async { Json(json!({"message": "Registered"})) }),
            )
            .route(
                &format!("{API_NAMESPACE}/events/:event_id/cancel"),
                delete(|| async { Json(json!({"message": "Cancelled"})) }),
            )
            .route(
                &format!("{API_NAMESPACE}/events/:event_id/participants"),
                get(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({"error": {"code": "INTERNAL_ERROR", "message": "Internal server error"}})),
                    )
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_register_survives_failed_refresh() {
        let client = ApiClient::new(flaky_server().await).unwrap();
        let mut session = RegistrationSession::new(client, 1, "Full");
        session.view_mut().inputs.callsign = "Echo".into();
        session.view_mut().inputs.team = "Gold".into();

        let message = session.register("assault").await.unwrap();
        assert_eq!(message, "Registered");

        let view = session.view();
        assert!(!view.submitting);
        assert!(!view.form_visible);
        assert_eq!(
            view.notice.as_ref().map(|n| (n.kind, n.text.as_str())),
            Some((NoticeKind::Success, "Registered"))
        );
    }

    #[tokio::test]
    async fn test_cancel_survives_failed_refresh() {
        let client = ApiClient::new(flaky_server().await).unwrap();
        let mut session = RegistrationSession::new(client, 1, "Full");

        let message = session.cancel().await.unwrap();
        assert_eq!(message, "Cancelled");
        assert!(!session.view().submitting);
        assert!(session.view().form_visible);
    }
}
