//! Typed HTTP client for the registration endpoints

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::models::{MessageBody, ParticipantList, RegistrationForm, RolesList};

/// Path prefix of every API route
pub const API_NAMESPACE: &str = "/tactical-game-organizer/v1";

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure or undecodable body
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error body; `message` is meant for the user as-is
    #[error("{message}")]
    Api {
        status: StatusCode,
        code: String,
        message: String,
    },
}

impl ClientError {
    /// Server error code, when the server produced one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            Self::Http(_) => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
        }
    }

    pub fn is_event_full(&self) -> bool {
        self.code() == Some("EVENT_FULL")
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorPayload,
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    code: String,
    message: String,
}

/// Registration API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Client for a server root such as `http://localhost:8080`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Send a bearer token with every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_NAMESPACE, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = self.authorize(request).send().await?;
        decode(response).await
    }

    /// Roster and derived fields for an event
    #[instrument(skip(self))]
    pub async fn list_participants(&self, event_id: u64) -> Result<ParticipantList, ClientError> {
        let url = self.url(&format!("/events/{event_id}/participants"));
        self.send(self.http.get(url)).await
    }

    /// Register (or update the registration); returns the server's message
    #[instrument(skip(self, form))]
    pub async fn register(
        &self,
        event_id: u64,
        form: &RegistrationForm,
    ) -> Result<String, ClientError> {
        let url = self.url(&format!("/events/{event_id}/register"));
        let body: MessageBody = self.send(self.http.post(url).json(form)).await?;
        Ok(body.message)
    }

    /// Cancel the caller's registration; returns the server's message
    #[instrument(skip(self))]
    pub async fn cancel(&self, event_id: u64) -> Result<String, ClientError> {
        let url = self.url(&format!("/events/{event_id}/cancel"));
        let body: MessageBody = self.send(self.http.delete(url)).await?;
        Ok(body.message)
    }

    /// The full role registry
    pub async fn roles(&self) -> Result<RolesList, ClientError> {
        self.send(self.http.get(self.url("/roles"))).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await?;
    debug!(%status, body = %text, "API error response");

    let (code, message) = match serde_json::from_str::<ErrorEnvelope>(&text) {
        Ok(envelope) => (envelope.error.code, envelope.error.message),
        Err(_) => (
            status.as_str().to_string(),
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string(),
        ),
    };

    Err(ClientError::Api {
        status,
        code,
        message,
    })
}
