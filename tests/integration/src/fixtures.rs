//! Test fixtures and data generators

use anyhow::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::helpers::{assert_json, TestServer};

/// Registration body
#[derive(Debug, Clone, Serialize)]
pub struct RegisterBody {
    pub callsign: String,
    pub role: String,
    pub team: String,
}

impl RegisterBody {
    pub fn new(callsign: &str, role: &str, team: &str) -> Self {
        Self {
            callsign: callsign.to_string(),
            role: role.to_string(),
            team: team.to_string(),
        }
    }
}

/// Success body of register and cancel
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Roster row
#[derive(Debug, Deserialize)]
pub struct Row {
    pub user_id: u64,
    pub callsign: String,
    pub role: String,
    pub role_label: String,
    pub team: String,
    pub can_cancel: bool,
}

/// Participant listing
#[derive(Debug, Deserialize)]
pub struct Listing {
    pub participants: Vec<Row>,
    pub max_participants: u32,
    pub current_count: usize,
    pub has_available_slots: bool,
    pub allowed_roles: serde_json::Map<String, serde_json::Value>,
    pub default_role: String,
}

impl Listing {
    pub fn user_ids(&self) -> Vec<u64> {
        self.participants.iter().map(|row| row.user_id).collect()
    }
}

/// Event as returned by the event endpoints
#[derive(Debug, Deserialize)]
pub struct EventBody {
    pub id: u64,
    pub title: String,
    pub start_date_time: Option<String>,
    pub max_participants: u32,
    pub current_count: usize,
    pub is_active: bool,
}

/// Create an event through the API as an organizer
pub async fn create_event(
    server: &TestServer,
    max_participants: u32,
    allowed_roles: Option<&[&str]>,
) -> Result<EventBody> {
    let token = server.organizer_token(900);
    let mut body = json!({
        "title": "Operation Nightfall",
        "date": "2099-05-01",
        "time": "18:00",
        "max_participants": max_participants,
    });
    if let Some(roles) = allowed_roles {
        body["allowed_roles"] = json!(roles);
    }

    let response = server.post_auth("/events", &token, &body).await?;
    assert_json(response, StatusCode::CREATED).await
}

/// Fetch the listing, optionally as a user
pub async fn listing(server: &TestServer, event_id: u64, token: Option<&str>) -> Result<Listing> {
    let path = format!("/events/{event_id}/participants");
    let response = match token {
        Some(token) => server.get_auth(&path, token).await?,
        None => server.get(&path).await?,
    };
    assert_json(response, StatusCode::OK).await
}

/// Register a player and return the raw response
pub async fn register(
    server: &TestServer,
    event_id: u64,
    token: &str,
    body: &RegisterBody,
) -> Result<reqwest::Response> {
    server
        .post_auth(&format!("/events/{event_id}/register"), token, body)
        .await
}
