//! API integration tests
//!
//! Each test spawns its own server on the in-memory store.

use integration_tests::*;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tgo_api::API_PREFIX;
use tokio::task::JoinSet;

#[tokio::test]
async fn test_health_endpoints() -> anyhow::Result<()> {
    let server = TestServer::start().await?;

    let body: Value = assert_json(server.get_raw("/health").await?, StatusCode::OK).await?;
    assert_eq!(body["status"], "healthy");

    let body: Value = assert_json(server.get_raw("/health/ready").await?, StatusCode::OK).await?;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["backend"], "memory");
    Ok(())
}

#[tokio::test]
async fn test_register_requires_login() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let event = create_event(&server, 0, None).await?;

    let response = server
        .post(
            &format!("/events/{}/register", event.id),
            &RegisterBody::new("Ghost", "assault", "Alpha"),
        )
        .await?;
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await?;
    assert_eq!(code, "UNAUTHENTICATED");

    let response = server.delete(&format!("/events/{}/cancel", event.id)).await?;
    assert_status(response, StatusCode::UNAUTHORIZED).await?;
    Ok(())
}

#[tokio::test]
async fn test_register_requires_player_capability() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let event = create_event(&server, 0, None).await?;
    let author = server.token(7, &["author"]);

    let response = register(
        &server,
        event.id,
        &author,
        &RegisterBody::new("Ghost", "assault", "Alpha"),
    )
    .await?;
    let body: Value = assert_json(response, StatusCode::FORBIDDEN).await?;
    assert_eq!(body["error"]["code"], "FORBIDDEN");
    assert_eq!(
        body["error"]["message"],
        "You do not have permission to register for events."
    );
    Ok(())
}

#[tokio::test]
async fn test_invalid_event_rejected() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let token = server.player_token(1);
    let body = RegisterBody::new("Ghost", "assault", "Alpha");

    let code = assert_error(
        register(&server, 4242, &token, &body).await?,
        StatusCode::BAD_REQUEST,
    )
    .await?;
    assert_eq!(code, "INVALID_EVENT");

    let response = server
        .post_auth("/events/not-a-number/register", &token, &body)
        .await?;
    let code = assert_error(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(code, "INVALID_EVENT");

    // Parameters are checked before credentials
    let response = server.post("/events/4242/register", &body).await?;
    let code = assert_error(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(code, "INVALID_EVENT");
    Ok(())
}

#[tokio::test]
async fn test_listing_of_missing_event_rejected() -> anyhow::Result<()> {
    let server = TestServer::start().await?;

    let response = server.get("/events/4242/participants").await?;
    let code = assert_error(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(code, "INVALID_EVENT");
    Ok(())
}

#[tokio::test]
async fn test_organizer_creates_field_and_event() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let organizer = server.organizer_token(50);

    let field: Value = assert_json(
        server
            .post_auth("/fields", &organizer, &json!({"title": "Quarry"}))
            .await?,
        StatusCode::CREATED,
    )
    .await?;
    let field_id = field["id"].as_u64().expect("field id");
    assert_eq!(field["owner_id"], 50);

    let event: Value = assert_json(
        server
            .post_auth(
                "/events",
                &organizer,
                &json!({
                    "title": "Night Raid",
                    "date": "2099-06-01",
                    "time": "21:30",
                    "field_id": field_id,
                    "max_participants": 12,
                    "allowed_roles": ["medic", "bogus"],
                }),
            )
            .await?,
        StatusCode::CREATED,
    )
    .await?;
    let event_id = event["id"].as_u64().expect("event id");
    assert_eq!(event["field"]["title"], "Quarry");
    assert_eq!(event["max_participants"], 12);
    assert_eq!(event["is_active"], true);

    let roles: Value = assert_json(
        server.get(&format!("/events/{event_id}")).await?,
        StatusCode::OK,
    )
    .await?;
    let keys: Vec<&str> = roles["allowed_roles"]
        .as_object()
        .expect("allowed roles object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["assault", "medic"]);

    let updated: Value = assert_json(
        server
            .patch_auth(
                &format!("/events/{event_id}"),
                &organizer,
                &json!({"max_participants": 20}),
            )
            .await?,
        StatusCode::OK,
    )
    .await?;
    assert_eq!(updated["max_participants"], 20);
    assert_eq!(updated["title"], "Night Raid");

    let saved: Value = assert_json(
        server
            .put_auth(
                &format!("/events/{event_id}/allowed-roles"),
                &organizer,
                &json!({"roles": ["scout", "scout"]}),
            )
            .await?,
        StatusCode::OK,
    )
    .await?;
    assert_eq!(saved["allowed_roles"], json!(["scout", "assault"]));
    Ok(())
}

#[tokio::test]
async fn test_players_cannot_manage_events() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let player = server.player_token(3);

    let response = server
        .post_auth(
            "/events",
            &player,
            &json!({"title": "Rogue", "date": "2099-01-01", "time": "10:00"}),
        )
        .await?;
    let code = assert_error(response, StatusCode::FORBIDDEN).await?;
    assert_eq!(code, "INSUFFICIENT_PERMISSIONS");

    let response = server
        .post_auth("/fields", &player, &json!({"title": "Backyard"}))
        .await?;
    assert_status(response, StatusCode::FORBIDDEN).await?;
    Ok(())
}

#[tokio::test]
async fn test_capacity_and_role_scenario() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let event = create_event(&server, 2, Some(&["sniper"])).await?;
    let (a, b, c) = (
        server.player_token(1),
        server.player_token(2),
        server.player_token(3),
    );

    // A asks for a role outside the allow-list and is clamped to the default
    let response = register(&server, event.id, &a, &RegisterBody::new("Alpha", "commander", "Red")).await?;
    let body: MessageBody = assert_json(response, StatusCode::OK).await?;
    assert_eq!(body.message, "You have successfully registered for the event.");

    let response = register(&server, event.id, &b, &RegisterBody::new("Bravo", "sniper", "Blue")).await?;
    assert_status(response, StatusCode::OK).await?;

    let response = register(&server, event.id, &c, &RegisterBody::new("Charlie", "sniper", "Blue")).await?;
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(body["error"]["code"], "EVENT_FULL");
    assert_eq!(body["error"]["message"], "Sorry, this event is full.");

    let list = listing(&server, event.id, Some(&a)).await?;
    assert_eq!(list.user_ids(), vec![1, 2]);
    assert_eq!(list.participants[0].role, "assault");
    assert_eq!(list.participants[0].role_label, "Assault");
    assert!(list.participants[0].can_cancel);
    assert!(!list.participants[1].can_cancel);
    assert_eq!(list.current_count, 2);
    assert!(!list.has_available_slots);

    let response = server.delete_auth(&format!("/events/{}/cancel", event.id), &a).await?;
    let body: MessageBody = assert_json(response, StatusCode::OK).await?;
    assert_eq!(body.message, "Your registration has been cancelled.");

    let response = register(&server, event.id, &c, &RegisterBody::new("Charlie", "sniper", "Blue")).await?;
    assert_status(response, StatusCode::OK).await?;

    let list = listing(&server, event.id, None).await?;
    assert_eq!(list.user_ids(), vec![2, 3]);
    assert!(list.participants.iter().all(|row| !row.can_cancel));
    assert_eq!(list.participants[1].callsign, "Charlie");
    assert_eq!(list.participants[1].team, "Blue");
    Ok(())
}

#[tokio::test]
async fn test_cancel_is_idempotent() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let event = create_event(&server, 0, None).await?;
    let token = server.player_token(11);
    let path = format!("/events/{}/cancel", event.id);

    assert_status(server.delete_auth(&path, &token).await?, StatusCode::OK).await?;
    assert_status(server.delete_auth(&path, &token).await?, StatusCode::OK).await?;

    let list = listing(&server, event.id, None).await?;
    assert!(list.participants.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_reregistration_updates_profile() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let event = create_event(&server, 0, None).await?;
    let token = server.player_token(21);

    for (callsign, role) in [("Viper", "medic"), ("Cobra", "scout")] {
        let response = register(&server, event.id, &token, &RegisterBody::new(callsign, role, "Green")).await?;
        assert_status(response, StatusCode::OK).await?;
    }

    let list = listing(&server, event.id, Some(&token)).await?;
    assert_eq!(list.user_ids(), vec![21]);
    assert_eq!(list.participants[0].callsign, "Cobra");
    assert_eq!(list.participants[0].role, "scout");
    assert_eq!(list.max_participants, 0);
    assert!(list.has_available_slots);
    assert_eq!(list.default_role, "scout");
    Ok(())
}

#[tokio::test]
async fn test_register_validation() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let event = create_event(&server, 0, None).await?;
    let token = server.player_token(31);

    let response = register(&server, event.id, &token, &RegisterBody::new("  <b></b> ", "assault", "Red")).await?;
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Please enter your callsign.");

    let response = register(&server, event.id, &token, &RegisterBody::new("Hawk", "assault", "")).await?;
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(body["error"]["message"], "Please enter your team.");

    let response = server
        .post_auth(
            &format!("/events/{}/register", event.id),
            &token,
            &json!({"callsign": "Hawk"}),
        )
        .await?;
    let code = assert_error(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(code, "INVALID_BODY");

    let list = listing(&server, event.id, None).await?;
    assert!(list.participants.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_invalid_token_on_listing() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let event = create_event(&server, 0, None).await?;

    let response = server
        .get_auth(&format!("/events/{}/participants", event.id), "garbage")
        .await?;
    assert_status(response, StatusCode::UNAUTHORIZED).await?;
    Ok(())
}

#[tokio::test]
async fn test_roles_endpoint() -> anyhow::Result<()> {
    let server = TestServer::start().await?;

    let body: Value = assert_json(server.get("/roles").await?, StatusCode::OK).await?;
    assert_eq!(body["default_role"], "assault");
    let roles = body["roles"].as_object().expect("roles object");
    assert_eq!(roles.len(), 9);
    assert_eq!(roles["marksman"], "Marksman");
    Ok(())
}

#[tokio::test]
async fn test_concurrent_registrations_respect_capacity() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let event = create_event(&server, 3, None).await?;
    let url = format!("{}{}/events/{}/register", server.base_url(), API_PREFIX, event.id);

    let mut tasks = JoinSet::new();
    for user in 100..110 {
        let client = server.client.clone();
        let url = url.clone();
        let token = server.player_token(user);
        let body = RegisterBody::new(&format!("P{user}"), "assault", "Swarm");
        tasks.spawn(async move { client.post(url).bearer_auth(token).json(&body).send().await });
    }

    let mut accepted = 0;
    while let Some(result) = tasks.join_next().await {
        if result??.status() == StatusCode::OK {
            accepted += 1;
        }
    }
    assert_eq!(accepted, 3);

    let list = listing(&server, event.id, None).await?;
    assert_eq!(list.current_count, 3);
    Ok(())
}

#[tokio::test]
async fn test_postgres_capacity() -> anyhow::Result<()> {
    let Some(server) = TestServer::start_postgres().await? else {
        eprintln!("Skipping: DATABASE_URL not set");
        return Ok(());
    };
    let event = create_event(&server, 1, None).await?;

    let response = register(&server, event.id, &server.player_token(501), &RegisterBody::new("Pg", "assault", "Db")).await?;
    assert_status(response, StatusCode::OK).await?;

    let response = register(&server, event.id, &server.player_token(502), &RegisterBody::new("Late", "assault", "Db")).await?;
    let code = assert_error(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(code, "EVENT_FULL");

    let list = listing(&server, event.id, None).await?;
    assert_eq!(list.user_ids(), vec![501]);
    Ok(())
}
