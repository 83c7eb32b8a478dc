//! Client library against a live server

use std::sync::{Arc, Mutex};
use std::time::Duration;

use integration_tests::*;
use tgo_client::{NoticeKind, RegistrationSession, RosterPoller};

#[tokio::test]
async fn test_api_client_round() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let event = create_event(&server, 1, None).await?;

    let alpha = server.api_client(Some(&server.player_token(1)));
    let form = tgo_client::RegistrationForm {
        callsign: "Alpha".into(),
        role: "medic".into(),
        team: "Red".into(),
    };
    let message = alpha.register(event.id, &form).await?;
    assert_eq!(message, "You have successfully registered for the event.");

    let bravo = server.api_client(Some(&server.player_token(2)));
    let err = bravo
        .register(event.id, &tgo_client::RegistrationForm {
            callsign: "Bravo".into(),
            role: "medic".into(),
            team: "Blue".into(),
        })
        .await
        .expect_err("event is full");
    assert!(err.is_event_full());
    assert_eq!(err.to_string(), "Sorry, this event is full.");

    let list = bravo.list_participants(event.id).await?;
    assert_eq!(list.participants.len(), 1);
    assert!(!list.participants[0].can_cancel);
    assert_eq!(list.participants[0].role_label, "Medic");

    let roles = server.api_client(None).roles().await?;
    assert_eq!(roles.default_role, "assault");
    assert_eq!(roles.roles.first_key(), Some("assault"));
    Ok(())
}

#[tokio::test]
async fn test_session_flow() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let event = create_event(&server, 2, Some(&["sniper"])).await?;
    let client = server.api_client(Some(&server.player_token(5)));

    let mut session = RegistrationSession::new(client, event.id, "Sorry, this event is full.");
    session.refresh().await?;
    assert!(session.view().form_visible);
    assert_eq!(session.view().selected_role(), Some("assault"));
    assert_eq!(session.view().counter().as_deref(), Some("0/2"));

    session.view_mut().inputs.callsign = "Echo".into();
    session.view_mut().inputs.team = "Gold".into();
    session.register("sniper").await?;

    let view = session.view();
    assert!(view.is_registered());
    assert!(!view.form_visible);
    assert_eq!(view.counter().as_deref(), Some("1/2"));
    assert_eq!(view.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Success));

    session.cancel().await?;
    let view = session.view();
    assert!(!view.is_registered());
    assert!(view.form_visible);
    assert!(view.inputs.callsign.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_session_reports_failure() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let event = create_event(&server, 0, None).await?;
    let client = server.api_client(Some(&server.token(9, &["author"])));

    let mut session = RegistrationSession::new(client, event.id, "Sorry, this event is full.");
    session.refresh().await?;
    session.view_mut().inputs.callsign = "Nomad".into();
    session.view_mut().inputs.team = "Grey".into();

    let result = session.register("assault").await;
    assert!(result.is_err());

    let notice = session.view().notice.clone().expect("error notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "You do not have permission to register for events.");
    assert!(!session.view().submitting);
    Ok(())
}

#[tokio::test]
async fn test_poller_sees_new_registrations() -> anyhow::Result<()> {
    let server = TestServer::start().await?;
    let event = create_event(&server, 0, None).await?;
    register(&server, event.id, &server.player_token(1), &RegisterBody::new("One", "assault", "A"))
        .await?;

    let counts = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&counts);
    let poller = RosterPoller::new(server.api_client(None), event.id)
        .with_interval(Duration::from_millis(20));

    poller
        .run(
            move |result| {
                if let Ok(list) = result {
                    seen.lock().unwrap().push(list.current_count);
                }
            },
            tokio::time::sleep(Duration::from_millis(150)),
        )
        .await;

    let counts = counts.lock().unwrap();
    assert!(!counts.is_empty());
    assert!(counts.iter().all(|&count| count == 1));
    Ok(())
}
