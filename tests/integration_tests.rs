//! End-to-end tests exercising the public dashkit surface: request an API
//! endpoint, then surface the outcome as a notification.

use dashkit::notification::NotificationType;
use dashkit::{ApiClient, ApiError, NotificationState};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn save_flow_reports_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/settings"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"prune_days": 30})))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"ok":true}"#, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new();
    let mut notifications = NotificationState::new();

    let url = format!("{}/api/settings", server.uri());
    match client.post(&url, &json!({"prune_days": 30})).await {
        Ok(body) => {
            assert_eq!(body, json!({"ok": true}));
            notifications.show_success("Settings saved");
        }
        Err(err) => panic!("save should succeed: {err}"),
    }

    assert_eq!(notifications.len(), 1);
    let notif = notifications.visible().next().unwrap();
    assert_eq!(notif.message, "Settings saved");
    assert_eq!(notif.notification_type, NotificationType::Success);
}

#[tokio::test]
async fn failed_request_surfaces_server_text_as_error_notification() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(403).set_body_string("admin login required"))
        .mount(&server)
        .await;

    let mut notifications = NotificationState::new();

    let url = format!("{}/api/users", server.uri());
    let err = dashkit::api::get(&url).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 403, .. }));
    notifications.show_error(&err.to_string());

    let notif = notifications.visible().next().unwrap();
    assert_eq!(notif.message, "admin login required");
    assert_eq!(notif.notification_type, NotificationType::Error);
}

#[tokio::test]
async fn poll_flow_stacks_independent_notifications() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"daemon":"running"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new();
    let mut notifications = NotificationState::new();

    let url = format!("{}/api/status", server.uri());
    for _ in 0..2 {
        let status = client.get(&url).await.unwrap();
        notifications.show(&format!("Daemon {}", status["daemon"].as_str().unwrap()));
    }

    // Two polls, two independent entries, neither replaced the other
    assert_eq!(notifications.len(), 2);
    for notif in notifications.visible() {
        assert_eq!(notif.message, "Daemon running");
    }
}
