//! Integration tests for the GitHub notifications client
//!
//! Runs the client against a mockito server to cover request shape,
//! response mapping and error classification.

use github_desktop_notifications::adapters::github::GitHubClient;
use github_desktop_notifications::domain::models::GitHubConfig;
use github_desktop_notifications::{
    DomainError, NotificationFeed, NotificationReason, SubjectKind,
};
use mockito::{Matcher, Server};

fn client_for(server: &Server) -> GitHubClient {
    let config = GitHubConfig {
        api_url: server.url(),
        user_agent: "github-desktop-notifications-tests".to_string(),
        timeout_secs: 5,
    };
    GitHubClient::new("ghp_test_token".to_string(), &config).expect("client should build")
}

fn notifications_body() -> String {
    serde_json::json!([
        {
            "id": "2",
            "unread": true,
            "reason": "mention",
            "updated_at": "2024-03-01T12:00:00Z",
            "repository": { "full_name": "octocat/Hello-World" },
            "subject": {
                "title": "Fix the frobnicator",
                "url": "https://api.github.com/repos/octocat/Hello-World/pulls/17",
                "type": "PullRequest"
            }
        },
        {
            "id": "1",
            "unread": false,
            "reason": "subscribed",
            "updated_at": "2024-02-28T08:30:00Z",
            "repository": { "full_name": "octocat/Hello-World" },
            "subject": {
                "title": "v2.0.0",
                "url": "https://api.github.com/repos/octocat/Hello-World/releases/5",
                "type": "Release"
            }
        }
    ])
    .to_string()
}

#[tokio::test]
async fn test_fetch_all_requests_every_notification() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/notifications")
        .match_query(Matcher::UrlEncoded("all".into(), "true".into()))
        .match_header("authorization", "Bearer ghp_test_token")
        .match_header("accept", "application/vnd.github+json")
        .match_header("x-github-api-version", "2022-11-28")
        .match_header("user-agent", "github-desktop-notifications-tests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(notifications_body())
        .create_async()
        .await;

    let notifications = client_for(&server).fetch_all().await.expect("fetch failed");

    mock.assert_async().await;
    assert_eq!(notifications.len(), 2);

    // Feed order is preserved; reversing is the reconciler's job.
    let newest = &notifications[0];
    assert_eq!(newest.id, "2");
    assert!(newest.unread);
    assert_eq!(newest.reason, NotificationReason::Mention);
    assert_eq!(newest.repository.full_name, "octocat/Hello-World");
    assert_eq!(newest.subject.kind, SubjectKind::PullRequest);
    assert_eq!(newest.subject.number(), "17");
    assert!(newest.updated_at.is_some());

    let oldest = &notifications[1];
    assert_eq!(oldest.id, "1");
    assert!(!oldest.unread);
    assert_eq!(oldest.subject.kind, SubjectKind::Release);
}

#[tokio::test]
async fn test_empty_feed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/notifications")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let notifications = client_for(&server).fetch_all().await.unwrap();
    assert!(notifications.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_feed_response_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/notifications")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"message":"Bad credentials"}"#)
        .create_async()
        .await;

    match client_for(&server).fetch_all().await {
        Err(DomainError::FeedResponse { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Bad credentials"));
        }
        other => panic!("Expected FeedResponse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_payload_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/notifications")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"id": "1", "unread": true}]"#)
        .create_async()
        .await;

    let result = client_for(&server).fetch_all().await;
    assert!(matches!(result, Err(DomainError::MalformedPayload(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_feed_unavailable() {
    let config = GitHubConfig {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        api_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..GitHubConfig::default()
    };
    let client = GitHubClient::new("ghp_test_token".to_string(), &config).unwrap();

    let result = client.fetch_all().await;
    assert!(matches!(result, Err(DomainError::FeedUnavailable(_))));
}
