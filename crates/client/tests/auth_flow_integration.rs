//! End-to-end auth lifecycle: login, authenticated calls, reactive token
//! refresh, refresh failure, and persistence across a restart.

mod support;

use dealflow_client::{CrmClient, SessionStorage};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{client_for, config_for, mount_login_flow, task_json};

#[tokio::test]
async fn login_then_request_then_refresh_then_logout() {
    let server = MockServer::start().await;
    mount_login_flow(&server, "acc-1", "ref-1").await;

    // The first authenticated call is rejected once, as if acc-1 just
    // expired; the replay with the refreshed token succeeds.
    Mock::given(method("GET"))
        .and(path("/api/v1/tasks/my_tasks/"))
        .and(header("Authorization", "Bearer acc-1"))
        .respond_with(ResponseTemplate::new(401))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access": "acc-2"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tasks/my_tasks/"))
        .and(header("Authorization", "Bearer acc-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [task_json(9)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _storage) = client_for(&server);

    client
        .session
        .login(&dealflow_client::Credentials::new("ana@fund.com", "hunter2"))
        .await
        .expect("login");
    assert!(client.session.is_authenticated().await);

    let my_tasks = client.tasks.my_tasks().await.expect("tasks after refresh");
    assert_eq!(my_tasks.count, 1);
    assert_eq!(my_tasks.results[0].id, 9);

    // The refresh replaced only the access token.
    let tokens = client.session.tokens().await.expect("tokens");
    assert_eq!(tokens.access, "acc-2");
    assert_eq!(tokens.refresh, "ref-1");
    assert_eq!(
        client.session.current_user().await.map(|u| u.email),
        Some("ana@fund.com".to_string())
    );

    client.session.logout().await.expect("logout");
    assert!(!client.session.is_authenticated().await);
    assert!(client.session.tokens().await.is_none());
}

#[tokio::test]
async fn rejected_refresh_forces_a_logout() {
    let server = MockServer::start().await;
    mount_login_flow(&server, "acc-1", "ref-1").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/deals/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"detail": "Token expired"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"detail": "Token is blacklisted"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, storage) = client_for(&server);
    client
        .session
        .login(&dealflow_client::Credentials::new("ana@fund.com", "hunter2"))
        .await
        .expect("login");

    // The resource call surfaces its own 401 message; the failed refresh has
    // already cleared the session, leaving the app logged out.
    let err = client.deals.list(&[]).await.unwrap_err();
    assert_eq!(err.to_string(), "Token expired");

    assert!(!client.session.is_authenticated().await);
    assert!(storage.load().await.expect("storage readable").is_none());
}

#[tokio::test]
async fn session_survives_a_restart() {
    let server = MockServer::start().await;
    mount_login_flow(&server, "acc-1", "ref-1").await;

    let dir = tempfile::tempdir().expect("temp dir");
    let session_file = dir.path().join("session.json");

    let client = CrmClient::new(config_for(&server, &session_file)).expect("client");
    client
        .session
        .login(&dealflow_client::Credentials::new("ana@fund.com", "hunter2"))
        .await
        .expect("login");
    let before = client.session.tokens().await.expect("tokens");
    drop(client);

    // Simulated restart: a fresh client over the same session file.
    let restarted = CrmClient::new(config_for(&server, &session_file)).expect("client");
    assert!(restarted.initialize().await.expect("initialize"));

    let after = restarted.session.tokens().await.expect("restored tokens");
    assert_eq!(after, before);
    assert_eq!(
        restarted.session.current_user().await.map(|u| u.email),
        Some("ana@fund.com".to_string())
    );
    // Transient state is not persisted.
    assert!(!restarted.session.is_loading());
}

#[tokio::test]
async fn initialize_without_a_persisted_session_stays_anonymous() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("temp dir");

    let client =
        CrmClient::new(config_for(&server, dir.path().join("missing.json"))).expect("client");

    assert!(!client.initialize().await.expect("initialize"));
    assert!(!client.session.is_authenticated().await);
}
