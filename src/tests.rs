//! Integration tests for the TeamOps backend.

use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::auth::SessionStore;
use crate::config::Config;
use crate::jira::JiraClient;
use crate::mailer::Mailer;
use crate::store::{JsonStore, Repository};
use crate::{create_router, seed_default_admin, AppState};

/// Test fixture for integration tests. Boots the full app on an ephemeral
/// port with a seeded admin account and a logged-in client.
struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let config = Config {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            data_dir: temp_dir.path().to_path_buf(),
            log_level: "warn".to_string(),
            session_ttl_hours: 24,
            email_enabled: false,
            email_sender: "team.bot@example.com".to_string(),
            email_password: String::new(),
            manager_email: "manager@example.com".to_string(),
            smtp_server: "smtp.example.com".to_string(),
            smtp_port: 587,
            digest_hour: 18,
            digest_minute: 0,
            jira_enabled: false,
            jira_url: "https://example.atlassian.net".to_string(),
            jira_username: String::new(),
            jira_api_token: String::new(),
            jira_project_key: "QA".to_string(),
        };

        let store = JsonStore::open(&config.data_dir)
            .await
            .expect("Failed to open store");
        let repo = Arc::new(Repository::new(store));
        seed_default_admin(&repo).await.expect("Failed to seed admin");

        let state = AppState {
            repo,
            sessions: Arc::new(SessionStore::new(config.session_ttl_hours)),
            mailer: Arc::new(Mailer::new(&config)),
            jira: Arc::new(JiraClient::new(&config)),
            config: Arc::new(config),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        let token = login(&base_url, "admin", "admin").await;
        let client = authed_client(&token);

        TestFixture {
            client,
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Log in and return the session token.
async fn login(base_url: &str, username: &str, password: &str) -> String {
    let resp = Client::new()
        .post(format!("{}/api/auth/login", base_url))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    body["data"]["token"].as_str().unwrap().to_string()
}

/// Build a client that sends the session token on every request.
fn authed_client(token: &str) -> Client {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert("x-session-token", token.parse().unwrap());
    Client::builder().default_headers(headers).build().unwrap()
}

fn today() -> String {
    crate::summary::today()
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let fixture = TestFixture::new().await;

    let resp = Client::new()
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "username": "admin", "password": "wrong" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_missing_session_token() {
    let fixture = TestFixture::new().await;

    let resp = Client::new()
        .get(fixture.url("/api/leaves"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let fixture = TestFixture::new().await;

    let me = fixture
        .client
        .get(fixture.url("/api/auth/me"))
        .send()
        .await
        .unwrap();
    assert_eq!(me.status(), 200);
    let body: Value = me.json().await.unwrap();
    assert_eq!(body["data"]["username"], "admin");

    let logout = fixture
        .client
        .post(fixture.url("/api/auth/logout"))
        .send()
        .await
        .unwrap();
    assert_eq!(logout.status(), 200);

    let me_again = fixture
        .client
        .get(fixture.url("/api/auth/me"))
        .send()
        .await
        .unwrap();
    assert_eq!(me_again.status(), 401);
}

#[tokio::test]
async fn test_leave_crud() {
    let fixture = TestFixture::new().await;

    // Create
    let create_resp = fixture
        .client
        .post(fixture.url("/api/leaves"))
        .json(&json!({
            "name": "Casey Lane",
            "date": "2026-08-06",
            "type": "vacation",
            "reason": "Family trip"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(create_resp.status(), 200);
    let create_body: Value = create_resp.json().await.unwrap();
    assert_eq!(create_body["success"], true);
    assert_eq!(create_body["data"]["id"], 1);
    assert_eq!(create_body["data"]["approvalStatus"], "pending");

    // Second create gets the next id
    let second_resp = fixture
        .client
        .post(fixture.url("/api/leaves"))
        .json(&json!({
            "name": "Jo March",
            "date": "2026-08-07",
            "type": "sick",
            "approvalStatus": "approved"
        }))
        .send()
        .await
        .unwrap();
    let second_body: Value = second_resp.json().await.unwrap();
    assert_eq!(second_body["data"]["id"], 2);

    // Get
    let get_resp = fixture
        .client
        .get(fixture.url("/api/leaves/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(get_resp.status(), 200);
    let get_body: Value = get_resp.json().await.unwrap();
    assert_eq!(get_body["data"]["name"], "Casey Lane");

    // List is newest-first
    let list_resp = fixture
        .client
        .get(fixture.url("/api/leaves"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    let leaves = list_body["data"].as_array().unwrap();
    assert_eq!(leaves.len(), 2);
    assert_eq!(leaves[0]["id"], 2);
    assert_eq!(leaves[1]["id"], 1);

    // Partial update preserves every unsubmitted field
    let update_resp = fixture
        .client
        .put(fixture.url("/api/leaves/1"))
        .json(&json!({ "approvalStatus": "approved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(update_resp.status(), 200);
    let update_body: Value = update_resp.json().await.unwrap();
    assert_eq!(update_body["data"]["approvalStatus"], "approved");
    assert_eq!(update_body["data"]["name"], "Casey Lane");
    assert_eq!(update_body["data"]["date"], "2026-08-06");
    assert_eq!(update_body["data"]["type"], "vacation");
    assert_eq!(update_body["data"]["reason"], "Family trip");

    // Delete removes exactly the targeted record
    let delete_resp = fixture
        .client
        .delete(fixture.url("/api/leaves/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);

    let remaining: Value = fixture
        .client
        .get(fixture.url("/api/leaves"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let leaves = remaining["data"].as_array().unwrap();
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0]["id"], 2);

    // Deleted record is gone
    let get_deleted = fixture
        .client
        .get(fixture.url("/api/leaves/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(get_deleted.status(), 404);
}

#[tokio::test]
async fn test_create_requires_key_fields() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/leaves"))
        .json(&json!({ "name": "  ", "date": "2026-08-06", "type": "vacation" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .put(fixture.url("/api/meetings/99"))
        .json(&json!({ "topic": "Retro" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_announcement_poster_comes_from_session() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/announcements"))
        .json(&json!({
            "date": "2026-08-06",
            "title": "Release day",
            "message": "2.0 ships today",
            // Clients cannot spoof the poster
            "postedBy": "Mallory"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["postedBy"], "Administrator");
}

#[tokio::test]
async fn test_skills_matrix_groups_by_member() {
    let fixture = TestFixture::new().await;

    for (name, skill) in [
        ("Casey", "Rust"),
        ("Casey", "Postgres"),
        ("Jo", "Kubernetes"),
    ] {
        let resp = fixture
            .client
            .post(fixture.url("/api/skills"))
            .json(&json!({ "name": name, "skill": skill, "level": "advanced" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let resp = fixture
        .client
        .get(fixture.url("/api/skills/matrix"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["Casey"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["Jo"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_skill_last_updated_defaults_to_today() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/skills"))
        .json(&json!({ "name": "Casey", "skill": "Rust" }))
        .send()
        .await
        .unwrap();

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["lastUpdated"], today());
}

#[tokio::test]
async fn test_user_management_requires_admin() {
    let fixture = TestFixture::new().await;

    // Admin creates a regular member
    let create_resp = fixture
        .client
        .post(fixture.url("/api/users"))
        .json(&json!({
            "username": "casey",
            "password": "hunter2",
            "name": "Casey Lane"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 200);
    let create_body: Value = create_resp.json().await.unwrap();
    assert_eq!(create_body["data"]["role"], "member");

    // The member can use regular resources
    let member_token = login(&fixture.base_url, "casey", "hunter2").await;
    let member_client = authed_client(&member_token);

    let leaves_resp = member_client
        .get(fixture.url("/api/leaves"))
        .send()
        .await
        .unwrap();
    assert_eq!(leaves_resp.status(), 200);

    // But not the user management endpoints
    let users_resp = member_client
        .get(fixture.url("/api/users"))
        .send()
        .await
        .unwrap();
    assert_eq!(users_resp.status(), 403);
    let users_body: Value = users_resp.json().await.unwrap();
    assert_eq!(users_body["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_user_responses_never_contain_password() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/users"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let users = body["data"].as_array().unwrap();
    assert!(!users.is_empty());
    for user in users {
        assert!(user.get("password").is_none());
    }
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/users"))
        .json(&json!({
            "username": "admin",
            "password": "another",
            "name": "Second Admin"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_dashboard_stats() {
    let fixture = TestFixture::new().await;
    let today = today();

    // One approved leave today, one pending
    for payload in [
        json!({ "name": "Casey", "date": &today, "type": "vacation", "approvalStatus": "approved" }),
        json!({ "name": "Jo", "date": &today, "type": "sick" }),
    ] {
        fixture
            .client
            .post(fixture.url("/api/leaves"))
            .json(&payload)
            .send()
            .await
            .unwrap();
    }

    // One accomplishment today, one in the past
    for payload in [
        json!({ "date": &today, "memberName": "Casey", "description": "Shipped 2.0" }),
        json!({ "date": "2020-01-01", "memberName": "Jo", "description": "Old win" }),
    ] {
        fixture
            .client
            .post(fixture.url("/api/accomplishments"))
            .json(&payload)
            .send()
            .await
            .unwrap();
    }

    // An available server and an active build
    fixture
        .client
        .post(fixture.url("/api/servers"))
        .json(&json!({ "serverName": "db-1", "status": "available" }))
        .send()
        .await
        .unwrap();
    fixture
        .client
        .post(fixture.url("/api/builds"))
        .json(&json!({ "buildName": "api", "date": &today, "status": "testing" }))
        .send()
        .await
        .unwrap();

    let resp = fixture
        .client
        .get(fixture.url("/api/dashboard/stats"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let stats = &body["data"];

    // The seeded admin does not count as a team member
    assert_eq!(stats["totalTeamMembers"], 0);
    assert_eq!(stats["onLeaveToday"], 1);
    assert_eq!(stats["onLeaveNames"], json!(["Casey"]));
    assert_eq!(stats["pendingApprovals"], 1);
    assert_eq!(stats["availableServers"], 1);
    assert_eq!(stats["activeBuilds"], 1);
    assert_eq!(stats["todayAccomplishments"], 1);
}

#[tokio::test]
async fn test_email_endpoints_report_not_sent_when_disabled() {
    let fixture = TestFixture::new().await;

    let test_resp = fixture
        .client
        .get(fixture.url("/api/email/test"))
        .send()
        .await
        .unwrap();
    assert_eq!(test_resp.status(), 200);
    let test_body: Value = test_resp.json().await.unwrap();
    assert_eq!(test_body["data"]["sent"], false);

    let summary_resp = fixture
        .client
        .post(fixture.url("/api/email/summary"))
        .send()
        .await
        .unwrap();
    assert_eq!(summary_resp.status(), 200);
    let summary_body: Value = summary_resp.json().await.unwrap();
    assert_eq!(summary_body["data"]["sent"], false);
}

#[tokio::test]
async fn test_jira_endpoints_empty_when_disabled() {
    let fixture = TestFixture::new().await;

    let issues_resp = fixture
        .client
        .get(fixture.url("/api/jira/issues"))
        .send()
        .await
        .unwrap();
    assert_eq!(issues_resp.status(), 200);
    let issues_body: Value = issues_resp.json().await.unwrap();
    assert_eq!(issues_body["data"].as_array().unwrap().len(), 0);

    let sync_resp = fixture
        .client
        .get(fixture.url("/api/jira/sync"))
        .send()
        .await
        .unwrap();
    assert_eq!(sync_resp.status(), 200);
    let sync_body: Value = sync_resp.json().await.unwrap();
    assert_eq!(sync_body["data"]["count"], 0);
}
