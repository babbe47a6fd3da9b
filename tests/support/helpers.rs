// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, Response, StatusCode, header};
use biuletyn_core::application::dto::AuthenticatedUser;
use biuletyn_core::application::services::{ApplicationServices, ServiceDependencies};
use biuletyn_core::domain::user::{PasswordHash, Role, User, UserId, Username};
use biuletyn_core::presentation::http::routes::build_router;
use biuletyn_core::presentation::http::state::HttpState;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

pub const ADMIN_PASSWORD: &str = "bardzo-tajne-haslo";
pub const EDITOR_PASSWORD: &str = "inne-tajne-haslo";

pub fn admin_user() -> User {
    User {
        id: UserId::new(1).unwrap(),
        username: Username::new("admin").unwrap(),
        first_name: Some("Anna".into()),
        last_name: Some("Nowak".into()),
        email: "admin@example.gov.pl".into(),
        password_hash: PasswordHash::new(format!("hashed:{ADMIN_PASSWORD}")).unwrap(),
        role: Role::Admin,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn editor_user() -> User {
    User {
        id: UserId::new(2).unwrap(),
        username: Username::new("redaktor").unwrap(),
        first_name: None,
        last_name: None,
        email: "redaktor@example.gov.pl".into(),
        password_hash: PasswordHash::new(format!("hashed:{EDITOR_PASSWORD}")).unwrap(),
        role: Role::Editor,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn admin_actor() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(1).unwrap(),
        username: "admin".into(),
        role: Role::Admin,
    }
}

pub fn editor_actor() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(2).unwrap(),
        username: "redaktor".into(),
        role: Role::Editor,
    }
}

/// Everything a test needs: the wired services plus handles to the stateful
/// mocks behind them.
pub struct TestHarness {
    pub services: Arc<ApplicationServices>,
    pub users: Arc<mocks::InMemoryUserRepo>,
    pub articles: Arc<mocks::InMemoryArticleRepo>,
    pub versions: Arc<mocks::InMemoryVersionRepo>,
    pub menu: Arc<mocks::InMemoryMenuRepo>,
    pub settings: Arc<mocks::InMemorySettingsRepo>,
    pub sessions: Arc<mocks::InMemorySessionRepo>,
    pub files: Arc<mocks::MemoryFileStore>,
    pub clock: Arc<mocks::TestClock>,
}

pub fn build_harness() -> TestHarness {
    let users = Arc::new(mocks::InMemoryUserRepo::with_users(vec![
        admin_user(),
        editor_user(),
    ]));
    let articles = Arc::new(mocks::InMemoryArticleRepo::new());
    let versions = Arc::new(mocks::InMemoryVersionRepo::default());
    let menu = Arc::new(mocks::InMemoryMenuRepo::new());
    let settings = Arc::new(mocks::InMemorySettingsRepo::default());
    let sessions = Arc::new(mocks::InMemorySessionRepo::default());
    let files = Arc::new(mocks::MemoryFileStore::default());
    let clock = Arc::new(mocks::TestClock::default());

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        user_repo: users.clone(),
        article_write_repo: articles.clone(),
        article_read_repo: articles.clone(),
        article_version_repo: versions.clone(),
        menu_repo: menu.clone(),
        settings_repo: settings.clone(),
        session_repo: sessions.clone(),
        analytics_repo: Arc::new(mocks::DummyAnalyticsRepo),
        password_hasher: Arc::new(mocks::DummyPasswordHasher),
        token_codec: Arc::new(mocks::PlainTokenCodec),
        file_store: files.clone(),
        clock: clock.clone(),
        slugger: Arc::new(mocks::DummySlug),
        session_ttl: chrono::Duration::hours(8),
    }));

    TestHarness {
        services,
        users,
        articles,
        versions,
        menu,
        settings,
        sessions,
        files,
        clock,
    }
}

pub fn make_test_router(harness: &TestHarness) -> axum::Router {
    let state = HttpState {
        services: harness.services.clone(),
        upload_dir: Arc::from("uploads"),
    };
    build_router(state)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        // SmartIpKeyExtractor needs a client address on rate-limited routes.
        .header("x-forwarded-for", "127.0.0.1")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("x-forwarded-for", "127.0.0.1")
        .body(Body::empty())
        .unwrap()
}

pub fn request_with_cookie(method: &str, uri: &str, cookie: &str, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header("x-forwarded-for", "127.0.0.1");
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    builder
        .body(match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        })
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}

pub async fn assert_error_response(
    response: Response<Body>,
    expected_status: StatusCode,
) -> Value {
    assert_eq!(response.status(), expected_status);
    let json = body_json(response).await;
    assert!(
        json.get("message").and_then(Value::as_str).is_some(),
        "expected a message field, got {json}"
    );
    json
}
