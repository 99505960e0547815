//! Session lifecycle scenarios: login, register, logout, startup restore.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::json;
use tick_client::session::{MemoryStorage, SessionStore, ACCESS_TOKEN_KEY, USER_KEY};
use tick_client::types::RegisterRequest;
use tick_client::{ApiClient, AuthService, TokenPair, UserProfile};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn make_token(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.sig")
}

fn future_token(email: &str) -> String {
    make_token(json!({ "exp": 4_000_000_000i64, "email": email }))
}

fn expired_token() -> String {
    make_token(json!({ "exp": 1_000 }))
}

fn service(base_url: String, storage: MemoryStorage) -> AuthService<MemoryStorage> {
    AuthService::new(ApiClient::new(base_url, SessionStore::new(storage)))
}

#[tokio::test]
async fn login_persists_profile_and_tokens() {
    let server = MockServer::start().await;
    let access = future_token("a@b.com");
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_partial_json(json!({ "email": "a@b.com", "password": "x" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": access, "refresh_token": "r1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::default();
    let auth = service(server.uri(), storage.clone());

    let user = auth.login("a@b.com", "x").await.unwrap();
    assert_eq!(user.email, "a@b.com");

    let session = auth.store().snapshot();
    assert_eq!(session.user.unwrap().email, "a@b.com");
    assert_eq!(session.refresh_token.as_deref(), Some("r1"));

    // Durable entries landed too.
    use tick_client::session::SessionStorage as _;
    assert!(storage.get(USER_KEY).is_some());
    assert!(storage.get(ACCESS_TOKEN_KEY).is_some());
}

#[tokio::test]
async fn failed_login_persists_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let auth = service(server.uri(), MemoryStorage::default());
    let err = auth.login("a@b.com", "wrong").await.unwrap_err();
    assert_eq!(err.status, 401);
    assert_eq!(err.message, "Invalid credentials");
    assert!(auth.store().snapshot().is_empty());
}

#[tokio::test]
async fn register_falls_back_to_submitted_profile_fields() {
    let server = MockServer::start().await;
    // Token without profile claims.
    let access = make_token(json!({ "exp": 4_000_000_000i64 }));
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_partial_json(json!({ "email": "new@b.com", "firstName": "Ada" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": access, "refresh_token": "r1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let auth = service(server.uri(), MemoryStorage::default());
    let user = auth
        .register(RegisterRequest {
            email: "new@b.com".to_string(),
            password: "x".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
        })
        .await
        .unwrap();

    assert_eq!(user.email, "new@b.com");
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
    assert_eq!(auth.store().current_user(), Some(user));
}

#[tokio::test]
async fn logout_clears_locally_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let auth = service(server.uri(), MemoryStorage::default());
    auth.store()
        .save(
            UserProfile {
                email: "a@b.com".to_string(),
                first_name: None,
                last_name: None,
            },
            TokenPair {
                access_token: future_token("a@b.com"),
                refresh_token: "r1".to_string(),
            },
        )
        .unwrap();

    auth.logout().await.unwrap();
    assert!(auth.store().snapshot().is_empty());
}

#[tokio::test]
async fn logout_clears_locally_even_when_server_is_unreachable() {
    let auth = service("http://127.0.0.1:9".to_string(), MemoryStorage::default());
    auth.store()
        .save(
            UserProfile {
                email: "a@b.com".to_string(),
                first_name: None,
                last_name: None,
            },
            TokenPair {
                access_token: future_token("a@b.com"),
                refresh_token: "r1".to_string(),
            },
        )
        .unwrap();

    let err = auth.logout().await.unwrap_err();
    assert_eq!(err.status, 0);
    assert!(auth.store().snapshot().is_empty());
}

#[tokio::test]
async fn logout_all_hits_its_own_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout-all"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let auth = service(server.uri(), MemoryStorage::default());
    auth.logout_all().await.unwrap();
    assert!(auth.store().snapshot().is_empty());
}

#[tokio::test]
async fn initialize_with_valid_token_skips_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let storage = MemoryStorage::default();
    // Seed through one store, restore through another (page reload).
    SessionStore::new(storage.clone())
        .save(
            UserProfile {
                email: "a@b.com".to_string(),
                first_name: None,
                last_name: None,
            },
            TokenPair {
                access_token: future_token("a@b.com"),
                refresh_token: "r1".to_string(),
            },
        )
        .unwrap();

    let auth = service(server.uri(), storage);
    let user = auth.initialize().await.unwrap();
    assert_eq!(user.email, "a@b.com");
}

#[tokio::test]
async fn initialize_refreshes_an_expired_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_partial_json(json!({ "refreshToken": "r1" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "fresh", "refresh_token": "r2" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::default();
    SessionStore::new(storage.clone())
        .save(
            UserProfile {
                email: "a@b.com".to_string(),
                first_name: None,
                last_name: None,
            },
            TokenPair {
                access_token: expired_token(),
                refresh_token: "r1".to_string(),
            },
        )
        .unwrap();

    let auth = service(server.uri(), storage);
    let user = auth.initialize().await.unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(auth.store().access_token().as_deref(), Some("fresh"));
    assert_eq!(auth.store().refresh_token().as_deref(), Some("r2"));
}

#[tokio::test]
async fn initialize_goes_anonymous_when_refresh_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let storage = MemoryStorage::default();
    SessionStore::new(storage.clone())
        .save(
            UserProfile {
                email: "a@b.com".to_string(),
                first_name: None,
                last_name: None,
            },
            TokenPair {
                access_token: expired_token(),
                refresh_token: "r1".to_string(),
            },
        )
        .unwrap();

    let auth = service(server.uri(), storage);
    assert!(auth.initialize().await.is_none());
    assert!(auth.store().snapshot().is_empty());
}

#[tokio::test]
async fn initialize_with_no_stored_session_is_anonymous() {
    let auth = service("http://127.0.0.1:9".to_string(), MemoryStorage::default());
    assert!(auth.initialize().await.is_none());
}
