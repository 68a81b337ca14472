//! Integration tests for the HTTP identity client against a mock provider.

use chrono::{Duration, Utc};
use schoolhub_core::config::ProviderConfig;
use schoolhub_core::identity::{
    AuthUser, HttpIdentityClient, IdentityClient, OtpFactor, RequestCodeOptions, SessionSignal,
    SessionStore, StoredSession,
};
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, home: &TempDir) -> HttpIdentityClient {
    let config = ProviderConfig {
        base_url: server.uri(),
        publishable_key: "pk_test_anon".to_string(),
    };
    let store = SessionStore::new(home.path().join("session.json"));
    HttpIdentityClient::with_store(&config, store).expect("client should build")
}

fn grant_body() -> serde_json::Value {
    serde_json::json!({
        "access_token": "jwt-access",
        "refresh_token": "jwt-refresh",
        "expires_in": 3600,
        "token_type": "bearer",
        "user": { "id": "u-1", "email": "admin@school.com" }
    })
}

#[tokio::test]
async fn test_request_code_posts_auto_provision_and_api_key() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/v1/otp"))
        .and(header("apikey", "pk_test_anon"))
        .and(body_json(serde_json::json!({
            "email": "a@b.com",
            "create_user": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, &home);
    client
        .request_code("a@b.com", RequestCodeOptions::default())
        .await
        .expect("code request should succeed");
}

#[tokio::test]
async fn test_request_code_surfaces_provider_message() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/v1/otp"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({"msg": "email rate limit exceeded"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, &home);
    let err = client
        .request_code("a@b.com", RequestCodeOptions::default())
        .await
        .expect_err("rejected request should error");
    assert!(err.to_string().contains("email rate limit exceeded"));
}

#[tokio::test]
async fn test_verify_code_persists_session_and_notifies() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/v1/verify"))
        .and(body_json(serde_json::json!({
            "type": "email",
            "email": "admin@school.com",
            "token": "000000"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(grant_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, &home);
    let mut sub = client.subscribe();

    let user = client
        .verify_code("admin@school.com", "000000", OtpFactor::Email)
        .await
        .expect("verification should succeed");
    assert_eq!(user, AuthUser::new("admin@school.com"));

    // Session landed on disk.
    let stored = SessionStore::new(home.path().join("session.json"))
        .load()
        .unwrap()
        .expect("session should be persisted");
    assert_eq!(stored.access_token, "jwt-access");
    assert_eq!(stored.email, "admin@school.com");

    // Subscribers observed the sign-in.
    assert_eq!(
        sub.try_next(),
        Some(SessionSignal::Changed(Some(AuthUser::new(
            "admin@school.com"
        ))))
    );
}

#[tokio::test]
async fn test_verify_code_failure_does_not_create_session() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/v1/verify"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"error_description": "Token has expired"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, &home);
    let mut sub = client.subscribe();

    let err = client
        .verify_code("admin@school.com", "123456", OtpFactor::Email)
        .await
        .expect_err("bad code should error");
    assert!(err.to_string().contains("Token has expired"));
    assert!(!home.path().join("session.json").exists());
    assert_eq!(sub.try_next(), None);
}

#[tokio::test]
async fn test_current_user_without_session_skips_the_network() {
    // No mocks mounted: any request would 404 and fail the test through
    // the returned error.
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    let client = client_for(&server, &home);
    let user = client.current_user().await.expect("lookup should succeed");
    assert_eq!(user, None);
}

#[tokio::test]
async fn test_current_user_resolves_stored_session() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    let store = SessionStore::new(home.path().join("session.json"));
    store
        .save(&StoredSession {
            access_token: "jwt-access".to_string(),
            refresh_token: "jwt-refresh".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
            email: "admin@school.com".to_string(),
        })
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer jwt-access"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "u-1", "email": "admin@school.com"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, &home);
    let user = client.current_user().await.unwrap();
    assert_eq!(user, Some(AuthUser::new("admin@school.com")));
}

#[tokio::test]
async fn test_current_user_with_rejected_token_reads_as_signed_out() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    let store = SessionStore::new(home.path().join("session.json"));
    store
        .save(&StoredSession {
            access_token: "jwt-revoked".to_string(),
            refresh_token: "jwt-refresh".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
            email: "admin@school.com".to_string(),
        })
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server, &home);
    assert_eq!(client.current_user().await.unwrap(), None);
}

#[tokio::test]
async fn test_sign_out_clears_store_and_notifies_absent() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/v1/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(grant_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("authorization", "Bearer jwt-access"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, &home);
    client
        .verify_code("admin@school.com", "000000", OtpFactor::Email)
        .await
        .unwrap();
    let mut sub = client.subscribe();

    client.sign_out().await.expect("sign-out should succeed");

    assert!(!home.path().join("session.json").exists());
    assert_eq!(sub.try_next(), Some(SessionSignal::Changed(None)));
    assert_eq!(client.current_user().await.unwrap(), None);
}
