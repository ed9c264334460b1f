use crate::server::{create_router, AppState};
use crate::services::TokenIssuer;
use axum::body::Body;
use axum::http::{header::AUTHORIZATION, Request, StatusCode};
use axum::Router;
use lib_auth::{decode_provider_token, encode_jwt, TokenError, TokenSigner};
use lib_core::{Config, StreamCredentials};
use shared::{ErrorResponse, TokenResponse};
use std::sync::Arc;
use tower::ServiceExt;

const JWT_SECRET: &str = "test-secret-key-must-be-at-least-32-characters-long!";
const STREAM_SECRET: &str = "stream-secret-for-handler-tests";

/// Create test config
fn test_config(with_stream: bool) -> Config {
    Config {
        jwt_secret: JWT_SECRET.to_string(),
        stream: with_stream.then(|| StreamCredentials::new("publickey123456", STREAM_SECRET)),
    }
}

/// Create test app with the production router
fn test_app(config: Config) -> Router {
    create_router(AppState::new(config), vec!["http://localhost:5173".to_string()])
}

fn token_request(bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/chat/token");
    if let Some(jwt) = bearer {
        builder = builder.header(AUTHORIZATION, format!("Bearer {}", jwt));
    }
    builder.body(Body::empty()).unwrap()
}

async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_token_without_bearer_is_unauthorized() {
    // Arrange
    let app = test_app(test_config(true));

    // Act
    let response = app.oneshot(token_request(None)).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorResponse = read_json(response).await;
    assert!(!body.message.is_empty());
    assert_eq!(body.code.as_deref(), Some("Unauthenticated"));
}

#[tokio::test]
async fn test_token_with_forged_bearer_is_unauthorized() {
    let app = test_app(test_config(true));
    let forged = encode_jwt("u1", "some-other-secret-that-is-32-chars-long!", 24).unwrap();

    let response = app.oneshot(token_request(Some(&forged))).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_with_empty_subject_is_unauthorized() {
    let app = test_app(test_config(true));
    let jwt = encode_jwt("", JWT_SECRET, 24).unwrap();

    let response = app.oneshot(token_request(Some(&jwt))).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.message, "User ID not found");
}

#[tokio::test]
async fn test_token_issued_for_authenticated_caller() {
    // Arrange
    let app = test_app(test_config(true));
    let jwt = encode_jwt("64f1c0ffee", JWT_SECRET, 24).unwrap();

    // Act
    let response = app.oneshot(token_request(Some(&jwt))).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let body: TokenResponse = read_json(response).await;
    let claims = decode_provider_token(&body.token, STREAM_SECRET).unwrap();
    assert_eq!(claims.user_id, "64f1c0ffee");
}

#[tokio::test]
async fn test_repeated_requests_each_get_a_valid_token() {
    let app = test_app(test_config(true));
    let jwt = encode_jwt("u1", JWT_SECRET, 24).unwrap();

    for _ in 0..2 {
        let response = app.clone().oneshot(token_request(Some(&jwt))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: TokenResponse = read_json(response).await;
        assert_eq!(decode_provider_token(&body.token, STREAM_SECRET).unwrap().user_id, "u1");
    }
}

#[tokio::test]
async fn test_token_without_credentials_is_configuration_missing() {
    // Arrange
    let app = test_app(test_config(false));
    let jwt = encode_jwt("u1", JWT_SECRET, 24).unwrap();

    // Act
    let response = app.oneshot(token_request(Some(&jwt))).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.code.as_deref(), Some("ConfigurationMissing"));
    assert_eq!(body.message, "Chat provider is not configured");
}

struct FailingSigner;

impl TokenSigner for FailingSigner {
    fn create_token(&self, _api_secret: &str, _user_id: &str) -> Result<String, TokenError> {
        Err(TokenError::Signing("InvalidKeyFormat".to_string()))
    }
}

#[tokio::test]
async fn test_signer_failure_returns_generic_message() {
    let config = test_config(true);
    let issuer = TokenIssuer::new(config.stream.clone(), Arc::new(FailingSigner));
    let app = create_router(AppState::with_issuer(config, issuer), Vec::new());
    let jwt = encode_jwt("u1", JWT_SECRET, 24).unwrap();

    let response = app.oneshot(token_request(Some(&jwt))).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.code.as_deref(), Some("TokenGeneration"));
    assert!(!body.message.contains("InvalidKeyFormat"));
}

#[tokio::test]
async fn test_health_and_fallback() {
    let app = test_app(test_config(false));

    let health = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let missing = app
        .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inbound_request_id_is_echoed() {
    let app = test_app(test_config(false));
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-abc-123")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "trace-abc-123");
}
