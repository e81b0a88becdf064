use gatehouse_core::TokenService;
use serde_json::json;

use crate::helpers::{ALLOWED_IP, PASSWORD, TestApp, envelope, registration};

#[tokio::test]
async fn should_login_verified_account() {
    let app = TestApp::new().await;
    app.verified_account("alice@example.com").await;

    let response = app
        .post_login(&json!({ "email": "alice@example.com", "password": PASSWORD }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = envelope(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login successful");
    let token = body["token"].as_str().unwrap();
    assert!(app.token_service.validate(token, "alice@example.com"));
    assert!(!app.token_service.validate(token, "bob@example.com"));
}

#[tokio::test]
async fn should_require_verification_first() {
    let app = TestApp::new().await;
    app.post_register(
        &registration("alice@example.com", PASSWORD, PASSWORD),
        Some(ALLOWED_IP),
    )
    .await;

    let body = envelope(
        app.post_login(&json!({ "email": "alice@example.com", "password": PASSWORD }))
            .await,
    )
    .await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Please verify your email first");
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let app = TestApp::new().await;
    app.verified_account("alice@example.com").await;

    let body = envelope(
        app.post_login(&json!({ "email": "alice@example.com", "password": "Wrong-pass1" }))
            .await,
    )
    .await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid password");
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn should_report_unknown_account_as_fault() {
    let app = TestApp::new().await;

    let body = envelope(
        app.post_login(&json!({ "email": "ghost@example.com", "password": PASSWORD }))
            .await,
    )
    .await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Login failed: User not found");
}
