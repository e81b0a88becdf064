use gatehouse_core::PASSWORD_POLICY_MESSAGE;

use crate::helpers::{ALLOWED_IP, BLOCKED_IP, PASSWORD, TestApp, envelope, registration};

#[tokio::test]
async fn should_register_and_mail_code() {
    let app = TestApp::new().await;

    let response = app
        .post_register(
            &registration("alice@example.com", PASSWORD, PASSWORD),
            Some(ALLOWED_IP),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = envelope(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Registration successful. Please check your email for verification code."
    );
    assert!(body.get("token").is_none());

    let code = app.pending_code("alice@example.com").await.unwrap();
    let sent = app.email_client.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "alice@example.com");
    assert_eq!(sent[0].subject, "Your OTP for Admin Panel");
    assert!(sent[0].content.contains(&code));
}

#[tokio::test]
async fn should_block_denied_country_before_anything_else() {
    let app = TestApp::new().await;

    let response = app
        .post_register(
            &registration("not-an-email", "weak", "other"),
            Some(&format!("{BLOCKED_IP}, 10.0.0.1")),
        )
        .await;

    let body = envelope(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Registration not allowed from Syria");
    assert!(app.email_client.sent().await.is_empty());
}

#[tokio::test]
async fn should_admit_unknown_origin() {
    let app = TestApp::new().await;

    // Loopback peer with no forwarded header resolves to no country.
    let response = app
        .post_register(&registration("bob@example.com", PASSWORD, PASSWORD), None)
        .await;

    assert_eq!(envelope(response).await["success"], true);
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let app = TestApp::new().await;
    let body = registration("alice@example.com", PASSWORD, PASSWORD);

    app.post_register(&body, Some(ALLOWED_IP)).await;
    let response = app.post_register(&body, Some(ALLOWED_IP)).await;

    let body = envelope(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
async fn should_reject_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        (
            registration("alice@example.com", PASSWORD, "Abcdefg1?"),
            "Passwords do not match",
        ),
        (
            registration("alice@example.com", "abcdefg1", "abcdefg1"),
            PASSWORD_POLICY_MESSAGE,
        ),
        (
            registration("alice", PASSWORD, PASSWORD),
            "Please enter a valid email",
        ),
    ];

    for (input, message) in test_cases {
        let response = app.post_register(&input, Some(ALLOWED_IP)).await;
        let body = envelope(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], message, "Failed for input: {:?}", input);
    }
}

#[tokio::test]
async fn should_answer_malformed_body_with_envelope() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&serde_json::json!({ "email": "alice@example.com" }), None)
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(envelope(response).await["success"], false);
}
