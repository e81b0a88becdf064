use crate::helpers::TestApp;

#[tokio::test]
async fn should_guard_protected_routes() {
    let app = TestApp::new().await;

    let response = app.get_me(None).await;
    assert_eq!(response.status().as_u16(), 401);

    let token = app.verified_account("alice@example.com").await;
    let response = app.get_me(Some(&token)).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "alice@example.com");
}

#[tokio::test]
async fn should_answer_cors_preflight_for_allowed_origin() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/auth/login", &app.address),
        )
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("http://localhost:5173")
    );
}
