use std::net::SocketAddr;

use axum::{Extension, Router, routing::get};
use gatehouse_adapters::{
    auth_validation::{AuthenticatedSubject, BearerTokenValidator, JwtAuthConfig, JwtTokenService},
    config::{AllowedOrigins, test},
    email::MockEmailClient,
    geo::StaticCountryResolver,
    hashing::Argon2Hasher,
    persistence::HashMapAccountStore,
};
use gatehouse_application::{AuthWorkflow, GeoGate};
use gatehouse_auth_service::AuthService;
use gatehouse_core::{AccountStore, CountryDenylist, Email};
use secrecy::Secret;
use serde_json::Value;

pub const BLOCKED_IP: &str = "203.0.113.1";
pub const ALLOWED_IP: &str = "198.51.100.7";
pub const PASSWORD: &str = "Abcdefg1!";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub account_store: HashMapAccountStore,
    pub email_client: MockEmailClient,
    pub token_service: JwtTokenService,
}

impl TestApp {
    pub async fn new() -> Self {
        let account_store = HashMapAccountStore::new();
        let email_client = MockEmailClient::new();
        let token_service = JwtTokenService::from_config(&JwtAuthConfig {
            jwt_secret: Secret::from(test::JWT_SECRET.to_string()),
            token_ttl_in_seconds: 600,
        })
        .unwrap();

        let resolver =
            StaticCountryResolver::new([(BLOCKED_IP, "Syria"), (ALLOWED_IP, "Canada")]);
        let workflow = AuthWorkflow::new(
            account_store.clone(),
            email_client.clone(),
            GeoGate::new(resolver, CountryDenylist::new(["Syria", "Afghanistan", "Iran"])),
            Argon2Hasher::new(),
            token_service.clone(),
        );

        let auth_service =
            AuthService::new(workflow, BearerTokenValidator::new(token_service.clone()));
        let protected = auth_service.protect(Router::new().route(
            "/api/admin/me",
            get(|Extension(subject): Extension<AuthenticatedSubject>| async move { subject.0 }),
        ));
        let router = auth_service
            .as_nested_router(Some(AllowedOrigins::new(["http://localhost:5173"])))
            .merge(protected);

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Failed to run test server");
        });

        let http_client = reqwest::Client::builder().build().unwrap();

        Self {
            address,
            http_client,
            account_store,
            email_client,
            token_service,
        }
    }

    pub async fn post_register<Body: serde::Serialize>(
        &self,
        body: &Body,
        forwarded_for: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self
            .http_client
            .post(format!("{}/api/auth/register", &self.address))
            .json(body);
        if let Some(ip) = forwarded_for {
            request = request.header("X-Forwarded-For", ip);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn post_verify<Body: serde::Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/auth/verify", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body: serde::Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/auth/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_verify_token(&self, token: Option<&str>) -> reqwest::Response {
        let mut request = self
            .http_client
            .post(format!("{}/api/auth/verify-token", &self.address));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get_me(&self, token: Option<&str>) -> reqwest::Response {
        let mut request = self
            .http_client
            .get(format!("{}/api/admin/me", &self.address));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    /// The code stored for a pending account.
    pub async fn pending_code(&self, email: &str) -> Option<String> {
        let email = Email::try_from(Secret::from(email.to_string())).unwrap();
        self.account_store
            .find(&email)
            .await
            .unwrap()?
            .verification_code()
            .map(|code| code.as_str().to_string())
    }

    /// Register and verify `email`, returning the verification token.
    pub async fn verified_account(&self, email: &str) -> String {
        let response = self
            .post_register(&registration(email, PASSWORD, PASSWORD), Some(ALLOWED_IP))
            .await;
        assert_eq!(envelope(response).await["success"], true);

        let otp = self.pending_code(email).await.unwrap();
        let response = self
            .post_verify(&serde_json::json!({ "email": email, "otp": otp }))
            .await;
        let body = envelope(response).await;
        body["token"].as_str().unwrap().to_string()
    }
}

pub fn registration(email: &str, password: &str, confirm_password: &str) -> Value {
    serde_json::json!({
        "email": email,
        "password": password,
        "confirmPassword": confirm_password,
    })
}

pub async fn envelope(response: reqwest::Response) -> Value {
    response
        .json::<Value>()
        .await
        .expect("Could not deserialize response body")
}
