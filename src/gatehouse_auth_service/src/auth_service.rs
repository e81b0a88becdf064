use std::net::SocketAddr;

use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    middleware::from_fn_with_state,
    routing::post,
};
use gatehouse_adapters::{
    auth_validation::AuthenticatedSubject,
    config::AllowedOrigins,
    http::{
        require_bearer,
        routes::{login, register, verify, verify_token},
    },
};
use gatehouse_core::{AuthValidator, AuthenticationScheme};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

pub const API_PREFIX: &str = "/api/auth";

/// HTTP surface of the gateway: register, verify, login and verify-token
/// under [`API_PREFIX`].
pub struct AuthService<V> {
    router: Router,
    validator: V,
}

impl<V> AuthService<V>
where
    V: AuthValidator<Claims = AuthenticatedSubject, RequestParts = request::Parts>,
{
    /// # Arguments
    /// * `scheme` - Registration, verification and login
    /// * `validator` - Bearer token check for `/verify-token` and [`AuthService::protect`]
    pub fn new<A>(scheme: A, validator: V) -> Self
    where
        A: AuthenticationScheme,
    {
        let routes = Router::new()
            .route("/register", post(register::<A>))
            .route("/verify", post(verify::<A>))
            .route("/login", post(login::<A>))
            .with_state(scheme)
            .route("/verify-token", post(verify_token::<V>))
            .with_state(validator.clone());

        Self {
            router: Router::new().nest(API_PREFIX, routes),
            validator,
        }
    }

    /// Require a valid bearer token on every route of `router`. Handlers can
    /// read the caller via `Extension<AuthenticatedSubject>`.
    pub fn protect(&self, router: Router) -> Router {
        router.route_layer(from_fn_with_state(
            self.validator.clone(),
            require_bearer::<V>,
        ))
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be merged into another
    /// application.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

            // Credentials cannot be combined with a wildcard origin.
            let cors = if allowed_origins.allows_any() {
                cors.allow_origin(Any)
            } else {
                cors.allow_credentials(true)
                    .allow_origin(AllowOrigin::predicate(
                        move |origin: &HeaderValue, _request_parts: &request::Parts| {
                            allowed_origins.contains(origin)
                        },
                    ))
            };

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Serve until the listener fails. Peer addresses are recorded so the
    /// geo restriction can fall back to them.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Gatehouse listening on {}", listener.local_addr()?);

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
    }
}
