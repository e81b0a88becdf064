mod auth_service;
mod helpers;
mod tracing;

pub use auth_service::{API_PREFIX, AuthService};
pub use helpers::{
    DynAuthWorkflow, build_workflow, configure_account_store, configure_country_resolver,
    configure_email_client, configure_token_service, get_postgres_pool,
};
pub use self::tracing::{init_tracing, make_span_with_request_id, on_request, on_response};

// Re-export commonly used types
pub use gatehouse_core::{AccountStore, AuthenticationScheme, CountryResolver, EmailClient};
