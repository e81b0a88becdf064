pub mod bearer_validator;
pub mod jwt_token_service;

pub use bearer_validator::{
    AuthenticatedSubject, BearerTokenError, BearerTokenValidator, extract_bearer,
};
pub use jwt_token_service::{Claims, JwtAuthConfig, JwtTokenService};
