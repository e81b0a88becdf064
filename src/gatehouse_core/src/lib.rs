pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountError, AccountStatus},
    auth_response::AuthResponse,
    email::{Email, EmailError},
    geo::{CountryDenylist, GeoDecision},
    password::{PASSWORD_POLICY_MESSAGE, Password, PasswordError},
    password_hash::{PasswordHash, PasswordHashError},
    token::{AuthToken, TokenError},
    verification_code::{VerificationCode, VerificationCodeError},
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{CountryResolver, CredentialHasher, EmailClient, HashingError, TokenService},
};

pub use strategies::{
    auth_validator::AuthValidator,
    authenticator::{AuthenticationScheme, Credentials, Registration, VerificationAttempt},
};
