//! # Gatehouse - Identity and Access Gateway
//!
//! Facade crate re-exporting the public APIs of the gateway components:
//! geo-restricted registration, email one-time-code verification, login and
//! bearer token issuance.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! gatehouse = { path = "../gatehouse" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, `VerificationCode`, etc.
//! - **Ports**: `AccountStore`, `EmailClient`, `CountryResolver`, `CredentialHasher`, `TokenService`
//! - **Application**: `AuthWorkflow`, `GeoGate` and the register/verify/login use cases
//! - **Adapters**: `PostgresAccountStore`, `PostmarkEmailClient`, `IpApiCountryResolver`, `JwtTokenService`, etc.
//! - **Service**: `AuthService` - The HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use gatehouse_core::*;
}

// Re-export most commonly used core types at the root level
pub use gatehouse_core::{
    Account, AccountStatus, AuthResponse, AuthToken, CountryDenylist, Credentials, Email,
    Password, Registration, VerificationAttempt, VerificationCode,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use gatehouse_core::{
        AccountStore, AccountStoreError, CountryResolver, CredentialHasher, EmailClient,
        HashingError, TokenService,
    };
}

pub use ports::{AccountStore, CountryResolver, CredentialHasher, EmailClient, TokenService};

pub use gatehouse_core::{AuthValidator, AuthenticationScheme};

// ============================================================================
// Application Layer
// ============================================================================

/// Application use cases and orchestration
pub mod use_cases {
    pub use gatehouse_application::*;
}

pub use gatehouse_application::{
    AuthError, AuthWorkflow, GeoGate, LoginUseCase, RegisterUseCase, VerifyUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP routes, client address extraction and bearer middleware
    pub mod http {
        pub use gatehouse_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use gatehouse_adapters::persistence::*;
    }

    /// Email client implementations
    pub mod email {
        pub use gatehouse_adapters::email::*;
    }

    /// Country resolvers
    pub mod geo {
        pub use gatehouse_adapters::geo::*;
    }

    /// JWT issuing and bearer validation
    pub mod auth {
        pub use gatehouse_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use gatehouse_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use gatehouse_adapters::{
    auth_validation::{BearerTokenValidator, JwtTokenService},
    email::{MockEmailClient, PostmarkEmailClient},
    geo::{IpApiCountryResolver, StaticCountryResolver},
    hashing::Argon2Hasher,
    persistence::{HashMapAccountStore, PostgresAccountStore},
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use gatehouse_auth_service::{
    AuthService, DynAuthWorkflow, build_workflow, configure_account_store, get_postgres_pool,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use http;
