use gatehouse_core::{
    AccountError, AccountStoreError, AuthResponse, EmailError, HashingError, PASSWORD_POLICY_MESSAGE,
    PasswordError, TokenError,
};
use thiserror::Error;

/// Every way an authentication operation can end without success.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Registration not allowed from {0}")]
    GeoRestricted(String),
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("{}", PASSWORD_POLICY_MESSAGE)]
    WeakPassword,
    #[error("User not found")]
    AccountNotFound,
    #[error("Email already verified")]
    AlreadyVerified,
    #[error("Invalid OTP code")]
    InvalidCode,
    #[error("Please verify your email first")]
    NotVerified,
    #[error("Invalid password")]
    InvalidCredentials,
    #[error("Failed to send OTP email: {0}")]
    DeliveryFailure(String),
    #[error("{0}")]
    Token(#[from] TokenError),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Unexpected(String),
}

/// The top level operation an error surfaced from; names the failure prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Register,
    Verify,
    Login,
}

impl Operation {
    fn failure_label(self) -> &'static str {
        match self {
            Operation::Register => "Registration failed",
            Operation::Verify => "Verification failed",
            Operation::Login => "Login failed",
        }
    }
}

impl AuthError {
    /// Faults are failures the caller did not cause through the request's
    /// business content; they are reported with the operation prefix.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            AuthError::AccountNotFound
                | AuthError::DeliveryFailure(_)
                | AuthError::Token(_)
                | AuthError::Unexpected(_)
        )
    }

    pub fn into_response(self, operation: Operation) -> AuthResponse {
        if self.is_fault() {
            tracing::error!(?operation, error = %self, "authentication operation failed");
            AuthResponse::failure(format!("{}: {}", operation.failure_label(), self))
        } else {
            tracing::info!(?operation, outcome = %self, "authentication operation rejected");
            AuthResponse::failure(self.to_string())
        }
    }
}

impl From<EmailError> for AuthError {
    fn from(error: EmailError) -> Self {
        AuthError::InvalidInput(error.to_string())
    }
}

impl From<PasswordError> for AuthError {
    fn from(error: PasswordError) -> Self {
        AuthError::InvalidInput(error.to_string())
    }
}

impl From<AccountStoreError> for AuthError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::AccountAlreadyExists => AuthError::DuplicateEmail,
            AccountStoreError::AccountNotFound => AuthError::AccountNotFound,
            AccountStoreError::AlreadyVerified => AuthError::AlreadyVerified,
            AccountStoreError::UnexpectedError(e) => AuthError::Unexpected(e),
        }
    }
}

impl From<AccountError> for AuthError {
    fn from(error: AccountError) -> Self {
        match error {
            AccountError::AlreadyVerified => AuthError::AlreadyVerified,
            AccountError::CodeMismatch => AuthError::InvalidCode,
            other => AuthError::Unexpected(other.to_string()),
        }
    }
}

impl From<HashingError> for AuthError {
    fn from(error: HashingError) -> Self {
        AuthError::Unexpected(error.to_string())
    }
}
