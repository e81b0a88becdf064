use gatehouse_core::{AccountStore, AuthToken, CredentialHasher, Email, Password, TokenService};

use crate::error::AuthError;

/// Login use case - authenticates a verified account
pub struct LoginUseCase<'a, S, H, T> {
    account_store: &'a S,
    hasher: &'a H,
    token_service: &'a T,
}

impl<'a, S, H, T> LoginUseCase<'a, S, H, T>
where
    S: AccountStore,
    H: CredentialHasher,
    T: TokenService,
{
    pub fn new(account_store: &'a S, hasher: &'a H, token_service: &'a T) -> Self {
        Self {
            account_store,
            hasher,
            token_service,
        }
    }

    /// Execute the login use case
    ///
    /// Verification status is checked before the password, so an unverified
    /// account is refused even with the right password.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<AuthToken, AuthError> {
        let account = self
            .account_store
            .find(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if !account.is_verified() {
            return Err(AuthError::NotVerified);
        }

        if !self
            .hasher
            .verify(&password, account.password_hash())
            .await?
        {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_service.issue(email.as_str())?;
        Ok(token)
    }
}
