use gatehouse_core::{AccountStore, AuthToken, Email, TokenService};

use crate::error::AuthError;

/// Verify use case - confirms email ownership and issues the first token
pub struct VerifyUseCase<'a, S, T> {
    account_store: &'a S,
    token_service: &'a T,
}

impl<'a, S, T> VerifyUseCase<'a, S, T>
where
    S: AccountStore,
    T: TokenService,
{
    pub fn new(account_store: &'a S, token_service: &'a T) -> Self {
        Self {
            account_store,
            token_service,
        }
    }

    /// Execute the verify use case
    ///
    /// A wrong code leaves the stored account and its code untouched; there is
    /// no attempt counter. The pending to verified transition is a store side
    /// compare-and-set, so a caller losing a race gets `AlreadyVerified`.
    ///
    /// # Returns
    /// A freshly issued token for `email` on success
    #[tracing::instrument(name = "VerifyUseCase::execute", skip(self, otp))]
    pub async fn execute(&self, email: Email, otp: &str) -> Result<AuthToken, AuthError> {
        let mut account = self
            .account_store
            .find(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        account.verify(otp)?;

        self.account_store.mark_verified(&email).await?;

        let token = self.token_service.issue(email.as_str())?;
        Ok(token)
    }
}
