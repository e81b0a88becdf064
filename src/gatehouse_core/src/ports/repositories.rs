use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{account::Account, email::Email};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("User not found")]
    AccountNotFound,
    #[error("Email already verified")]
    AlreadyVerified,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AccountAlreadyExists, Self::AccountAlreadyExists)
                | (Self::AccountNotFound, Self::AccountNotFound)
                | (Self::AlreadyVerified, Self::AlreadyVerified)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Durable record of accounts.
///
/// `add_account` must be race-free with respect to email uniqueness: of two
/// concurrent inserts for the same email exactly one succeeds and the other
/// returns [`AccountStoreError::AccountAlreadyExists`]. `mark_verified` is a
/// compare-and-set on the pending state: of two concurrent calls for the same
/// email exactly one succeeds and the other returns
/// [`AccountStoreError::AlreadyVerified`].
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn exists(&self, email: &Email) -> Result<bool, AccountStoreError>;
    async fn find(&self, email: &Email) -> Result<Option<Account>, AccountStoreError>;
    async fn add_account(&self, account: Account) -> Result<(), AccountStoreError>;
    async fn mark_verified(&self, email: &Email) -> Result<(), AccountStoreError>;
}

#[async_trait]
impl<T: AccountStore + ?Sized> AccountStore for Arc<T> {
    async fn exists(&self, email: &Email) -> Result<bool, AccountStoreError> {
        (**self).exists(email).await
    }

    async fn find(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        (**self).find(email).await
    }

    async fn add_account(&self, account: Account) -> Result<(), AccountStoreError> {
        (**self).add_account(account).await
    }

    async fn mark_verified(&self, email: &Email) -> Result<(), AccountStoreError> {
        (**self).mark_verified(email).await
    }
}
