use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use gatehouse_core::{Account, AccountStore, AccountStoreError, Email};

/// In-memory account store. The existence check and the insert of
/// `add_account`, and the state check and transition of `mark_verified`,
/// each happen under one write lock.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn exists(&self, email: &Email) -> Result<bool, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.contains_key(email))
    }

    async fn find(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(email).cloned())
    }

    async fn add_account(&self, account: Account) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.email()) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        accounts.insert(account.email().clone(), account);
        Ok(())
    }

    async fn mark_verified(&self, email: &Email) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        accounts
            .get_mut(email)
            .ok_or(AccountStoreError::AccountNotFound)?
            .mark_verified()
            .map_err(|_| AccountStoreError::AlreadyVerified)
    }
}
