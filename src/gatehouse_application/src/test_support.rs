//! Hand-rolled port implementations shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use gatehouse_core::{
    Account, AccountStore, AccountStoreError, AuthToken, CountryResolver, CredentialHasher, Email,
    EmailClient, HashingError, Password, PasswordHash, TokenError, TokenService,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

pub fn email(raw: &str) -> Email {
    Email::try_from(Secret::from(raw.to_string())).unwrap()
}

pub fn secret(raw: &str) -> Secret<String> {
    Secret::from(raw.to_string())
}

#[derive(Clone, Default)]
pub struct MockAccountStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
    exists_calls: Arc<AtomicUsize>,
}

impl MockAccountStore {
    pub async fn get(&self, email: &Email) -> Option<Account> {
        self.accounts.read().await.get(email).cloned()
    }

    pub async fn insert(&self, account: Account) {
        self.accounts
            .write()
            .await
            .insert(account.email().clone(), account);
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn exists(&self, email: &Email) -> Result<bool, AccountStoreError> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.accounts.read().await.contains_key(email))
    }

    async fn find(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        Ok(self.accounts.read().await.get(email).cloned())
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

pub const STORE_FAULT: &str = "connection reset by peer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreCall {
    Exists,
    Find,
    AddAccount,
    MarkVerified,
}

/// Delegates to a [`MockAccountStore`] except for one call, which fails with
/// [`AccountStoreError::UnexpectedError`].
#[derive(Clone)]
pub struct FaultyAccountStore {
    inner: MockAccountStore,
    failing: StoreCall,
}

impl FaultyAccountStore {
    pub fn new(inner: MockAccountStore, failing: StoreCall) -> Self {
        Self { inner, failing }
    }

    fn fault(&self, call: StoreCall) -> Result<(), AccountStoreError> {
        if self.failing == call {
            return Err(AccountStoreError::UnexpectedError(STORE_FAULT.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountStore for FaultyAccountStore {
    async fn exists(&self, email: &Email) -> Result<bool, AccountStoreError> {
        self.fault(StoreCall::Exists)?;
        self.inner.exists(email).await
    }

    async fn find(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        self.fault(StoreCall::Find)?;
        self.inner.find(email).await
    }

    async fn add_account(&self, account: Account) -> Result<(), AccountStoreError> {
        self.fault(StoreCall::AddAccount)?;
        self.inner.add_account(account).await
    }

    async fn mark_verified(&self, email: &Email) -> Result<(), AccountStoreError> {
        self.fault(StoreCall::MarkVerified)?;
        self.inner.mark_verified(email).await
    }
}

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub content: String,
}

#[derive(Clone, Default)]
pub struct MockEmailClient {
    sent: Arc<RwLock<Vec<SentEmail>>>,
    fail_with: Option<String>,
}

impl MockEmailClient {
    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub async fn sent(&self) -> Vec<SentEmail> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        if let Some(reason) = &self.fail_with {
            return Err(reason.clone());
        }
        self.sent.write().await.push(SentEmail {
            recipient: recipient.as_str().to_string(),
            subject: subject.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FixedCountryResolver {
    country: Option<String>,
    lookups: Arc<AtomicUsize>,
}

impl FixedCountryResolver {
    pub fn new(country: Option<&str>) -> Self {
        Self {
            country: country.map(str::to_string),
            lookups: Arc::default(),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryResolver for FixedCountryResolver {
    async fn resolve_country(&self, _ip_address: &str) -> Option<String> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.country.clone()
    }
}

/// Reversible "hash" so tests can assert on stored values.
#[derive(Clone, Default)]
pub struct PlainHasher;

const PLAIN_HASH_PREFIX: &str = "plain$";

#[async_trait]
impl CredentialHasher for PlainHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError> {
        let hashed = format!("{PLAIN_HASH_PREFIX}{}", password.as_ref().expose_secret());
        PasswordHash::parse(Secret::from(hashed)).map_err(|e| HashingError::Hash(e.to_string()))
    }

    async fn verify(
        &self,
        candidate: &Password,
        expected: &PasswordHash,
    ) -> Result<bool, HashingError> {
        let expected = expected.as_ref().expose_secret();
        Ok(expected
            .strip_prefix(PLAIN_HASH_PREFIX)
            .is_some_and(|plain| plain == candidate.as_ref().expose_secret()))
    }
}

pub const HASHER_FAULT: &str = "memory cost exceeded";

/// Hasher whose every call fails.
#[derive(Clone, Default)]
pub struct FailingHasher;

#[async_trait]
impl CredentialHasher for FailingHasher {
    async fn hash(&self, _password: &Password) -> Result<PasswordHash, HashingError> {
        Err(HashingError::Hash(HASHER_FAULT.to_string()))
    }

    async fn verify(
        &self,
        _candidate: &Password,
        _expected: &PasswordHash,
    ) -> Result<bool, HashingError> {
        Err(HashingError::Verify(HASHER_FAULT.to_string()))
    }
}

/// Tokens of the form `token-for:<subject>`.
#[derive(Clone, Default)]
pub struct FakeTokenService;

const FAKE_TOKEN_PREFIX: &str = "token-for:";

impl TokenService for FakeTokenService {
    fn issue(&self, subject: &str) -> Result<AuthToken, TokenError> {
        Ok(AuthToken::new(format!("{FAKE_TOKEN_PREFIX}{subject}")))
    }

    fn validate(&self, token: &str, expected_subject: &str) -> bool {
        self.extract_subject(token)
            .is_ok_and(|subject| subject == expected_subject)
    }

    fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        token
            .strip_prefix(FAKE_TOKEN_PREFIX)
            .map(str::to_string)
            .ok_or_else(|| TokenError::InvalidToken(token.to_string()))
    }
}
