use argon2::{
    Algorithm, Argon2, Params, PasswordHash as Argon2Hash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use gatehouse_core::{CredentialHasher, HashingError, Password, PasswordHash};
use secrecy::{ExposeSecret, Secret};

/// Argon2id with a random salt per hash, encoded in PHC string format.
///
/// Hashing is CPU bound and runs on the blocking thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[async_trait::async_trait]
impl CredentialHasher for Argon2Hasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError> {
        let password = password.clone();
        let current_span = tracing::Span::current();

        let phc = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| h.to_string())
                    .map_err(|e| e.to_string())
            })
        })
        .await
        .map_err(|e| HashingError::Hash(e.to_string()))?
        .map_err(HashingError::Hash)?;

        PasswordHash::parse(Secret::from(phc)).map_err(|e| HashingError::Hash(e.to_string()))
    }

    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    async fn verify(
        &self,
        candidate: &Password,
        expected: &PasswordHash,
    ) -> Result<bool, HashingError> {
        let candidate = candidate.clone();
        let expected = expected.clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected = Argon2Hash::new(expected.as_ref().expose_secret())
                    .map_err(|e| HashingError::Verify(e.to_string()))?;

                match argon2()
                    .map_err(HashingError::Verify)?
                    .verify_password(candidate.as_ref().expose_secret().as_bytes(), &expected)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(HashingError::Verify(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| HashingError::Verify(e.to_string()))?
    }
}
