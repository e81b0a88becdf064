use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    email::{Email, EmailError},
    password_hash::{PasswordHash, PasswordHashError},
    verification_code::{VerificationCode, VerificationCodeError},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Email already verified")]
    AlreadyVerified,
    #[error("Invalid OTP code")]
    CodeMismatch,
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
    #[error("Invalid password hash: {0}")]
    PasswordHash(#[from] PasswordHashError),
    #[error("Invalid verification code: {0}")]
    VerificationCode(#[from] VerificationCodeError),
    #[error("Inconsistent account state: {0}")]
    InconsistentState(&'static str),
}

/// Where an account sits in the `PendingVerification -> Verified` lifecycle.
///
/// The pending code only exists in the pending state, so a verified account
/// can never carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountStatus {
    PendingVerification { code: VerificationCode },
    Verified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    email: Email,
    password_hash: PasswordHash,
    status: AccountStatus,
}

impl Account {
    pub fn new_pending(email: Email, password_hash: PasswordHash, code: VerificationCode) -> Self {
        Self {
            email,
            password_hash,
            status: AccountStatus::PendingVerification { code },
        }
    }

    /// Rebuild an account from its stored columns.
    pub fn parse(
        email: Secret<String>,
        password_hash: Secret<String>,
        verified: bool,
        verification_code: Option<String>,
    ) -> Result<Self, AccountError> {
        let email = Email::try_from(email)?;
        let password_hash = PasswordHash::parse(password_hash)?;

        let status = match (verified, verification_code) {
            (true, None) => AccountStatus::Verified,
            (false, Some(code)) => AccountStatus::PendingVerification {
                code: VerificationCode::parse(code)?,
            },
            (true, Some(_)) => {
                return Err(AccountError::InconsistentState(
                    "verified account still holds a verification code",
                ));
            }
            (false, None) => {
                return Err(AccountError::InconsistentState(
                    "unverified account has no verification code",
                ));
            }
        };

        Ok(Self {
            email,
            password_hash,
            status,
        })
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn status(&self) -> &AccountStatus {
        &self.status
    }

    pub fn is_verified(&self) -> bool {
        matches!(self.status, AccountStatus::Verified)
    }

    pub fn verification_code(&self) -> Option<&VerificationCode> {
        match &self.status {
            AccountStatus::PendingVerification { code } => Some(code),
            AccountStatus::Verified => None,
        }
    }

    /// Move to `Verified` if `candidate` equals the pending code.
    ///
    /// A mismatch leaves the account untouched, pending code included.
    pub fn verify(&mut self, candidate: &str) -> Result<(), AccountError> {
        match &self.status {
            AccountStatus::Verified => Err(AccountError::AlreadyVerified),
            AccountStatus::PendingVerification { code } if !code.matches(candidate) => {
                Err(AccountError::CodeMismatch)
            }
            AccountStatus::PendingVerification { .. } => {
                self.status = AccountStatus::Verified;
                Ok(())
            }
        }
    }

    /// Move a pending account to `Verified` without a code check. Stores call
    /// this once the code has been matched.
    pub fn mark_verified(&mut self) -> Result<(), AccountError> {
        match self.status {
            AccountStatus::Verified => Err(AccountError::AlreadyVerified),
            AccountStatus::PendingVerification { .. } => {
                self.status = AccountStatus::Verified;
                Ok(())
            }
        }
    }
}
