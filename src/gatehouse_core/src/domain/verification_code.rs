use std::fmt;

use rand::Rng;
use thiserror::Error;

const CODE_LENGTH: usize = 6;
const CODE_SPACE: u32 = 1_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerificationCodeError {
    #[error("Verification code must be exactly 6 digits")]
    Malformed,
}

/// Six digit one-time code mailed to a registrant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Uniformly random over `000000..=999999`.
    pub fn new() -> Self {
        let value = rand::rng().random_range(0..CODE_SPACE);
        Self(format!("{value:06}"))
    }

    pub fn parse(code: String) -> Result<Self, VerificationCodeError> {
        if code.len() == CODE_LENGTH && code.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(code))
        } else {
            Err(VerificationCodeError::Malformed)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact string comparison against a submitted code.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl Default for VerificationCode {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
