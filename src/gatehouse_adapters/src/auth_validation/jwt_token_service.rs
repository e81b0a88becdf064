use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use gatehouse_core::{AuthToken, TokenError, TokenService};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct JwtAuthConfig {
    /// Base64-encoded HMAC key.
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 signer and verifier for bearer tokens.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: chrono::Duration,
}

impl JwtTokenService {
    pub fn from_config(config: &JwtAuthConfig) -> Result<Self, TokenError> {
        let key = STANDARD
            .decode(config.jwt_secret.expose_secret().trim())
            .map_err(|e| TokenError::InvalidSecret(e.to_string()))?;

        if key.is_empty() {
            return Err(TokenError::InvalidSecret("secret is empty".to_string()));
        }

        if config.token_ttl_in_seconds <= 0 {
            return Err(TokenError::LifetimeOutOfRange);
        }

        let lifetime = chrono::Duration::try_seconds(config.token_ttl_in_seconds)
            .ok_or(TokenError::LifetimeOutOfRange)?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(&key),
            decoding_key: DecodingKey::from_secret(&key),
            lifetime,
        })
    }

    /// Sign a token as if issued at `issued_at`.
    pub fn issue_at(
        &self,
        subject: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<AuthToken, TokenError> {
        let exp = issued_at
            .checked_add_signed(self.lifetime)
            .ok_or(TokenError::LifetimeOutOfRange)?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map(AuthToken::new)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Decode and check the signature. Expiry is left to the caller.
    pub fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::InvalidToken(e.to_string()))
    }

    fn check(&self, token: &str, expected_subject: &str) -> Result<(), TokenError> {
        let claims = self.decode_claims(token)?;

        if claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::InvalidToken("token has expired".to_string()));
        }
        if claims.sub != expected_subject {
            return Err(TokenError::InvalidToken("subject mismatch".to_string()));
        }
        Ok(())
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, subject: &str) -> Result<AuthToken, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    fn validate(&self, token: &str, expected_subject: &str) -> bool {
        match self.check(token, expected_subject) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Token rejected");
                false
            }
        }
    }

    fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        self.decode_claims(token).map(|claims| claims.sub)
    }
}
