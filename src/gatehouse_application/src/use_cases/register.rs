use gatehouse_core::{
    Account, AccountStore, CountryResolver, CredentialHasher, Email, EmailClient, Password,
    PasswordError, Registration, VerificationCode,
};

use crate::{error::AuthError, geo_gate::GeoGate};

pub const REGISTRATION_SUCCESS_MESSAGE: &str =
    "Registration successful. Please check your email for verification code.";

pub const VERIFICATION_EMAIL_SUBJECT: &str = "Your OTP for Admin Panel";

pub fn verification_email_body(code: &VerificationCode) -> String {
    format!(
        "Your verification code is: {code}\n\nPlease enter this code to verify your email address."
    )
}

/// Register use case - creates a pending account and mails its one-time code
pub struct RegisterUseCase<'a, R, S, H, E> {
    geo_gate: &'a GeoGate<R>,
    account_store: &'a S,
    hasher: &'a H,
    email_client: &'a E,
}

impl<'a, R, S, H, E> RegisterUseCase<'a, R, S, H, E>
where
    R: CountryResolver,
    S: AccountStore,
    H: CredentialHasher,
    E: EmailClient,
{
    pub fn new(
        geo_gate: &'a GeoGate<R>,
        account_store: &'a S,
        hasher: &'a H,
        email_client: &'a E,
    ) -> Self {
        Self {
            geo_gate,
            account_store,
            hasher,
            email_client,
        }
    }

    /// Execute the register use case
    ///
    /// Checks run in a fixed order: geo restriction, input shape, duplicate
    /// email, password confirmation, password strength. The first failing
    /// check decides the error.
    ///
    /// The account is persisted before the code is mailed, so a delivery
    /// failure leaves a pending account behind.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, registration))]
    pub async fn execute(
        &self,
        registration: Registration,
        source_ip: Option<&str>,
    ) -> Result<(), AuthError> {
        let decision = self.geo_gate.evaluate(source_ip).await;
        if !decision.admitted {
            let country = decision.country.unwrap_or_default();
            tracing::warn!(%country, "registration refused by country restriction");
            return Err(AuthError::GeoRestricted(country));
        }

        let email = Email::try_from(registration.email)?;
        let password = Password::try_from(registration.password)?;
        let confirm_password =
            Password::try_from(registration.confirm_password).map_err(|e| match e {
                PasswordError::Empty => {
                    AuthError::InvalidInput("Please confirm your password".to_string())
                }
            })?;

        if self.account_store.exists(&email).await? {
            return Err(AuthError::DuplicateEmail);
        }

        if !password.matches(&confirm_password) {
            return Err(AuthError::PasswordMismatch);
        }

        if !password.meets_policy() {
            return Err(AuthError::WeakPassword);
        }

        let password_hash = self.hasher.hash(&password).await?;
        let code = VerificationCode::new();

        // A concurrent registration for the same email loses here.
        self.account_store
            .add_account(Account::new_pending(
                email.clone(),
                password_hash,
                code.clone(),
            ))
            .await?;

        self.email_client
            .send_email(
                &email,
                VERIFICATION_EMAIL_SUBJECT,
                &verification_email_body(&code),
            )
            .await
            .map_err(AuthError::DeliveryFailure)?;

        tracing::info!("verification code dispatched");
        Ok(())
    }
}
