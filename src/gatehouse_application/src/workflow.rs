use async_trait::async_trait;
use gatehouse_core::{
    AccountStore, AuthResponse, AuthenticationScheme, CountryResolver, Credentials,
    CredentialHasher, Email, EmailClient, Password, Registration, TokenService,
    VerificationAttempt,
};

use crate::{
    error::{AuthError, Operation},
    geo_gate::GeoGate,
    use_cases::{LoginUseCase, REGISTRATION_SUCCESS_MESSAGE, RegisterUseCase, VerifyUseCase},
};

pub const VERIFICATION_SUCCESS_MESSAGE: &str = "Email verified successfully";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/// Orchestrates registration, verification and login.
///
/// Collaborators are handed in at construction; cloning is cheap as long as
/// each collaborator shares its state internally.
#[derive(Clone)]
pub struct AuthWorkflow<S, E, R, H, T> {
    account_store: S,
    email_client: E,
    geo_gate: GeoGate<R>,
    hasher: H,
    token_service: T,
}

impl<S, E, R, H, T> AuthWorkflow<S, E, R, H, T>
where
    S: AccountStore,
    E: EmailClient,
    R: CountryResolver,
    H: CredentialHasher,
    T: TokenService,
{
    pub fn new(
        account_store: S,
        email_client: E,
        geo_gate: GeoGate<R>,
        hasher: H,
        token_service: T,
    ) -> Self {
        Self {
            account_store,
            email_client,
            geo_gate,
            hasher,
            token_service,
        }
    }

    pub fn token_service(&self) -> &T {
        &self.token_service
    }

    async fn try_verify(&self, attempt: VerificationAttempt) -> Result<String, AuthError> {
        let email = Email::try_from(attempt.email)?;
        let use_case = VerifyUseCase::new(&self.account_store, &self.token_service);
        let token = use_case.execute(email, &attempt.otp).await?;
        Ok(token.into_inner())
    }

    async fn try_login(&self, credentials: Credentials) -> Result<String, AuthError> {
        let email = Email::try_from(credentials.email)?;
        let password = Password::try_from(credentials.password)?;
        let use_case = LoginUseCase::new(&self.account_store, &self.hasher, &self.token_service);
        let token = use_case.execute(email, password).await?;
        Ok(token.into_inner())
    }
}

#[async_trait]
impl<S, E, R, H, T> AuthenticationScheme for AuthWorkflow<S, E, R, H, T>
where
    S: AccountStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
    R: CountryResolver + Clone + 'static,
    H: CredentialHasher + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    #[tracing::instrument(name = "AuthWorkflow::register", skip_all)]
    async fn register(
        &self,
        registration: Registration,
        source_ip: Option<String>,
    ) -> AuthResponse {
        let use_case = RegisterUseCase::new(
            &self.geo_gate,
            &self.account_store,
            &self.hasher,
            &self.email_client,
        );

        match use_case.execute(registration, source_ip.as_deref()).await {
            Ok(()) => AuthResponse::success(REGISTRATION_SUCCESS_MESSAGE),
            Err(e) => e.into_response(Operation::Register),
        }
    }

    #[tracing::instrument(name = "AuthWorkflow::verify", skip_all)]
    async fn verify(&self, attempt: VerificationAttempt) -> AuthResponse {
        match self.try_verify(attempt).await {
            Ok(token) => AuthResponse::success_with_token(VERIFICATION_SUCCESS_MESSAGE, token),
            Err(e) => e.into_response(Operation::Verify),
        }
    }

    #[tracing::instrument(name = "AuthWorkflow::login", skip_all)]
    async fn login(&self, credentials: Credentials) -> AuthResponse {
        match self.try_login(credentials).await {
            Ok(token) => AuthResponse::success_with_token(LOGIN_SUCCESS_MESSAGE, token),
            Err(e) => e.into_response(Operation::Login),
        }
    }
}
