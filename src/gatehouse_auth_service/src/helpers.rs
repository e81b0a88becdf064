use std::sync::Arc;

use color_eyre::eyre::{Result, eyre};
use gatehouse_adapters::{
    auth_validation::{JwtAuthConfig, JwtTokenService},
    config::{
        AuthServiceSetting, EmailClientSetting, EmailDeliveryKind, GeoResolverKind, GeoSetting,
        PostgresSetting,
    },
    email::{MockEmailClient, PostmarkEmailClient},
    geo::{IpApiCountryResolver, StaticCountryResolver},
    hashing::Argon2Hasher,
    persistence::{HashMapAccountStore, PostgresAccountStore},
};
use gatehouse_application::{AuthWorkflow, GeoGate};
use gatehouse_core::{AccountStore, CountryResolver, Email, EmailClient};
use reqwest::Client as HttpClient;
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Workflow with adapters chosen from configuration at startup.
pub type DynAuthWorkflow = AuthWorkflow<
    Arc<dyn AccountStore>,
    Arc<dyn EmailClient>,
    Arc<dyn CountryResolver>,
    Argon2Hasher,
    JwtTokenService,
>;

pub async fn get_postgres_pool(setting: &PostgresSetting) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(setting.max_connections)
        .connect(setting.url.expose_secret())
        .await
}

/// PostgreSQL (migrated) when configured, otherwise an in-memory store.
pub async fn configure_account_store(
    setting: Option<&PostgresSetting>,
) -> Result<Arc<dyn AccountStore>> {
    match setting {
        Some(setting) => {
            let pool = get_postgres_pool(setting).await?;
            PostgresAccountStore::migrate(&pool).await?;
            tracing::info!("Using PostgreSQL account store");
            Ok(Arc::new(PostgresAccountStore::new(pool)))
        }
        None => {
            tracing::warn!("No database configured, accounts are kept in memory");
            Ok(Arc::new(HashMapAccountStore::new()))
        }
    }
}

/// Postmark unless delivery is explicitly set to `log`. Postmark without an
/// auth token is a startup error.
pub fn configure_email_client(setting: &EmailClientSetting) -> Result<Arc<dyn EmailClient>> {
    if setting.delivery == EmailDeliveryKind::Log {
        tracing::warn!("Email delivery set to log, verification codes are not sent");
        return Ok(Arc::new(MockEmailClient::new()));
    }

    let auth_token = setting
        .auth_token
        .as_ref()
        .ok_or_else(|| eyre!("email_client.auth_token is required for Postmark delivery"))?;

    let http_client = HttpClient::builder().timeout(setting.timeout()).build()?;
    let sender = Email::try_from(Secret::new(setting.sender.clone()))?;

    Ok(Arc::new(PostmarkEmailClient::new(
        setting.base_url.clone(),
        sender,
        auth_token.clone(),
        http_client,
    )))
}

pub fn configure_country_resolver(setting: &GeoSetting) -> Result<Arc<dyn CountryResolver>> {
    match setting.resolver {
        GeoResolverKind::IpApi => {
            let http_client = HttpClient::builder().timeout(setting.timeout()).build()?;
            Ok(Arc::new(IpApiCountryResolver::new(
                setting.lookup_base_url.clone(),
                http_client,
            )))
        }
        GeoResolverKind::Static => Ok(Arc::new(StaticCountryResolver::new(
            setting.static_countries.clone(),
        ))),
    }
}

pub fn configure_token_service(config: &AuthServiceSetting) -> Result<JwtTokenService> {
    let token_service = JwtTokenService::from_config(&JwtAuthConfig {
        jwt_secret: config.auth.jwt.secret.clone(),
        token_ttl_in_seconds: config.auth.jwt.time_to_live,
    })?;
    Ok(token_service)
}

/// Assemble the workflow from configuration.
pub async fn build_workflow(
    config: &AuthServiceSetting,
    token_service: JwtTokenService,
) -> Result<DynAuthWorkflow> {
    let account_store = configure_account_store(config.postgres.as_ref()).await?;
    let email_client = configure_email_client(&config.email_client)?;
    let geo_gate = GeoGate::new(
        configure_country_resolver(&config.auth.geo)?,
        config.auth.geo.denylist.clone(),
    );

    Ok(AuthWorkflow::new(
        account_store,
        email_client,
        geo_gate,
        Argon2Hasher::new(),
        token_service,
    ))
}
