use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File};
use gatehouse_core::CountryDenylist;
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{
    BASE_CONFIG_FILE, DEFAULT_CONFIG_DIR, DEFAULT_DENYLIST, DEFAULT_ENVIRONMENT, env, prod,
};

/// Immutable service configuration.
///
/// Layered from `base.json`, then `{APP_ENVIRONMENT}.json` when present, then
/// `GATEHOUSE__SECTION__KEY` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthServiceSetting {
    pub application: ApplicationSetting,
    pub auth: AuthSetting,
    pub email_client: EmailClientSetting,
    /// Absent: accounts are kept in memory.
    #[serde(default)]
    pub postgres: Option<PostgresSetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSetting {
    pub address: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSetting {
    pub jwt: JwtSetting,
    pub geo: GeoSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSetting {
    /// Base64-encoded HMAC key. No default: outside `local` it comes from
    /// `GATEHOUSE__AUTH__JWT__SECRET`, and loading fails without it.
    pub secret: Secret<String>,
    /// Token lifetime in seconds.
    pub time_to_live: i64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GeoResolverKind {
    /// Remote lookup at `lookup_base_url`.
    #[default]
    IpApi,
    /// Fixed table from `static_countries`.
    Static,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoSetting {
    #[serde(default = "default_denylist")]
    pub denylist: CountryDenylist,
    #[serde(default)]
    pub resolver: GeoResolverKind,
    #[serde(default = "default_lookup_base_url")]
    pub lookup_base_url: String,
    pub timeout_in_millis: u64,
    #[serde(default)]
    pub static_countries: HashMap<String, String>,
}

impl GeoSetting {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmailDeliveryKind {
    /// Postmark API; requires `auth_token`.
    #[default]
    Postmark,
    /// Messages are written to the log and never leave the process.
    Log,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSetting {
    #[serde(default)]
    pub delivery: EmailDeliveryKind,
    pub base_url: String,
    pub sender: String,
    #[serde(default)]
    pub auth_token: Option<Secret<String>>,
    pub timeout_in_millis: u64,
}

impl EmailClientSetting {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSetting {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// CORS origins. A single `*` entry admits any origin.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(origins.into_iter().map(Into::into).collect())
    }

    pub fn allows_any(&self) -> bool {
        self.0.iter().any(|origin| origin == "*")
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.allows_any()
            || origin
                .to_str()
                .is_ok_and(|origin| self.0.iter().any(|allowed| allowed == origin))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn default_denylist() -> CountryDenylist {
    CountryDenylist::new(DEFAULT_DENYLIST)
}

fn default_lookup_base_url() -> String {
    prod::geo::LOOKUP_BASE_URL.to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl AuthServiceSetting {
    /// Load `.env`, then the layered configuration from the directory named by
    /// `GATEHOUSE_CONFIG_DIR` (default `config`).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let dir = std::env::var(env::CONFIG_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));
        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        Self::from_dir(&dir, &environment)
    }

    pub fn from_dir(dir: &Path, environment: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(dir.join(BASE_CONFIG_FILE)))
            .add_source(File::from(dir.join(format!("{environment}.json"))).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("auth.geo.denylist")
                    .with_list_parse_key("application.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
