use std::net::IpAddr;

use gatehouse_core::CountryResolver;
use reqwest::{Client, Url};

/// Marker ipapi returns in place of a country name for unroutable addresses.
const UNDEFINED_COUNTRY: &str = "Undefined";

/// Resolves countries through ipapi's plain-text `country_name` endpoint.
///
/// Every failure resolves to `None`; the caller admits unresolved addresses.
#[derive(Clone)]
pub struct IpApiCountryResolver {
    http_client: Client,
    base_url: String,
}

impl IpApiCountryResolver {
    /// `http_client` should carry the lookup timeout.
    pub fn new(base_url: String, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    async fn lookup(&self, ip: IpAddr) -> Result<Option<String>, String> {
        let base = Url::parse(&self.base_url).map_err(|e| e.to_string())?;
        let url = base
            .join(&format!("/{ip}/country_name"))
            .map_err(|e| e.to_string())?;

        let body = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .text()
            .await
            .map_err(|e| e.to_string())?;

        let country = body.trim();
        if country.is_empty() || country == UNDEFINED_COUNTRY {
            return Ok(None);
        }
        Ok(Some(country.to_string()))
    }
}

#[async_trait::async_trait]
impl CountryResolver for IpApiCountryResolver {
    #[tracing::instrument(name = "Resolving country", skip(self))]
    async fn resolve_country(&self, ip_address: &str) -> Option<String> {
        let Ok(ip) = ip_address.trim().parse::<IpAddr>() else {
            tracing::warn!("Not an IP address, skipping country lookup");
            return None;
        };

        match self.lookup(ip).await {
            Ok(country) => country,
            Err(e) => {
                tracing::warn!(error = %e, "Country lookup failed");
                None
            }
        }
    }
}
