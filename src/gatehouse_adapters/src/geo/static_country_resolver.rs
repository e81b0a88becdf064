use std::collections::HashMap;
use std::sync::Arc;

use gatehouse_core::CountryResolver;

/// Fixed IP to country table, for local runs without network access.
#[derive(Debug, Clone, Default)]
pub struct StaticCountryResolver {
    countries: Arc<HashMap<String, String>>,
}

impl StaticCountryResolver {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let countries = entries
            .into_iter()
            .map(|(ip, country)| (ip.into(), country.into()))
            .collect();
        Self {
            countries: Arc::new(countries),
        }
    }
}

#[async_trait::async_trait]
impl CountryResolver for StaticCountryResolver {
    async fn resolve_country(&self, ip_address: &str) -> Option<String> {
        self.countries.get(ip_address.trim()).cloned()
    }
}
