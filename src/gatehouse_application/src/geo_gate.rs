use gatehouse_core::{CountryDenylist, CountryResolver, GeoDecision};

/// Decides whether a registration may proceed based on where it comes from.
///
/// Resolution failures are fail-open: an unknown country is admitted.
#[derive(Debug, Clone)]
pub struct GeoGate<R> {
    resolver: R,
    denylist: CountryDenylist,
}

impl<R> GeoGate<R>
where
    R: CountryResolver,
{
    pub fn new(resolver: R, denylist: CountryDenylist) -> Self {
        Self { resolver, denylist }
    }

    pub async fn resolve_country(&self, ip_address: &str) -> Option<String> {
        self.resolver.resolve_country(ip_address).await
    }

    pub fn is_blocked(&self, country: Option<&str>) -> bool {
        self.denylist.is_blocked(country)
    }

    #[tracing::instrument(name = "GeoGate::evaluate", skip(self))]
    pub async fn evaluate(&self, ip_address: Option<&str>) -> GeoDecision {
        let country = match ip_address {
            Some(ip) => self.resolve_country(ip).await,
            None => None,
        };

        if country.is_none() {
            tracing::debug!("country unresolved, admitting");
        }

        GeoDecision::new(country, &self.denylist)
    }
}
