use serde::Deserialize;

/// Country names that may not register. Membership is an exact,
/// case-sensitive match; order carries no meaning.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CountryDenylist(Vec<String>);

impl CountryDenylist {
    pub fn new<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(countries.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, country: &str) -> bool {
        self.0.iter().any(|denied| denied == country)
    }

    /// An unresolved country is never blocked.
    pub fn is_blocked(&self, country: Option<&str>) -> bool {
        country.is_some_and(|country| self.contains(country))
    }
}

/// Outcome of the geo gate for a single registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoDecision {
    pub country: Option<String>,
    pub admitted: bool,
}

impl GeoDecision {
    pub fn new(country: Option<String>, denylist: &CountryDenylist) -> Self {
        let admitted = !denylist.is_blocked(country.as_deref());
        Self { country, admitted }
    }
}
