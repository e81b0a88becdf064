pub mod ipapi_country_resolver;
pub mod static_country_resolver;

pub use ipapi_country_resolver::IpApiCountryResolver;
pub use static_country_resolver::StaticCountryResolver;
