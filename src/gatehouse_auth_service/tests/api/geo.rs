use std::collections::HashMap;

use gatehouse_adapters::config::{GeoResolverKind, GeoSetting};
use gatehouse_auth_service::configure_country_resolver;
use gatehouse_core::{CountryDenylist, CountryResolver};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn geo_setting(resolver: GeoResolverKind, lookup_base_url: String) -> GeoSetting {
    GeoSetting {
        denylist: CountryDenylist::new(["Syria", "Afghanistan", "Iran"]),
        resolver,
        lookup_base_url,
        timeout_in_millis: 200,
        static_countries: HashMap::from([("203.0.113.1".to_string(), "Iran".to_string())]),
    }
}

#[tokio::test]
async fn should_resolve_through_configured_lookup_service() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/198.51.100.7/country_name"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Afghanistan"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resolver =
        configure_country_resolver(&geo_setting(GeoResolverKind::IpApi, mock_server.uri()))
            .unwrap();

    assert_eq!(
        resolver.resolve_country("198.51.100.7").await.as_deref(),
        Some("Afghanistan")
    );
}

#[tokio::test]
async fn should_resolve_from_static_table() {
    let resolver = configure_country_resolver(&geo_setting(
        GeoResolverKind::Static,
        "http://unused.invalid".to_string(),
    ))
    .unwrap();

    assert_eq!(
        resolver.resolve_country("203.0.113.1").await.as_deref(),
        Some("Iran")
    );
    assert_eq!(resolver.resolve_country("198.51.100.7").await, None);
}
