//! Client configuration builder validation

use seqsearch::ClientConfig;
use seqsearch::utils::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
use std::time::Duration;

#[test]
fn builder_defaults() {
    let config = ClientConfig::builder()
        .endpoint(DEFAULT_ENDPOINT)
        .build()
        .expect("default endpoint is valid");

    assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
    assert_eq!(config.request_timeout(), None);
    assert!(config.clear_on_dispatch());
    assert!(!config.surface_errors());
    assert!(config.ansi());
}

#[test]
fn default_config_matches_builder_defaults() {
    let built = ClientConfig::builder().endpoint(DEFAULT_ENDPOINT).build().unwrap();
    let default = ClientConfig::default();

    assert_eq!(built.endpoint(), default.endpoint());
    assert_eq!(built.request_timeout_secs(), default.request_timeout_secs());
    assert_eq!(built.clear_on_dispatch(), default.clear_on_dispatch());
}

#[test]
fn options_can_be_set_before_or_after_endpoint() {
    let config = ClientConfig::builder()
        .surface_errors(true)
        .endpoint("https://search.example.com/api/search")
        .request_timeout_secs(Some(5))
        .clear_on_dispatch(false)
        .ansi(false)
        .user_agent("tests/1.0")
        .build()
        .unwrap();

    assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    assert!(config.surface_errors());
    assert!(!config.clear_on_dispatch());
    assert!(!config.ansi());
    assert_eq!(config.user_agent(), "tests/1.0");
}

#[test]
fn endpoint_is_normalized() {
    let config = ClientConfig::builder()
        .endpoint("  http://localhost:8080  ")
        .build()
        .unwrap();
    assert_eq!(config.endpoint(), "http://localhost:8080/");
}

#[test]
fn rejects_invalid_endpoints() {
    for endpoint in ["", "not a url", "/api/search", "ftp://example.com/search"] {
        let result = ClientConfig::builder().endpoint(endpoint).build();
        assert!(result.is_err(), "accepted {endpoint:?}");
    }
}

#[test]
fn rejects_zero_timeout_and_empty_user_agent() {
    assert!(
        ClientConfig::builder()
            .endpoint(DEFAULT_ENDPOINT)
            .request_timeout_secs(Some(0))
            .build()
            .is_err()
    );
    assert!(
        ClientConfig::builder()
            .endpoint(DEFAULT_ENDPOINT)
            .user_agent("  ")
            .build()
            .is_err()
    );
}

#[test]
fn config_round_trips_through_json() {
    let config = ClientConfig::builder()
        .endpoint(DEFAULT_ENDPOINT)
        .request_timeout_secs(Some(3))
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let restored: ClientConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.endpoint(), config.endpoint());
    assert_eq!(restored.request_timeout_secs(), Some(3));
}
