//! Tests for the configuration system

use parceldesk::Config;

#[test]
fn config_loads_from_default_toml() {
    let config = Config::load(None).expect("failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.delivery.business_start_hour, 10);
    assert_eq!(config.delivery.business_end_hour, 17);
    assert!(config.delivery.seed_demo);
}

#[test]
fn default_config_validates() {
    let config = Config::load(None).expect("failed to load config");
    assert!(config.validate().is_ok());
}

#[test]
fn inverted_business_hours_fail_validation() {
    let mut config = Config::load(None).expect("failed to load config");
    config.delivery.business_start_hour = 17;
    config.delivery.business_end_hour = 10;
    let err = config.validate().unwrap_err();
    assert!(err.contains("business_start_hour"));

    config.delivery.business_start_hour = 10;
    config.delivery.business_end_hour = 25;
    assert!(config.validate().is_err());
}
