//! Tests for configuration validation

use parking_garage::config::{GarageConfig, LotConfig};

#[test]
fn test_lot_config_validation() {
    let valid = LotConfig::new("North", 10);
    assert!(valid.validate().is_ok());
    assert_eq!(valid.rate_per_minute, 2);
}

#[test]
fn test_lot_config_zero_capacity_allowed() {
    assert!(LotConfig::new("Closed", 0).validate().is_ok());
}

#[test]
fn test_lot_config_invalid_name() {
    assert!(LotConfig::new("  ", 10).validate().is_err());
}

#[test]
fn test_lot_config_invalid_rate() {
    let invalid = LotConfig {
        name: "North".to_string(),
        capacity: 10,
        rate_per_minute: 0,
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_garage_config_empty_lots() {
    let config = GarageConfig { lots: Vec::new() };
    assert!(config.validate().is_err());
}

#[test]
fn test_garage_config_duplicate_names() {
    let config = GarageConfig {
        lots: vec![LotConfig::new("North", 1), LotConfig::new("North", 2)],
    };
    let err = config.validate().unwrap_err();
    assert!(err.contains("defined twice"));
}

#[test]
fn test_garage_config_from_json() {
    let json = r#"{
        "lots": [
            { "name": "North", "capacity": 5 },
            { "name": "South", "capacity": 3, "rate_per_minute": 4 }
        ]
    }"#;

    let config = GarageConfig::from_json_str(json).unwrap();
    assert_eq!(config.lots.len(), 2);
    assert_eq!(config.lots[0].rate_per_minute, 2);
    assert_eq!(config.lots[1].rate_per_minute, 4);
}

#[test]
fn test_garage_config_from_bad_json() {
    let err = GarageConfig::from_json_str("{ not json").unwrap_err();
    assert!(err.starts_with("parse error"));
}
