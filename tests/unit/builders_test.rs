//! Tests for builder modules

use parking_garage::builders::{build_lot, build_manager, build_manager_from_json};
use parking_garage::config::{GarageConfig, LotConfig};
use parking_garage::core::ParkingError;

#[test]
fn test_build_lot_from_config() {
    let cfg = LotConfig {
        name: "North".to_string(),
        capacity: 4,
        rate_per_minute: 3,
    };

    let lot = build_lot(&cfg);
    assert_eq!(lot.name(), "North");
    assert_eq!(lot.capacity(), 4);
    assert_eq!(lot.free_slots(), 4);
    assert_eq!(lot.rate_per_minute(), 3);
}

#[test]
fn test_build_manager_keeps_order() {
    let cfg = GarageConfig {
        lots: vec![LotConfig::new("North", 2), LotConfig::new("South", 5)],
    };

    let manager = build_manager(&cfg).unwrap();
    let names: Vec<_> = manager.lots().iter().map(|l| l.name().to_string()).collect();
    assert_eq!(names, vec!["North", "South"]);
    assert_eq!(manager.total_free_slots(), 7);
}

#[test]
fn test_build_manager_rejects_invalid_config() {
    let cfg = GarageConfig { lots: Vec::new() };
    assert!(matches!(build_manager(&cfg), Err(ParkingError::InvalidConfig(_))));
}

#[test]
fn test_build_manager_from_json() {
    let manager = build_manager_from_json(r#"{ "lots": [{ "name": "North", "capacity": 1 }] }"#)
        .unwrap();
    assert_eq!(manager.lots().len(), 1);

    let err = build_manager_from_json(r#"{ "lots": [] }"#).unwrap_err();
    assert!(format!("{err:#}").contains("loading garage config"));
}
