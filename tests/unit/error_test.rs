//! Tests for error types

use parking_garage::core::ParkingError;

#[test]
fn test_lot_full_error() {
    let err = ParkingError::LotFull("Lot A".to_string());
    assert_eq!(format!("{}", err), "lot full: Lot A");
}

#[test]
fn test_car_not_found_error() {
    let err = ParkingError::CarNotFound("KA01".to_string());
    assert_eq!(format!("{}", err), "car not found: KA01");
}

#[test]
fn test_manager_errors() {
    assert_eq!(ParkingError::AllLotsFull.to_string(), "all lots are full");
    assert_eq!(
        ParkingError::NotLargeVehicle("S1".to_string()).to_string(),
        "not a large vehicle: S1"
    );
    assert_eq!(
        ParkingError::NoSpaceForLargeVehicle.to_string(),
        "no lot has space for large vehicle"
    );
}

#[test]
fn test_no_available_slot_error() {
    let err = ParkingError::NoAvailableSlot("Lot A".to_string());
    assert_eq!(err.to_string(), "no available slot for handicap driver in Lot A");
}

#[test]
fn test_invalid_config_error() {
    let err = ParkingError::InvalidConfig("at least one lot must be defined".to_string());
    assert_eq!(err.to_string(), "config invalid: at least one lot must be defined");
}
