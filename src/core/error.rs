//! Error types for parking operations.

use thiserror::Error;

/// Errors produced by lots, attendants and the manager.
///
/// Every condition is reported immediately to the caller; none is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkingError {
    /// Park attempted on a lot with no empty slot.
    #[error("lot full: {0}")]
    LotFull(String),
    /// Unpark or lookup referenced a car that is not parked.
    #[error("car not found: {0}")]
    CarNotFound(String),
    /// Even-distribution park attempted while every managed lot is full.
    #[error("all lots are full")]
    AllLotsFull,
    /// Large-vehicle park invoked for a car that is not large.
    #[error("not a large vehicle: {0}")]
    NotLargeVehicle(String),
    /// No managed lot has room for a large vehicle.
    #[error("no lot has space for large vehicle")]
    NoSpaceForLargeVehicle,
    /// Handicap strategy found no empty slot.
    #[error("no available slot for handicap driver in {0}")]
    NoAvailableSlot(String),
    /// Manager lookup by name failed.
    #[error("lot not found: {0}")]
    LotNotFound(String),
    /// Configuration failed validation.
    #[error("config invalid: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
