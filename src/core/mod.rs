//! Parking domain: cars, slots, lots, attendants and the multi-lot manager.

pub mod attendant;
pub mod car;
pub mod error;
pub mod lot;
pub mod manager;
pub mod observer;
pub mod slot;

pub use attendant::Attendant;
pub use car::{Car, VehicleSize};
pub use error::{AppResult, ParkingError};
pub use lot::{Charge, ParkedCar, ParkingLot, DEFAULT_RATE_PER_MINUTE};
pub use manager::{CarFilter, ParkingManager, Placement};
pub use observer::{LotEvent, LotObserver, RecordedEvent, RecordingObserver, TracingObserver};
pub use slot::{Row, Slot};
