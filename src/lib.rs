//! # Parking Garage
//!
//! Slot allocation, attendants and cross-lot queries for parking garages made
//! of one or more fixed-capacity lots.
//!
//! ## Model
//!
//! - **Lot**: an ordered run of slots numbered from 1, rows cycling A..E.
//!   Cars always take the lowest-numbered empty slot (first-fit).
//! - **Attendant**: a named worker bound to one lot who stamps the slots they fill.
//! - **Manager**: owns several lots, spreads cars to the lot with the most free
//!   slots, and answers queries across all of them.
//! - **Observers**: synchronous callbacks told when a lot turns a car away
//!   (`FULL`) or frees a slot (`AVAILABLE`).
//!
//! Everything is single-threaded and in memory. Callers that share a lot
//! across threads must serialize access themselves.
//!
//! ```rust
//! use parking_garage::core::{Car, CarFilter, ParkingLot, ParkingManager, VehicleSize};
//!
//! let mut manager = ParkingManager::with_lots([
//!     ParkingLot::new("North", 2),
//!     ParkingLot::new("South", 3),
//! ]);
//!
//! let placement = manager.park_evenly(Car::new("KA01AB1234").with_color("Blue")).unwrap();
//! assert_eq!(placement.lot, "South");
//! assert_eq!(placement.slot, 1);
//!
//! let big = Car::new("KA02TR0001").with_size(VehicleSize::Large);
//! manager.park_large_vehicle(big).unwrap();
//!
//! let blue = manager.find_cars(&CarFilter::new().color("Blue"));
//! assert_eq!(blue.len(), 1);
//! ```
//!
//! Garages can also be built from JSON configuration, see
//! [`builders::build_manager_from_json`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Parking domain: lots, slots, attendants, manager and observers.
pub mod core;
/// Configuration models for lots and garages.
pub mod config;
/// Builders to construct lots and managers from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;
