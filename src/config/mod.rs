//! Configuration models for lots and the garage.

pub mod garage;

pub use garage::{GarageConfig, LotConfig};
