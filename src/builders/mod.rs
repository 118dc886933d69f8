//! Builders to construct lots and managers from configuration.

pub mod garage_builder;

pub use garage_builder::{build_lot, build_manager, build_manager_from_json};
