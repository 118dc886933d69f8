//! Car records and vehicle sizes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical size class of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleSize {
    /// Fits any slot.
    #[default]
    Small,
    /// Needs a lot chosen by the large-vehicle heuristic.
    Large,
}

impl fmt::Display for VehicleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small => f.write_str("small"),
            Self::Large => f.write_str("large"),
        }
    }
}

/// A car as seen by the garage.
///
/// The caller builds the record; the lot stamps `parked_at_ms` when the car
/// takes a slot. Snapshots returned by queries are clones.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Car {
    /// Registration number, unique across the garage.
    pub id: String,
    /// Paint color, compared case-sensitively.
    pub color: String,
    /// Manufacturer, compared case-sensitively.
    pub make: String,
    /// Size class.
    pub size: VehicleSize,
    /// Whether the driver holds a handicap permit.
    pub is_handicap: bool,
    /// Time the car was parked, in milliseconds since epoch.
    pub parked_at_ms: Option<u128>,
}

impl Car {
    /// Create a small, non-handicap car with empty attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the make.
    #[must_use]
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = make.into();
        self
    }

    /// Set the size class.
    #[must_use]
    pub const fn with_size(mut self, size: VehicleSize) -> Self {
        self.size = size;
        self
    }

    /// Mark the driver as holding a handicap permit.
    #[must_use]
    pub const fn with_handicap(mut self, is_handicap: bool) -> Self {
        self.is_handicap = is_handicap;
        self
    }

    /// True when the car is in the large size class.
    pub fn is_large(&self) -> bool {
        self.size == VehicleSize::Large
    }
}
