//! Lot and garage configuration structures.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_RATE_PER_MINUTE;

const fn default_rate_per_minute() -> u64 {
    DEFAULT_RATE_PER_MINUTE
}

/// Lot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotConfig {
    /// Lot name, unique within a garage.
    pub name: String,
    /// Number of slots.
    pub capacity: usize,
    /// Fee per billed minute.
    #[serde(default = "default_rate_per_minute")]
    pub rate_per_minute: u64,
}

/// Root garage configuration; lot order is the manager's tie-break order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageConfig {
    /// Lots in manager order.
    pub lots: Vec<LotConfig>,
}

impl LotConfig {
    /// Lot with the default rate.
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity,
            rate_per_minute: DEFAULT_RATE_PER_MINUTE,
        }
    }

    /// Validate lot configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.rate_per_minute == 0 {
            return Err("rate_per_minute must be greater than 0".into());
        }
        Ok(())
    }
}

impl GarageConfig {
    /// Validate all lots and ensure at least one lot exists with unique names.
    pub fn validate(&self) -> Result<(), String> {
        if self.lots.is_empty() {
            return Err("at least one lot must be defined".into());
        }
        let mut seen = HashSet::new();
        for lot in &self.lots {
            lot.validate()
                .map_err(|e| format!("lot `{}` invalid: {e}", lot.name))?;
            if !seen.insert(lot.name.as_str()) {
                return Err(format!("lot `{}` defined twice", lot.name));
            }
        }
        Ok(())
    }

    /// Parse garage configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
