//! Build lots and managers from configuration.

use anyhow::Context;

use crate::config::{GarageConfig, LotConfig};
use crate::core::{AppResult, ParkingError, ParkingLot, ParkingManager};

/// Build an empty lot from its configuration.
pub fn build_lot(cfg: &LotConfig) -> ParkingLot {
    ParkingLot::new(cfg.name.clone(), cfg.capacity).with_rate_per_minute(cfg.rate_per_minute)
}

/// Build a manager over every configured lot, in configuration order.
pub fn build_manager(cfg: &GarageConfig) -> Result<ParkingManager, ParkingError> {
    cfg.validate().map_err(ParkingError::InvalidConfig)?;
    let manager = ParkingManager::with_lots(cfg.lots.iter().map(build_lot));
    tracing::info!(lots = manager.lots().len(), free = manager.total_free_slots(), "garage built");
    Ok(manager)
}

/// Parse JSON configuration and build the manager.
pub fn build_manager_from_json(input: &str) -> AppResult<ParkingManager> {
    let cfg = GarageConfig::from_json_str(input)
        .map_err(anyhow::Error::msg)
        .context("loading garage config")?;
    Ok(build_manager(&cfg)?)
}
