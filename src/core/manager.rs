//! Multi-lot coordination: distribution heuristics and cross-lot queries.

use std::time::Duration;

use tracing::{debug, warn};

use super::{Car, ParkedCar, ParkingError, ParkingLot, Row, VehicleSize};

/// Where the manager put a car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Name of the chosen lot.
    pub lot: String,
    /// Slot number within that lot.
    pub slot: usize,
}

/// Query over parked cars. Unset fields match everything; set fields must
/// all match (exact, case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarFilter {
    /// Required color.
    pub color: Option<String>,
    /// Required make.
    pub make: Option<String>,
    /// Required size class.
    pub size: Option<VehicleSize>,
    /// Required handicap flag; `None` leaves it unchecked.
    pub is_handicap: Option<bool>,
}

impl CarFilter {
    /// Filter matching every car.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a color.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Require a make.
    #[must_use]
    pub fn make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    /// Require a size class.
    #[must_use]
    pub const fn size(mut self, size: VehicleSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Require a handicap flag value.
    #[must_use]
    pub const fn handicap(mut self, is_handicap: bool) -> Self {
        self.is_handicap = Some(is_handicap);
        self
    }

    /// True when `car` satisfies every set field.
    pub fn matches(&self, car: &Car) -> bool {
        self.color.as_ref().is_none_or(|c| *c == car.color)
            && self.make.as_ref().is_none_or(|m| *m == car.make)
            && self.size.is_none_or(|s| s == car.size)
            && self.is_handicap.is_none_or(|h| h == car.is_handicap)
    }
}

/// Owns an ordered set of lots and places cars across them.
#[derive(Debug, Default)]
pub struct ParkingManager {
    lots: Vec<ParkingLot>,
}

impl ParkingManager {
    /// Manager with no lots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager over the given lots, in order.
    pub fn with_lots(lots: impl IntoIterator<Item = ParkingLot>) -> Self {
        Self {
            lots: lots.into_iter().collect(),
        }
    }

    /// Append a lot; it ranks after existing lots in tie-breaks.
    pub fn add_lot(&mut self, lot: ParkingLot) {
        self.lots.push(lot);
    }

    /// Managed lots in order.
    pub fn lots(&self) -> &[ParkingLot] {
        &self.lots
    }

    /// Look up a lot by name.
    pub fn lot(&self, name: &str) -> Result<&ParkingLot, ParkingError> {
        self.lots
            .iter()
            .find(|l| l.name() == name)
            .ok_or_else(|| ParkingError::LotNotFound(name.to_owned()))
    }

    /// Look up a lot by name for mutation, e.g. to bind an attendant.
    pub fn lot_mut(&mut self, name: &str) -> Result<&mut ParkingLot, ParkingError> {
        self.lots
            .iter_mut()
            .find(|l| l.name() == name)
            .ok_or_else(|| ParkingError::LotNotFound(name.to_owned()))
    }

    /// Free slots summed over every lot.
    pub fn total_free_slots(&self) -> usize {
        self.lots.iter().map(ParkingLot::free_slots).sum()
    }

    /// Park in the lot with the most free slots. The first lot wins ties.
    pub fn park_evenly(&mut self, car: Car) -> Result<Placement, ParkingError> {
        let Some(lot) = self.most_free_lot() else {
            warn!(car = %car.id, "all lots full");
            return Err(ParkingError::AllLotsFull);
        };
        let slot = lot.park(car)?;
        debug!(lot = %lot.name(), slot, "parked evenly");
        Ok(Placement {
            lot: lot.name().to_owned(),
            slot,
        })
    }

    /// Park a large vehicle using the same most-free-slots selection.
    pub fn park_large_vehicle(&mut self, car: Car) -> Result<Placement, ParkingError> {
        if !car.is_large() {
            return Err(ParkingError::NotLargeVehicle(car.id));
        }
        let Some(lot) = self.most_free_lot() else {
            warn!(car = %car.id, "no space for large vehicle");
            return Err(ParkingError::NoSpaceForLargeVehicle);
        };
        let slot = lot.park(car)?;
        debug!(lot = %lot.name(), slot, "parked large vehicle");
        Ok(Placement {
            lot: lot.name().to_owned(),
            slot,
        })
    }

    /// Copies of every parked car with exactly this color.
    pub fn find_cars_by_color(&self, color: &str) -> Vec<Car> {
        self.parked_cars()
            .filter(|p| p.car.color == color)
            .map(|p| p.car)
            .collect()
    }

    /// Every parked car matching the filter, in lot then slot order.
    pub fn find_cars(&self, filter: &CarFilter) -> Vec<ParkedCar> {
        self.parked_cars().filter(|p| filter.matches(&p.car)).collect()
    }

    /// Cars parked strictly after `now - window`, measured by each lot's clock.
    pub fn find_cars_parked_within(&self, window: Duration) -> Vec<ParkedCar> {
        let window_ms = window.as_millis();
        self.lots
            .iter()
            .flat_map(|lot| {
                let cutoff = lot.now_ms().checked_sub(window_ms);
                lot.parked_cars().filter(move |p| match (cutoff, p.car.parked_at_ms) {
                    (Some(cutoff), Some(at)) => at > cutoff,
                    (None, _) => true,
                    (Some(_), None) => false,
                })
            })
            .collect()
    }

    /// Small handicap cars parked in rows B or D.
    pub fn find_small_handicap_in_row_b_or_d(&self) -> Vec<ParkedCar> {
        self.parked_cars()
            .filter(|p| {
                p.car.size == VehicleSize::Small
                    && p.car.is_handicap
                    && matches!(p.row, Row::B | Row::D)
            })
            .collect()
    }

    fn parked_cars(&self) -> impl Iterator<Item = ParkedCar> + '_ {
        self.lots.iter().flat_map(|lot| lot.parked_cars())
    }

    /// Lot with strictly the most free slots, or `None` if all are full.
    fn most_free_lot(&mut self) -> Option<&mut ParkingLot> {
        let mut best: Option<(usize, usize)> = None;
        for (index, lot) in self.lots.iter().enumerate() {
            let free = lot.free_slots();
            if free > best.map_or(0, |(_, max)| max) {
                best = Some((index, free));
            }
        }
        best.map(|(index, _)| &mut self.lots[index])
    }
}
