//! Attendants park cars on behalf of drivers.

use tracing::info;

use super::{Car, ParkingError, ParkingLot};

/// Named attendant working a single lot.
///
/// The attendant borrows the lot for its lifetime and never owns it.
#[derive(Debug)]
pub struct Attendant<'a> {
    name: String,
    lot: &'a mut ParkingLot,
}

impl<'a> Attendant<'a> {
    /// Bind an attendant to a lot.
    pub fn new(name: impl Into<String>, lot: &'a mut ParkingLot) -> Self {
        Self {
            name: name.into(),
            lot,
        }
    }

    /// Attendant name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lot the attendant works.
    pub fn lot(&self) -> &ParkingLot {
        self.lot
    }

    /// Park a car first-fit, stamping the slot with this attendant's name.
    pub fn park_for_driver(&mut self, car: Car) -> Result<usize, ParkingError> {
        info!(
            attendant = %self.name,
            car = %car.id,
            lot = %self.lot.name(),
            "attendant parking car"
        );
        self.lot.park_with_attendant(car, self.name.clone())
    }

    /// Park with the driver-specific strategy.
    ///
    /// Handicap drivers get the nearest slot, which is the lowest-numbered
    /// empty one and therefore the same slot first-fit picks. Everyone else
    /// goes through [`Attendant::park_for_driver`].
    pub fn park_with_strategy(&mut self, car: Car) -> Result<usize, ParkingError> {
        if !car.is_handicap {
            return self.park_for_driver(car);
        }
        if self.lot.is_full() {
            return Err(ParkingError::NoAvailableSlot(self.lot.name().to_owned()));
        }
        // TODO: confirm with product whether handicap drivers should get reserved rows.
        self.lot.park(car)
    }
}
