//! A single parking lot: first-fit allocation, charging and observers.

use std::fmt;

use tracing::{debug, warn};

use super::{Car, LotEvent, LotObserver, ParkingError, Row, Slot};
use crate::util::clock::{Clock, SystemClock};

/// Fee charged per started minute when no rate is configured.
pub const DEFAULT_RATE_PER_MINUTE: u64 = 2;

const MS_PER_MINUTE: u128 = 60_000;

/// Snapshot of an occupied slot returned by listing queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkedCar {
    /// Copy of the parked car.
    pub car: Car,
    /// Attendant who parked it, if any.
    pub attendant: Option<String>,
    /// Row of the slot.
    pub row: Row,
    /// Slot number.
    pub slot: usize,
}

impl ParkedCar {
    fn from_slot(slot: &Slot) -> Option<Self> {
        slot.car().map(|car| Self {
            car: car.clone(),
            attendant: slot.attendant().map(str::to_owned),
            row: slot.row(),
            slot: slot.number(),
        })
    }
}

/// Result of a charged unpark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charge {
    /// Slot the car was released from.
    pub slot: usize,
    /// Billed minutes, at least one.
    pub minutes: u64,
    /// Amount due.
    pub fee: u64,
}

/// Fixed-capacity lot of numbered slots.
///
/// Slots are created once, numbered from 1, and never added or removed.
/// Allocation is first-fit: a car always lands in the lowest-numbered empty
/// slot. A failed park leaves the lot untouched.
pub struct ParkingLot {
    name: String,
    slots: Vec<Slot>,
    observers: Vec<Box<dyn LotObserver>>,
    clock: Box<dyn Clock>,
    rate_per_minute: u64,
}

impl fmt::Debug for ParkingLot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParkingLot")
            .field("name", &self.name)
            .field("capacity", &self.slots.len())
            .field("free", &self.free_slots())
            .field("observers", &self.observers.len())
            .field("rate_per_minute", &self.rate_per_minute)
            .finish()
    }
}

impl ParkingLot {
    /// Create a lot with `capacity` empty slots, rows cycling A through E.
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        let slots = (0..capacity)
            .map(|i| Slot::new(i + 1, Row::for_index(i)))
            .collect();
        Self {
            name: name.into(),
            slots,
            observers: Vec::new(),
            clock: Box::new(SystemClock),
            rate_per_minute: DEFAULT_RATE_PER_MINUTE,
        }
    }

    /// Replace the time source used for parking timestamps and fees.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Override the per-minute fee.
    #[must_use]
    pub const fn with_rate_per_minute(mut self, rate: u64) -> Self {
        self.rate_per_minute = rate;
        self
    }

    /// Lot name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// All slots in number order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Count of empty slots.
    pub fn free_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_empty()).count()
    }

    /// Count of occupied slots.
    pub fn occupied(&self) -> usize {
        self.capacity() - self.free_slots()
    }

    /// Per-minute fee.
    pub const fn rate_per_minute(&self) -> u64 {
        self.rate_per_minute
    }

    /// Current time according to the lot's clock.
    pub fn now_ms(&self) -> u128 {
        self.clock.now_ms()
    }

    /// True when no slot is empty. A zero-capacity lot is always full.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| !s.is_empty())
    }

    /// Park a car in the lowest-numbered empty slot.
    pub fn park(&mut self, car: Car) -> Result<usize, ParkingError> {
        self.park_in_first_free(car, None)
    }

    /// Park a car and record which attendant parked it.
    pub fn park_with_attendant(
        &mut self,
        car: Car,
        attendant: impl Into<String>,
    ) -> Result<usize, ParkingError> {
        self.park_in_first_free(car, Some(attendant.into()))
    }

    /// Park a car, notifying observers with [`LotEvent::Full`] on failure.
    pub fn park_with_notification(&mut self, car: Car) -> Result<usize, ParkingError> {
        let result = self.park(car);
        if result.is_err() {
            self.notify_observers(LotEvent::Full);
        }
        result
    }

    /// Release a car, returning the slot it occupied.
    pub fn unpark(&mut self, car_id: &str) -> Result<usize, ParkingError> {
        let slot = self.slot_of_mut(car_id)?;
        slot.vacate();
        let number = slot.number();
        debug!(lot = %self.name, car = car_id, slot = number, "car unparked");
        Ok(number)
    }

    /// Release a car, notifying observers with [`LotEvent::Available`].
    pub fn unpark_with_notification(&mut self, car_id: &str) -> Result<usize, ParkingError> {
        let number = self.unpark(car_id)?;
        self.notify_observers(LotEvent::Available);
        Ok(number)
    }

    /// Release a car and bill it for the elapsed whole minutes, minimum one.
    pub fn unpark_and_charge(&mut self, car_id: &str) -> Result<Charge, ParkingError> {
        let now = self.clock.now_ms();
        let rate = self.rate_per_minute;
        let slot = self.slot_of_mut(car_id)?;
        let parked_at = slot.car().and_then(|c| c.parked_at_ms).unwrap_or(now);
        let elapsed =
            u64::try_from(now.saturating_sub(parked_at) / MS_PER_MINUTE).unwrap_or(u64::MAX);
        let minutes = elapsed.max(1);
        let fee = minutes.saturating_mul(rate);

        slot.vacate();
        let number = slot.number();
        debug!(lot = %self.name, car = car_id, slot = number, minutes, fee, "car charged");
        self.notify_observers(LotEvent::Available);
        Ok(Charge {
            slot: number,
            minutes,
            fee,
        })
    }

    /// Find the slot holding a car.
    pub fn find_car(&self, car_id: &str) -> Result<&Slot, ParkingError> {
        self.slots
            .iter()
            .find(|s| s.holds(car_id))
            .ok_or_else(|| ParkingError::CarNotFound(car_id.to_owned()))
    }

    /// Register an observer; observers fire in registration order.
    pub fn add_observer(&mut self, observer: impl LotObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Deliver an event to every observer, synchronously.
    pub fn notify_observers(&self, event: LotEvent) {
        for observer in &self.observers {
            observer.notify(&self.name, event);
        }
    }

    /// Snapshot of every occupied slot in slot-number order.
    pub fn get_all_parked_cars(&self) -> Vec<ParkedCar> {
        self.parked_cars().collect()
    }

    pub(crate) fn parked_cars(&self) -> impl Iterator<Item = ParkedCar> + '_ {
        self.slots.iter().filter_map(ParkedCar::from_slot)
    }

    fn park_in_first_free(
        &mut self,
        mut car: Car,
        attendant: Option<String>,
    ) -> Result<usize, ParkingError> {
        let now = self.clock.now_ms();
        let Some(slot) = self.slots.iter_mut().find(|s| s.is_empty()) else {
            warn!(lot = %self.name, car = %car.id, "lot full");
            return Err(ParkingError::LotFull(self.name.clone()));
        };
        car.parked_at_ms = Some(now);
        debug!(lot = %self.name, car = %car.id, slot = slot.number(), "car parked");
        slot.occupy(car, attendant);
        Ok(slot.number())
    }

    fn slot_of_mut(&mut self, car_id: &str) -> Result<&mut Slot, ParkingError> {
        self.slots
            .iter_mut()
            .find(|s| s.holds(car_id))
            .ok_or_else(|| ParkingError::CarNotFound(car_id.to_owned()))
    }
}
