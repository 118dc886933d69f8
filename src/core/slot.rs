//! Numbered slots and the row layout.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Car;

/// Row letter assigned to a slot, cycling A through E by slot position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Row {
    /// Row A.
    A,
    /// Row B.
    B,
    /// Row C.
    C,
    /// Row D.
    D,
    /// Row E.
    E,
}

impl Row {
    /// Rows in assignment order.
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    /// Row for a zero-based slot index.
    pub const fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        };
        f.write_str(letter)
    }
}

/// A single parking space holding at most one car.
///
/// Emptiness is derived from the occupant, so it cannot disagree with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    number: usize,
    row: Row,
    occupant: Option<Car>,
    attendant: Option<String>,
}

impl Slot {
    pub(crate) const fn new(number: usize, row: Row) -> Self {
        Self {
            number,
            row,
            occupant: None,
            attendant: None,
        }
    }

    /// One-based slot number.
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Row the slot sits in.
    pub const fn row(&self) -> Row {
        self.row
    }

    /// Car currently in the slot.
    pub const fn car(&self) -> Option<&Car> {
        self.occupant.as_ref()
    }

    /// Attendant who parked the current car, if any.
    pub fn attendant(&self) -> Option<&str> {
        self.attendant.as_deref()
    }

    /// True when no car occupies the slot.
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// True when the slot holds the car with this id.
    pub(crate) fn holds(&self, car_id: &str) -> bool {
        self.occupant.as_ref().is_some_and(|car| car.id == car_id)
    }

    pub(crate) fn occupy(&mut self, car: Car, attendant: Option<String>) {
        self.occupant = Some(car);
        self.attendant = attendant;
    }

    pub(crate) fn vacate(&mut self) -> Option<Car> {
        self.attendant = None;
        self.occupant.take()
    }
}
