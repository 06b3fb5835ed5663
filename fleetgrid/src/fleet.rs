//! The set of ships a player places, and the setup phase that places them.
//!
//! [`Fleet`] collects ships and makes sure each can be told apart on the grid.
//! [`Fleet::standard`] builds the usual five ships. [`FleetSetup`] then walks the fleet
//! in order, placing one ship at a time onto a [`GridManager`][crate::board::GridManager].

use crate::{
    board::{Dimensions, WATER},
    ships::Ship,
};

pub use self::{
    errors::{AddShipError, CannotAddReason},
    setup::FleetSetup,
};

mod errors;
mod setup;

/// Name, length and symbol of each ship in the standard fleet, in placement order.
pub const STANDARD_SHIPS: [(&str, usize, char); 5] = [
    ("Carrier", 5, 'A'),
    ("Battleship", 4, 'B'),
    ("Destroyer", 3, 'C'),
    ("Submarine", 2, 'D'),
    ("Patrol Boat", 1, 'E'),
];

/// An ordered collection of unplaced ships with distinct symbols.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Construct an empty fleet.
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    /// Construct the standard fleet of five ships.
    pub fn standard() -> Self {
        let mut fleet = Self::new();
        for &(name, len, symbol) in STANDARD_SHIPS.iter() {
            // The standard symbols are distinct and none of them is water.
            fleet
                .add_ship(Ship::new(name, len, symbol))
                .expect("standard fleet symbols are distinct");
        }
        fleet
    }

    /// Attempts to add a ship to the fleet. If its symbol is the water marker or is
    /// already used by another ship in the fleet, returns the ship inside the error.
    pub fn add_ship(&mut self, ship: Ship) -> Result<&Ship, AddShipError> {
        if ship.symbol() == WATER {
            Err(AddShipError::new(CannotAddReason::WaterSymbol, ship))
        } else if self.ships.iter().any(|other| other.symbol() == ship.symbol()) {
            Err(AddShipError::new(CannotAddReason::DuplicateSymbol, ship))
        } else {
            self.ships.push(ship);
            Ok(&self.ships[self.ships.len() - 1])
        }
    }

    /// Get an iterator over the ships in the order they will be placed.
    pub fn iter(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    /// Number of ships in the fleet.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Returns true if the fleet has no ships.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Total number of cells the fleet covers once placed.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(Ship::len).sum()
    }

    /// Begin placing this fleet onto a new grid with the given dimensions.
    pub fn into_setup<D: Dimensions>(self, dim: D) -> FleetSetup<D> {
        FleetSetup::new(self, dim)
    }

    /// Consume the fleet, returning its ships in order.
    pub(crate) fn into_ships(self) -> Vec<Ship> {
        self.ships
    }
}
