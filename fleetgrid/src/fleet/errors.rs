use std::fmt::{self, Debug};

use thiserror::Error;

use crate::ships::Ship;

/// Reason why a ship could not join a fleet.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotAddReason {
    /// Another ship in the fleet already uses the symbol.
    #[error("the symbol is already used by another ship")]
    DuplicateSymbol,
    /// The symbol is the one used to draw water.
    #[error("the symbol is reserved for water")]
    WaterSymbol,
}

/// Error returned when trying to add a ship that could not be told apart on the grid.
#[derive(Error)]
#[error("could not add ship with symbol {symbol:?}: {reason}")]
pub struct AddShipError {
    /// Why the ship was refused.
    reason: CannotAddReason,
    /// Symbol of the refused ship.
    symbol: char,
    /// The ship that was not added.
    ship: Ship,
}

impl AddShipError {
    /// Create an [`AddShipError`] for the given ship.
    pub(super) fn new(reason: CannotAddReason, ship: Ship) -> Self {
        Self {
            reason,
            symbol: ship.symbol(),
            ship,
        }
    }

    /// Get the reason the ship was refused.
    pub fn reason(&self) -> CannotAddReason {
        self.reason
    }

    /// Extract the refused ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

impl Debug for AddShipError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
