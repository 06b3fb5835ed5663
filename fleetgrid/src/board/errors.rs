//! Errors used by the [`GridManager`][crate::board::GridManager].

use std::fmt::{self, Debug};

use thiserror::Error;

/// Reason why a ship could not be placed on a given set of cells.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more of the cells lay outside of the grid.
    #[error("the requested position is out of bounds")]
    OutOfBounds,
    /// One or more of the cells was already occupied by another ship.
    #[error("the requested position overlaps another ship")]
    Overlapping,
    /// Some cells lay outside of the grid and others were already occupied.
    #[error("the requested position is out of bounds and overlaps another ship")]
    OutOfBoundsAndOverlapping,
    /// The number of cells did not match the length of the ship.
    #[error("the number of cells does not match the length of the ship")]
    LengthMismatch,
    /// There was no ship left to place.
    #[error("every ship was already placed")]
    AlreadyPlaced,
    /// No position on the grid can hold the ship any more.
    #[error("there is no room left on the grid for the ship")]
    NoSpace,
}

impl CannotPlaceReason {
    /// Returns true if the reason includes cells outside of the grid.
    pub fn out_of_bounds(self) -> bool {
        match self {
            CannotPlaceReason::OutOfBounds | CannotPlaceReason::OutOfBoundsAndOverlapping => true,
            _ => false,
        }
    }

    /// Returns true if the reason includes cells occupied by another ship.
    pub fn overlapping(self) -> bool {
        match self {
            CannotPlaceReason::Overlapping | CannotPlaceReason::OutOfBoundsAndOverlapping => true,
            _ => false,
        }
    }
}

/// Error caused when attempting to place a ship in an invalid position. Hands back
/// whatever was given up for the placement so the caller can retry with it.
#[derive(Error)]
#[error("could not place ship: {reason}")]
pub struct PlaceError<P> {
    #[source]
    reason: CannotPlaceReason,
    placement: P,
}

impl<P> Debug for PlaceError<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<P> PlaceError<P> {
    /// Construct a placement error from a reason and the rejected placement.
    pub(crate) fn new(reason: CannotPlaceReason, placement: P) -> Self {
        Self { reason, placement }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the placement that was rejected.
    pub fn placement(&self) -> &P {
        &self.placement
    }

    /// Extract the rejected placement from this error.
    pub fn into_placement(self) -> P {
        self.placement
    }
}
