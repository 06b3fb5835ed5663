//! Types used for defining ships and where they sit.
use crate::board::Coordinate;

pub use self::linear::{Orientation, ParseOrientationError};

mod linear;

/// A ship in the fleet: a fixed name, length and display symbol, plus the cells it
/// occupies once it has been placed.
///
/// The cells are assigned exactly once, by
/// [`GridManager::place_ship`][crate::board::GridManager::place_ship] after the placement
/// has been validated. An unplaced ship has no cells.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    /// Name shown to the player.
    name: String,
    /// Number of cells the ship occupies.
    len: usize,
    /// Character the ship is drawn with on the grid.
    symbol: char,
    /// Cells occupied by the ship, empty until placed.
    cells: Vec<Coordinate>,
}

impl Ship {
    /// Construct an unplaced ship. Panics if len is 0.
    pub fn new(name: impl Into<String>, len: usize, symbol: char) -> Self {
        assert!(len > 0, "ship length must be nonzero");
        Self {
            name: name.into(),
            len,
            symbol,
            cells: Vec::new(),
        }
    }

    /// Get the name of this ship.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the length of this ship.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Get the symbol this ship is drawn with.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Returns true if this ship has been placed.
    pub fn placed(&self) -> bool {
        !self.cells.is_empty()
    }

    /// The cells this ship occupies, empty if it has not been placed.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Get the cells this ship would occupy if placed at `start` with the given
    /// orientation. Does not account for the grid at all.
    pub fn project(&self, start: Coordinate, orientation: Orientation) -> Vec<Coordinate> {
        orientation.project(start, self.len)
    }

    /// Record the final placement of this ship.
    pub(crate) fn assign_cells(&mut self, cells: Vec<Coordinate>) {
        debug_assert_eq!(cells.len(), self.len);
        debug_assert!(!self.placed(), "{} was already placed", self.name);
        self.cells = cells;
    }
}
