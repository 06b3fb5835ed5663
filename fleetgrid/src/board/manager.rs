//! Implements validation and commitment of ship placements.
use log::{debug, trace};

use crate::{
    board::{
        grid::{Grid, Marker},
        CannotPlaceReason, Coordinate, Dimensions, PlaceError, RectDimensions,
    },
    ships::Ship,
};

/// Outcome of checking a candidate placement against the current grid.
///
/// Every candidate cell is checked, so the result lists all violating cells rather than
/// only the first one found. A cell outside of the grid is only reported as out of
/// bounds, since no ship can occupy it.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PlacementCheck {
    /// Candidate cells that fall outside of the grid.
    out_of_bounds: Vec<Coordinate>,
    /// Candidate cells already occupied by a placed ship.
    overlapping: Vec<Coordinate>,
}

impl PlacementCheck {
    /// Returns true if the placement may be committed.
    pub fn is_valid(&self) -> bool {
        !(self.out_of_bounds() || self.overlapping())
    }

    /// Returns true if any candidate cell lies outside of the grid.
    pub fn out_of_bounds(&self) -> bool {
        !self.out_of_bounds.is_empty()
    }

    /// Returns true if any candidate cell is already occupied.
    pub fn overlapping(&self) -> bool {
        !self.overlapping.is_empty()
    }

    /// The candidate cells that lie outside of the grid, in candidate order.
    pub fn out_of_bounds_cells(&self) -> &[Coordinate] {
        &self.out_of_bounds
    }

    /// The candidate cells that are already occupied, in candidate order.
    pub fn overlapping_cells(&self) -> &[Coordinate] {
        &self.overlapping
    }

    /// Get the reason this placement would be refused, or `None` if it is valid.
    pub fn reason(&self) -> Option<CannotPlaceReason> {
        match (self.out_of_bounds(), self.overlapping()) {
            (true, true) => Some(CannotPlaceReason::OutOfBoundsAndOverlapping),
            (true, false) => Some(CannotPlaceReason::OutOfBounds),
            (false, true) => Some(CannotPlaceReason::Overlapping),
            (false, false) => None,
        }
    }
}

/// Owns the grid and the ships placed on it, and enforces the placement rules.
///
/// The grid only changes through [`GridManager::place_ship`], which checks a placement
/// and commits it within the same exclusive borrow.
#[derive(Debug)]
pub struct GridManager<D: Dimensions = RectDimensions> {
    /// Grid of cells occupied by ships.
    pub(super) grid: Grid<D>,

    /// Ships that were placed, in the order they were placed.
    ships: Vec<Ship>,
}

impl<D: Dimensions> GridManager<D> {
    /// Construct a new grid manager with the given [`Dimensions`], with every cell set to
    /// water.
    pub fn new(dim: D) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
        }
    }

    /// Get the [`Dimensions`] of this grid.
    pub fn dimensions(&self) -> &D {
        &self.grid.dim
    }

    /// Get the marker at the given coordinate. Returns `None` if the coordinate is out of
    /// bounds.
    pub fn get(&self, coord: Coordinate) -> Option<Marker> {
        self.grid.get(coord).copied()
    }

    /// Get the ships placed so far, in the order they were placed.
    pub fn placed_ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Find the placed ship drawn with the given symbol, if any.
    pub fn get_ship(&self, symbol: char) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.symbol() == symbol)
    }

    /// Check whether the given candidate cells could hold a ship right now, without
    /// modifying the grid.
    pub fn check_placement(&self, cells: &[Coordinate]) -> PlacementCheck {
        let mut check = PlacementCheck::default();
        for &coord in cells {
            if !self.grid.dim.contains(&coord) {
                trace!("cell {} is outside of {:?}", coord, self.grid.dim);
                check.out_of_bounds.push(coord);
            } else if !self.grid[coord].is_water() {
                trace!("cell {} is already occupied by {}", coord, self.grid[coord]);
                check.overlapping.push(coord);
            }
        }
        check
    }

    /// Attempts to place the ship on the given cells. If the cells do not match the
    /// ship's length, or any of them is out of bounds or occupied, returns `Err` with the
    /// reason and the ship so it can be placed again. Otherwise commits the placement and
    /// returns the placed ship.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        cells: Vec<Coordinate>,
    ) -> Result<&Ship, PlaceError<Ship>> {
        debug!("attempting to place {} on {:?}", ship.name(), cells);
        if cells.len() != ship.len() {
            return Err(PlaceError::new(CannotPlaceReason::LengthMismatch, ship));
        }
        if let Some(reason) = self.check_placement(&cells).reason() {
            debug!("rejected placement of {}: {}", ship.name(), reason);
            return Err(PlaceError::new(reason, ship));
        }
        Ok(self.commit(ship, cells))
    }

    /// Write the ship onto the grid. Every cell must already have been checked against
    /// the current grid.
    fn commit(&mut self, mut ship: Ship, cells: Vec<Coordinate>) -> &Ship {
        for coord in cells.iter() {
            self.grid[coord] = Marker::Ship(ship.symbol());
        }
        ship.assign_cells(cells);
        debug!("placed {} at {:?}", ship.name(), ship.cells());
        self.ships.push(ship);
        // Just pushed, so there is a last element.
        &self.ships[self.ships.len() - 1]
    }
}

impl Default for GridManager {
    /// Construct a manager for the default 10x10 grid.
    fn default() -> Self {
        Self::new(RectDimensions::default())
    }
}
