//! Implements the setup phase, where ships are placed one at a time.
use std::collections::VecDeque;

use log::info;

use crate::{
    board::{CannotPlaceReason, Coordinate, Dimensions, GridManager, PlaceError, PlacementCheck},
    fleet::Fleet,
    ships::{Orientation, Ship},
};

/// Setup phase for a fleet. Ships are placed in fleet order, and a ship whose placement
/// is refused stays first in line until it is placed.
#[derive(Debug)]
pub struct FleetSetup<D: Dimensions> {
    /// Grid the ships are being placed onto.
    grid: GridManager<D>,

    /// Ships still waiting to be placed, next ship first.
    pending: VecDeque<Ship>,
}

impl<D: Dimensions> FleetSetup<D> {
    /// Begin setup by constructing an empty grid with the given [`Dimensions`].
    pub fn new(fleet: Fleet, dim: D) -> Self {
        Self {
            grid: GridManager::new(dim),
            pending: fleet.into_ships().into(),
        }
    }

    /// Get the grid as it stands so far.
    pub fn grid(&self) -> &GridManager<D> {
        &self.grid
    }

    /// Get an iterator over the ships which still need to be placed, in order.
    pub fn pending_ships(&self) -> impl Iterator<Item = &Ship> {
        self.pending.iter()
    }

    /// The ship that the next placement applies to, if any remain.
    pub fn next_pending(&self) -> Option<&Ship> {
        self.pending.front()
    }

    /// Returns true once every ship has been placed.
    pub fn ready(&self) -> bool {
        self.pending.is_empty()
    }

    /// Check where the next ship would land if placed at `start` in the given
    /// orientation, without placing it. Returns `None` if every ship is already placed.
    pub fn check_next(
        &self,
        start: Coordinate,
        orientation: Orientation,
    ) -> Option<PlacementCheck> {
        self.pending
            .front()
            .map(|ship| self.grid.check_placement(&ship.project(start, orientation)))
    }

    /// Try to place the next ship at `start` in the given orientation. On success returns
    /// the placed ship. On failure the ship stays next in line and the error carries the
    /// cells that were tried.
    pub fn place_next(
        &mut self,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<&Ship, PlaceError<Vec<Coordinate>>> {
        let ship = match self.pending.pop_front() {
            Some(ship) => ship,
            None => return Err(PlaceError::new(CannotPlaceReason::AlreadyPlaced, Vec::new())),
        };
        let cells = ship.project(start, orientation);
        match self.grid.place_ship(ship, cells.clone()) {
            Ok(ship) => {
                info!("{} placed at {} ({:?})", ship.name(), start, orientation);
                Ok(ship)
            }
            Err(err) => {
                let reason = err.reason();
                self.pending.push_front(err.into_placement());
                Err(PlaceError::new(reason, cells))
            }
        }
    }

    /// Tries to finish setup. If every ship is placed, returns the completed grid,
    /// otherwise returns self.
    pub fn start(self) -> Result<GridManager<D>, Self> {
        if self.ready() {
            Ok(self.grid)
        } else {
            Err(self)
        }
    }

    /// Place every remaining ship at a position chosen uniformly from all positions that
    /// are valid for it at the time it is placed.
    ///
    /// Ships already placed are left alone. If some ship has no valid position left,
    /// stops with [`CannotPlaceReason::NoSpace`] and that ship stays pending.
    #[cfg(feature = "rng_gen")]
    pub fn place_randomly<R: rand::Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), CannotPlaceReason> {
        use log::debug;
        use rand::seq::SliceRandom;

        while let Some(ship) = self.pending.front() {
            let dim = self.grid.dimensions();
            let options: Vec<(Coordinate, Orientation)> = (0..dim.total_size())
                .map(|idx| dim.un_linearize(idx))
                .flat_map(|start| Orientation::ALL.iter().map(move |&dir| (start, dir)))
                .filter(|&(start, dir)| {
                    self.grid
                        .check_placement(&ship.project(start, dir))
                        .is_valid()
                })
                .collect();
            let &(start, dir) = match options.choose(rng) {
                Some(choice) => choice,
                None => {
                    debug!("no room left for {}", ship.name());
                    return Err(CannotPlaceReason::NoSpace);
                }
            };
            // The position was just checked against the current grid.
            self.place_next(start, dir).map_err(|err| err.reason())?;
        }
        Ok(())
    }
}
