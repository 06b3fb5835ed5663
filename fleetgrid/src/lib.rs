//! Placement of a battleship fleet onto a rectangular grid.
//!
//! A [`GridManager`][board::GridManager] owns the grid and the ships placed on it. Callers
//! derive the cells a ship would cover from a starting cell and an
//! [`Orientation`][ships::Orientation], ask the manager to
//! [check][board::GridManager::check_placement] them, and
//! [place][board::GridManager::place_ship] the ship once the cells are in bounds and
//! free. [`FleetSetup`][fleet::FleetSetup] drives that loop for a whole
//! [`Fleet`][fleet::Fleet].
//!
//! ```
//! use fleetgrid::{
//!     board::{CannotPlaceReason, Coordinate, RectDimensions},
//!     fleet::Fleet,
//!     ships::Orientation,
//! };
//!
//! let mut setup = Fleet::standard().into_setup(RectDimensions::default());
//! setup.place_next(Coordinate::new(0, 0), Orientation::Horizontal).unwrap();
//!
//! let err = setup
//!     .place_next(Coordinate::new(0, 4), Orientation::Vertical)
//!     .unwrap_err();
//! assert_eq!(err.reason(), CannotPlaceReason::Overlapping);
//! ```

pub mod board;
pub mod fleet;
pub mod ships;
