//! Types that make up the grid ships are placed on.

pub use self::{
    coordinate::Coordinate,
    dimensions::Dimensions,
    errors::{CannotPlaceReason, PlaceError},
    grid::{Marker, WATER},
    manager::{GridManager, PlacementCheck},
    rectangular::{ParseCoordinateError, RectDimensions},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
mod manager;
pub mod rectangular;
mod render;
