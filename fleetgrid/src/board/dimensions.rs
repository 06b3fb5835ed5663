use std::fmt::Debug;

use crate::board::Coordinate;

/// Dimensions of a grid.
/// Implements the methods the grid needs to check bounds and to linearize coordinates
/// into its backing storage.
pub trait Dimensions: Debug {
    /// Compute the total number of cells. Used to allocate storage for the grid.
    fn total_size(&self) -> usize;

    /// Convert a coordinate to a linear index within this dimension.
    /// Returns `None` if the coordinate is out of bounds for the dimension.
    fn try_linearize(&self, coord: &Coordinate) -> Option<usize>;

    /// Get back a coordinate from a linearized index. Panic if idx is >= total_size.
    fn un_linearize(&self, idx: usize) -> Coordinate;

    /// Returns true if the coordinate lies inside these dimensions.
    fn contains(&self, coord: &Coordinate) -> bool {
        self.try_linearize(coord).is_some()
    }
}
