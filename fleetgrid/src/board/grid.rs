//! Defines the types that make up the grid.

use std::{
    borrow::Borrow,
    fmt,
    ops::{Index, IndexMut},
};

use crate::board::{Coordinate, Dimensions};

/// Symbol shown for a cell that no ship occupies.
pub const WATER: char = '~';

/// Contents of a single cell in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Marker {
    /// The cell is empty.
    Water,
    /// The cell is occupied by the ship with this symbol.
    Ship(char),
}

impl Marker {
    /// Get the character this marker is drawn with.
    pub fn symbol(self) -> char {
        match self {
            Marker::Water => WATER,
            Marker::Ship(symbol) => symbol,
        }
    }

    /// Returns true if no ship occupies the cell.
    pub fn is_water(self) -> bool {
        self == Marker::Water
    }
}

impl Default for Marker {
    fn default() -> Self {
        Marker::Water
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0; 4];
        f.pad(self.symbol().encode_utf8(&mut buf))
    }
}

/// Flat, row-major storage of markers for every cell within the dimensions.
#[derive(Debug)]
pub(super) struct Grid<D> {
    /// Dimensions of this grid.
    pub(super) dim: D,
    /// Cells that make up this grid.
    pub(super) cells: Box<[Marker]>,
}

impl<D: Dimensions> Grid<D> {
    /// Construct a grid where every cell is water.
    pub(super) fn new(dim: D) -> Self {
        let cells = vec![Marker::Water; dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Marker> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Marker> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<D: Dimensions, B: Borrow<Coordinate>> Index<B> for Grid<D> {
    type Output = Marker;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<D: Dimensions, B: Borrow<Coordinate>> IndexMut<B> for Grid<D> {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
