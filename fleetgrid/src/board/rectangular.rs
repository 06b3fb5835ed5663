//! Implements a basic rectangular grid.
use std::{convert::TryFrom, num::ParseIntError};

use thiserror::Error;

use crate::board::{coordinate::column_letter, Coordinate, Dimensions};

/// Widest grid whose columns can all be labeled with a single letter.
const MAX_WIDTH: usize = 26;

/// Simple rectangular dimensions, indexed in row-major order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectDimensions {
    /// Width of the grid. This cooresponds to the `col` of a [`Coordinate`].
    width: usize,
    /// Height of the grid. This cooresponds to the `row` of a [`Coordinate`].
    height: usize,
}

impl RectDimensions {
    /// Create new [`RectDimensions`] with the specified width and height.
    /// Panics if `width` or `height` is 0, if `width` exceeds 26 columns, or if `height`
    /// does not fit in an `i32` row.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Some(dim) => dim,
            None => panic!(
                "RectDimensions must be between 1x1 and {}x{}, got {}x{}",
                MAX_WIDTH,
                i32::max_value(),
                width,
                height
            ),
        }
    }

    /// Create new [`RectDimensions`] with the specified width and height.
    /// Returns `None` if `width` or `height` is 0, if `width` exceeds 26 columns, or if
    /// `height` does not fit in an `i32` row.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 || width > MAX_WIDTH || i32::try_from(height).is_err() {
            None
        } else {
            width
                .checked_mul(height)
                .map(|_| Self { width, height })
        }
    }

    /// Get the width of these [`RectDimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`RectDimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width as i32;
        (0..self.height as i32).map(move |row| (0..width).map(move |col| Coordinate { row, col }))
    }

    /// Get an iterator over the letters that label each column, starting with `A`.
    pub fn column_labels(&self) -> impl Iterator<Item = char> {
        (0..self.width as i32).filter_map(column_letter)
    }

    /// Parse a coordinate from the labels a player types: a one-based row number and a
    /// column letter, case-insensitive. Surrounding whitespace is ignored.
    pub fn parse_coordinate(
        &self,
        row: &str,
        col: &str,
    ) -> Result<Coordinate, ParseCoordinateError> {
        let row_text = row.trim();
        let out_of_range = || ParseCoordinateError::RowOutOfRange {
            row: row_text.to_owned(),
            max: self.height,
        };
        let row: usize = match row_text.parse() {
            Ok(row) => row,
            // All digits but too large for usize.
            Err(_) if !row_text.is_empty() && row_text.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(out_of_range())
            }
            Err(source) => {
                return Err(ParseCoordinateError::InvalidRow {
                    input: row_text.to_owned(),
                    source,
                })
            }
        };
        if row == 0 || row > self.height {
            return Err(out_of_range());
        }

        let col_text = col.trim();
        let mut chars = col_text.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
            _ => return Err(ParseCoordinateError::InvalidColumn(col_text.to_owned())),
        };
        let col = (letter as u8 - b'A') as usize;
        if col >= self.width {
            return Err(ParseCoordinateError::ColumnOutOfRange {
                column: letter,
                max: self.last_column_label(),
            });
        }

        Ok(Coordinate::new(row as i32 - 1, col as i32))
    }

    /// Label of the rightmost column.
    fn last_column_label(&self) -> char {
        // Width is between 1 and 26, so the last column always has a letter.
        (b'A' + (self.width - 1) as u8) as char
    }
}

impl Dimensions for RectDimensions {
    /// Compute the linear total size of these [`Dimensions`].
    fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Convert a coordinate to a linear index within this dimension.
    /// Returns `None` if the coordinate is out of range for the dimension.
    fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// Convert a linear index back into a [`Coordinate`].
    fn un_linearize(&self, idx: usize) -> Coordinate {
        assert!(
            idx < self.total_size(),
            "index {} is out of bounds for {:?}",
            idx,
            self
        );
        Coordinate {
            row: (idx / self.width) as i32,
            col: (idx % self.width) as i32,
        }
    }
}

impl Default for RectDimensions {
    /// Construct the default rectangular dimensions, a 10x10 grid.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}

/// Error returned when a row or column label typed by a player does not name a cell.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseCoordinateError {
    /// The row was not a number.
    #[error("row {input:?} is not a number")]
    InvalidRow {
        input: String,
        #[source]
        source: ParseIntError,
    },
    /// The row was a number outside of the grid. Holds the row as typed.
    #[error("row {row} is out of range, expected 1 to {max}")]
    RowOutOfRange { row: String, max: usize },
    /// The column was not a single letter.
    #[error("column {0:?} is not a single letter")]
    InvalidColumn(String),
    /// The column was a letter past the last column of the grid.
    #[error("column {column} is out of range, expected A to {max}")]
    ColumnOutOfRange { column: char, max: char },
}
