use std::fmt;

/// The coordinates of a cell in the grid, as zero-based `row` and `col`.
///
/// Coordinates are signed so that candidate placements which run off any edge of the
/// grid can still be represented and reported.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Vertical position of the cell. Row 0 is the top row.
    pub row: i32,
    /// Horizontal position of the cell. Column 0 is the leftmost column.
    pub col: i32,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Get the coordinate `steps` cells away from this one in the direction given by
    /// `(drow, dcol)`. Saturates rather than overflowing, which keeps far-away cells far
    /// away.
    pub(crate) fn offset(self, (drow, dcol): (i32, i32), steps: i32) -> Self {
        Self {
            row: self.row.saturating_add(drow.saturating_mul(steps)),
            col: self.col.saturating_add(dcol.saturating_mul(steps)),
        }
    }
}

impl From<(i32, i32)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    /// Formats the coordinate the way a player reads it: column letter followed by the
    /// one-based row, e.g. `C7`. Cells whose column has no letter fall back to a
    /// one-based `(row, col)` pair.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match column_letter(self.col) {
            Some(letter) => write!(f, "{}{}", letter, i64::from(self.row) + 1),
            None => write!(
                f,
                "({}, {})",
                i64::from(self.row) + 1,
                i64::from(self.col) + 1
            ),
        }
    }
}

/// Get the display letter for a zero-based column, if the column is in `0..26`.
pub(crate) fn column_letter(col: i32) -> Option<char> {
    if (0..26).contains(&col) {
        Some((b'A' + col as u8) as char)
    } else {
        None
    }
}
