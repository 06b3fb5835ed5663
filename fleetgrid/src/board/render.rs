//! Text rendering of a rectangular grid.
use std::fmt;

use crate::board::{GridManager, Marker, RectDimensions};

impl GridManager<RectDimensions> {
    /// Get an iterator over the rows of the grid. Each row is an iterator over the
    /// markers in that row, left to right.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Marker>> {
        self.dimensions()
            .iter_coordinates()
            .map(move |row| row.map(move |coord| self.grid[coord]))
    }

    /// Render the grid as text: a header of column letters, then one line per row
    /// prefixed with its one-based row number.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GridManager<RectDimensions> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label_width = self.dimensions().height().to_string().len();
        write!(f, "{:width$}", "", width = label_width)?;
        for label in self.dimensions().column_labels() {
            write!(f, " {}", label)?;
        }
        writeln!(f)?;
        for (i, row) in self.iter_rows().enumerate() {
            write!(f, "{:>width$}", i + 1, width = label_width)?;
            for marker in row {
                write!(f, " {}", marker)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
