// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{convert::TryFrom, str::FromStr};

use thiserror::Error;

use crate::board::Coordinate;

/// Direction a straight ship extends in from its starting cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The ship extends downward, along increasing rows.
    Vertical,
    /// The ship extends rightward, along increasing columns.
    Horizontal,
}

impl Orientation {
    /// Every orientation, vertical first.
    pub const ALL: &'static [Orientation] = &[Orientation::Vertical, Orientation::Horizontal];

    /// Step from one cell of the ship to the next, as `(drow, dcol)`.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Vertical => (1, 0),
            Orientation::Horizontal => (0, 1),
        }
    }

    /// Get the `len` cells a straight ship would cover starting from `start` and
    /// extending in this orientation. The cells are not checked against any grid, so some
    /// of them may be out of bounds.
    pub fn project(self, start: Coordinate, len: usize) -> Vec<Coordinate> {
        let step = self.step();
        // Lengths past i32::MAX saturate at the far edge; such cells are out of bounds
        // on any grid anyway.
        (0..len)
            .map(|i| start.offset(step, i32::try_from(i).unwrap_or(i32::max_value())))
            .collect()
    }

    /// The single-letter code for this orientation, as a player types it.
    pub fn code(self) -> char {
        match self {
            Orientation::Vertical => 'V',
            Orientation::Horizontal => 'H',
        }
    }
}

/// Error returned when text does not name an [`Orientation`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid orientation {0:?}, expected V (vertical) or H (horizontal)")]
pub struct ParseOrientationError(String);

impl ParseOrientationError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    /// Parse an orientation from `V`/`vertical` or `H`/`horizontal`, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("v") || s.eq_ignore_ascii_case("vertical") {
            Ok(Orientation::Vertical)
        } else if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("horizontal") {
            Ok(Orientation::Horizontal)
        } else {
            Err(ParseOrientationError(s.to_owned()))
        }
    }
}
