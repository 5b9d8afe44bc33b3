use core::ops::Range;

use crate::env::MapError;
use crate::state::Position;

/// Axis-aligned, half-open search rectangle:
/// rows `[start.row, end.row)`, columns `[start.col, end.col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub start: Position,
    pub end: Position,
}

impl Region {
    /// Builds a region, rejecting a start that lies past the end on either
    /// axis. Bounds against a particular map are checked by the locator.
    pub fn new(start: Position, end: Position) -> Result<Self, MapError> {
        if start.row > end.row || start.col > end.col {
            return Err(MapError::InvertedRegion { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn rows(&self) -> Range<i32> {
        self.start.row..self.end.row
    }

    pub fn cols(&self) -> Range<i32> {
        self.start.col..self.end.col
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty() || self.cols().is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.rows().contains(&position.row) && self.cols().contains(&position.col)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols();
        self.rows()
            .flat_map(move |row| cols.clone().map(move |col| Position::new(row, col)))
    }
}

impl core::fmt::Display for Region {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}..{})", self.start, self.end)
    }
}
