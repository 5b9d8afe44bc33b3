use crate::env::Region;
use crate::error::{ErrorSeverity, RoutingError};
use crate::state::Position;

/// Raw terrain value as delivered by the game server.
pub type TerrainCode = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    pub fn contains(&self, position: Position) -> bool {
        u32::try_from(position.row).is_ok_and(|row| row < self.height)
            && u32::try_from(position.col).is_ok_and(|col| col < self.width)
    }

    /// Whether every cell of `region` lies on the map. Empty regions qualify
    /// as long as their corners stay within `0..=height` / `0..=width`.
    pub fn contains_region(&self, region: &Region) -> bool {
        let within = |value: i32, limit: u32| u32::try_from(value).is_ok_and(|v| v <= limit);
        within(region.start.row, self.height)
            && within(region.end.row, self.height)
            && within(region.start.col, self.width)
            && within(region.end.col, self.width)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("expected {expected} cells for the map extent, found {found}")]
    CellCountMismatch { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("position {position} is outside the map")]
    OutOfBounds { position: Position },

    #[error("region start {start} lies past its end {end}")]
    InvertedRegion { start: Position, end: Position },
}

impl RoutingError for MapError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            MapError::CellCountMismatch { .. } => "MAP_CELL_COUNT_MISMATCH",
            MapError::RaggedRow { .. } => "MAP_RAGGED_ROW",
            MapError::OutOfBounds { .. } => "MAP_OUT_OF_BOUNDS",
            MapError::InvertedRegion { .. } => "MAP_INVERTED_REGION",
        }
    }
}

/// Bounds-checked occupancy grid stored row-major in one allocation.
///
/// Every read goes through [`GridMap::get`], which answers `None` for cells
/// off the map instead of indexing out of range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    dimensions: MapDimensions,
    cells: Vec<TerrainCode>,
}

impl GridMap {
    pub fn new(dimensions: MapDimensions, cells: Vec<TerrainCode>) -> Result<Self, MapError> {
        let expected = dimensions.cell_count();
        if cells.len() != expected {
            return Err(MapError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { dimensions, cells })
    }

    /// Creates a map where every cell carries `code`.
    pub fn filled(dimensions: MapDimensions, code: TerrainCode) -> Self {
        Self {
            dimensions,
            cells: vec![code; dimensions.cell_count()],
        }
    }

    /// Builds a map from `[row][col]` nested rows. All rows must share the
    /// length of the first one.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MapError>
    where
        R: AsRef<[TerrainCode]>,
    {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MapError::RaggedRow {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        let dimensions = MapDimensions::new(width as u32, rows.len() as u32);
        Self::new(dimensions, cells)
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    pub fn contains_region(&self, region: &Region) -> bool {
        self.dimensions.contains_region(region)
    }

    /// Terrain at `position`, or `None` when it lies off the map.
    pub fn get(&self, position: Position) -> Option<TerrainCode> {
        self.index(position).map(|index| self.cells[index])
    }

    /// True when `position` is on the map and carries `code`.
    pub fn has_code(&self, position: Position, code: TerrainCode) -> bool {
        self.get(position) == Some(code)
    }

    pub fn set(&mut self, position: Position, code: TerrainCode) -> Result<(), MapError> {
        let index = self
            .index(position)
            .ok_or(MapError::OutOfBounds { position })?;
        self.cells[index] = code;
        Ok(())
    }

    /// Row-major offset of `position` in the backing storage.
    pub(crate) fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        let width = self.dimensions.width as usize;
        Some(position.row as usize * width + position.col as usize)
    }

    pub(crate) fn position_at(&self, index: usize) -> Position {
        let width = self.dimensions.width as usize;
        Position::new((index / width) as i32, (index % width) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_off_map() {
        let map = GridMap::filled(MapDimensions::new(4, 3), 0);

        assert_eq!(map.get(Position::new(2, 3)), Some(0));
        assert_eq!(map.get(Position::new(3, 0)), None);
        assert_eq!(map.get(Position::new(0, 4)), None);
        assert_eq!(map.get(Position::new(-1, 0)), None);
    }

    #[test]
    fn from_rows_indexes_row_then_column() {
        let rows: [[TerrainCode; 3]; 2] = [[0, 1, 2], [3, 4, 5]];
        let map = GridMap::from_rows(&rows).unwrap();

        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert_eq!(map.get(Position::new(1, 0)), Some(3));
        assert_eq!(map.get(Position::new(0, 2)), Some(2));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows: Vec<Vec<TerrainCode>> = vec![vec![0, 0, 0], vec![0, 0]];
        let err = GridMap::from_rows(&rows).unwrap_err();

        assert_eq!(
            err,
            MapError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(err.error_code(), "MAP_RAGGED_ROW");
    }

    #[test]
    fn new_rejects_wrong_cell_count() {
        let err = GridMap::new(MapDimensions::square(2), vec![0; 3]).unwrap_err();
        assert!(matches!(
            err,
            MapError::CellCountMismatch {
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn set_rejects_out_of_bounds() {
        let mut map = GridMap::filled(MapDimensions::square(2), 0);

        map.set(Position::new(1, 1), 2).unwrap();
        assert!(map.has_code(Position::new(1, 1), 2));
        assert_eq!(
            map.set(Position::new(2, 0), 2),
            Err(MapError::OutOfBounds {
                position: Position::new(2, 0)
            })
        );
    }

    #[test]
    fn index_and_position_agree() {
        let map = GridMap::filled(MapDimensions::new(5, 4), 0);
        let position = Position::new(3, 2);
        let index = map.index(position).unwrap();

        assert_eq!(index, 17);
        assert_eq!(map.position_at(index), position);
    }

    #[test]
    fn region_bounds_are_half_open() {
        let dims = MapDimensions::square(30);

        let full = Region::new(Position::new(0, 0), Position::new(30, 30)).unwrap();
        assert!(dims.contains_region(&full));

        let past = Region::new(Position::new(0, 0), Position::new(31, 30)).unwrap();
        assert!(!dims.contains_region(&past));

        let negative = Region::new(Position::new(-1, 0), Position::new(3, 3)).unwrap();
        assert!(!dims.contains_region(&negative));
    }
}
