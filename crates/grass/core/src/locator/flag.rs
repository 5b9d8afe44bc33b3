use super::{LocateError, ResourceLocator};
use crate::env::{GridMap, RandomSource, TerrainCode};
use crate::order::Order;
use crate::route::Pathfinder;
use crate::state::{Position, Tank};

impl<P, R> ResourceLocator<P, R>
where
    P: Pathfinder,
    R: RandomSource,
{
    /// Finds the resource cell closest to `flag` along the flag's column and
    /// row only.
    ///
    /// The column is walked first (row 0 downwards), then the row (column 0
    /// rightwards). Both walks share one running minimum of the absolute
    /// offset from the flag and only a strictly smaller offset replaces the
    /// current pick, so equal offsets resolve to the first cell visited.
    pub fn find_resource_near_flag(
        &self,
        map: &GridMap,
        flag: Position,
    ) -> Result<Position, LocateError> {
        Self::ensure_on_map(map, flag)?;

        let code = self.config.resource_code;
        let mut nearest = None;

        let column = (0..map.height()).map(|row| Position::new(row as i32, flag.col));
        scan_axis(
            map,
            code,
            column,
            |cell| cell.row.abs_diff(flag.row),
            &mut nearest,
        );

        let row = (0..map.width()).map(|col| Position::new(flag.row, col as i32));
        scan_axis(
            map,
            code,
            row,
            |cell| cell.col.abs_diff(flag.col),
            &mut nearest,
        );

        match nearest {
            Some((position, offset)) => {
                tracing::debug!(%flag, %position, offset, "resource found beside flag");
                Ok(position)
            }
            None => Err(LocateError::ResourceNotFound { flag }),
        }
    }

    /// Routes the tank to the resource picked by
    /// [`ResourceLocator::find_resource_near_flag`].
    ///
    /// # Errors
    ///
    /// [`LocateError::ResourceNotFound`] when neither axis through the flag
    /// holds a resource, plus the bounds and order errors of the area scan.
    pub fn locate_nearest_resource_near_flag(
        &mut self,
        tank: &Tank,
        map: &GridMap,
        flag: Position,
    ) -> Result<Order, LocateError> {
        Self::ensure_on_map(map, tank.position)?;
        let goal = self.find_resource_near_flag(map, flag)?;
        let route = self.pathfinder.find_route(tank.position, goal, map);
        Self::build_order(tank, route, goal)
    }
}

fn scan_axis<I, F>(
    map: &GridMap,
    code: TerrainCode,
    cells: I,
    offset_of: F,
    nearest: &mut Option<(Position, u32)>,
) where
    I: Iterator<Item = Position>,
    F: Fn(Position) -> u32,
{
    for cell in cells.filter(|cell| map.has_code(*cell, code)) {
        let offset = offset_of(cell);
        if nearest.is_none_or(|(_, best)| offset < best) {
            *nearest = Some((cell, offset));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapDimensions, PcgRng};
    use crate::route::{AStarPathfinder, MockPathfinder};
    use crate::state::{Direction, TankId};
    use crate::{RoutingConfig, RoutingError};

    const GRASS: TerrainCode = RoutingConfig::DEFAULT_RESOURCE_CODE;

    fn map_with_grass(cells: &[(i32, i32)]) -> GridMap {
        let mut map = GridMap::filled(MapDimensions::square(30), 0);
        for &(row, col) in cells {
            map.set(Position::new(row, col), GRASS).unwrap();
        }
        map
    }

    fn locator() -> ResourceLocator<AStarPathfinder, PcgRng> {
        ResourceLocator::new(AStarPathfinder::new(), PcgRng::seeded(1))
    }

    #[test]
    fn finds_grass_on_flag_row() {
        let map = map_with_grass(&[(5, 22)]);
        assert_eq!(
            locator().find_resource_near_flag(&map, Position::new(5, 10)),
            Ok(Position::new(5, 22))
        );
    }

    #[test]
    fn finds_grass_on_flag_column() {
        let map = map_with_grass(&[(0, 10)]);
        assert_eq!(
            locator().find_resource_near_flag(&map, Position::new(5, 10)),
            Ok(Position::new(0, 10))
        );
    }

    #[test]
    fn ignores_grass_off_both_axes() {
        let map = map_with_grass(&[(2, 3), (20, 3)]);
        let flag = Position::new(5, 10);

        let err = locator().find_resource_near_flag(&map, flag).unwrap_err();
        assert_eq!(err, LocateError::ResourceNotFound { flag });
        assert_eq!(err.error_code(), "LOCATE_RESOURCE_NOT_FOUND");
    }

    #[test]
    fn row_hit_replaces_column_hit_only_when_strictly_closer() {
        let flag = Position::new(10, 10);

        // Column hit at offset 3, row hit at offset 3: column (visited first) stays.
        let tie = map_with_grass(&[(13, 10), (10, 7)]);
        assert_eq!(
            locator().find_resource_near_flag(&tie, flag),
            Ok(Position::new(13, 10))
        );

        // Row hit at offset 2 beats column hit at offset 3.
        let closer = map_with_grass(&[(13, 10), (10, 12)]);
        assert_eq!(
            locator().find_resource_near_flag(&closer, flag),
            Ok(Position::new(10, 12))
        );
    }

    #[test]
    fn equal_offsets_on_one_axis_keep_first_visited() {
        let flag = Position::new(10, 10);
        let map = map_with_grass(&[(10, 6), (10, 14)]);

        assert_eq!(
            locator().find_resource_near_flag(&map, flag),
            Ok(Position::new(10, 6))
        );
    }

    #[test]
    fn flag_off_map_is_rejected() {
        let map = map_with_grass(&[(5, 5)]);
        let flag = Position::new(5, 30);

        assert_eq!(
            locator().find_resource_near_flag(&map, flag),
            Err(LocateError::OutOfBoundsPosition { position: flag })
        );
    }

    #[test]
    fn order_heads_towards_flag_grass() {
        let map = map_with_grass(&[(5, 14)]);
        let tank = Tank::new(TankId(7), Position::new(5, 11), Direction::Left, 3);

        let order = locator()
            .locate_nearest_resource_near_flag(&tank, &map, Position::new(5, 10))
            .unwrap();

        assert_eq!(order.tank_id, TankId(7));
        assert_eq!(order.current, Position::new(5, 11));
        assert_eq!(order.next, Position::new(5, 12));
        assert_eq!(order.destination, Position::new(5, 14));
        assert_eq!(order.heading(), Some(Direction::Right));
    }

    #[test]
    fn missing_grass_surfaces_as_error_not_order() {
        let map = map_with_grass(&[]);
        let tank = Tank::new(TankId(7), Position::new(1, 1), Direction::Up, 3);
        let mut locator =
            ResourceLocator::new(MockPathfinder::new(PcgRng::seeded(2)), PcgRng::seeded(3));

        let result = locator.locate_nearest_resource_near_flag(&tank, &map, Position::new(5, 10));
        assert_eq!(
            result,
            Err(LocateError::ResourceNotFound {
                flag: Position::new(5, 10)
            })
        );
    }
}
