use super::{LocateError, ResourceLocator};
use crate::env::{GridMap, RandomSource, Region};
use crate::order::Order;
use crate::route::{Pathfinder, Route};
use crate::state::{Position, Tank};

impl<P, R> ResourceLocator<P, R>
where
    P: Pathfinder,
    R: RandomSource,
{
    /// Routes the tank to the cheapest resource cell inside `region`.
    ///
    /// Cells are visited row-major. A strictly cheaper route always wins; an
    /// equal-cost route wins on a coin flip. When the region holds no
    /// reachable resource, a uniformly drawn cell of the region (row first,
    /// then column) becomes the goal instead.
    ///
    /// # Errors
    ///
    /// - [`LocateError::OutOfBoundsRegion`] / [`LocateError::OutOfBoundsPosition`]
    ///   before any cell is read.
    /// - [`LocateError::EmptyRegion`] when a fallback goal is needed but the
    ///   region has no cells.
    /// - [`LocateError::NoRouteFound`] / [`LocateError::EmptyOrderAfterPop`]
    ///   when the selected route cannot become an order.
    pub fn locate_nearest_resource(
        &mut self,
        tank: &Tank,
        region: &Region,
        map: &GridMap,
    ) -> Result<Order, LocateError> {
        if !map.contains_region(region) {
            return Err(LocateError::OutOfBoundsRegion { region: *region });
        }
        Self::ensure_on_map(map, tank.position)?;

        let (best, goal) = match self.select_cheapest(tank.position, region, map) {
            Some(selected) => selected,
            None => {
                let goal = self.fallback_goal(region)?;
                tracing::warn!(
                    tank = %tank.id,
                    %region,
                    %goal,
                    "no reachable resource in region, heading to random cell"
                );
                (self.pathfinder.find_route(tank.position, goal, map), goal)
            }
        };

        Self::build_order(tank, best, goal)
    }

    /// Scans `region` and returns the selected route with its goal, or `None`
    /// when every candidate route is unreachable or no resource exists.
    fn select_cheapest(
        &mut self,
        start: Position,
        region: &Region,
        map: &GridMap,
    ) -> Option<(Route, Position)> {
        let resource_code = self.config.resource_code;
        let mut best = Route::unreachable();
        let mut best_goal = None;

        for cell in region.cells() {
            if !map.has_code(cell, resource_code) {
                continue;
            }

            let route = self.pathfinder.find_route(start, cell, map);
            tracing::trace!(%cell, cost = route.cost(), "resource candidate routed");

            if route.cost() < best.cost() {
                tracing::debug!(%cell, cost = route.cost(), "cheaper resource adopted");
                best = route;
                best_goal = Some(cell);
            } else if route.cost() == best.cost() && best.is_reachable() && self.rng.coin_flip() {
                tracing::debug!(%cell, cost = route.cost(), "equal-cost resource won coin flip");
                best = route;
                best_goal = Some(cell);
            }
        }

        best_goal.map(|goal| (best, goal))
    }

    fn fallback_goal(&mut self, region: &Region) -> Result<Position, LocateError> {
        if region.is_empty() {
            return Err(LocateError::EmptyRegion { region: *region });
        }
        let row = self.rng.uniform_int(region.start.row, region.end.row - 1);
        let col = self.rng.uniform_int(region.start.col, region.end.col - 1);
        Ok(Position::new(row, col))
    }
}
