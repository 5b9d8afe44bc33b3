use crate::config::RoutingConfig;
use crate::env::{GridMap, RandomSource};
use crate::route::{Pathfinder, Route};
use crate::state::Position;

/// Placeholder pathfinder that invents a route instead of searching one.
///
/// Each call draws, in order:
/// 1. a cost in `[cost_min, cost_max]`;
/// 2. a waypoint row in `start.row - 1 ..= start.row + 1`;
/// 3. a waypoint column in `start.col - 1 ..= start.col + 1`;
///
/// and stitches `[start, waypoint, goal]`. The waypoint is clamped onto the
/// map. The goal is never validated, so the mock always "reaches" it.
///
/// When `start == goal` the route is still three cells long, so the order
/// built from it steps to the waypoint instead of failing with
/// [`crate::OrderError::EmptyAfterPop`]. On a 1x1 map that order does not
/// move the tank at all.
#[derive(Clone, Debug)]
pub struct MockPathfinder<R> {
    rng: R,
    cost_min: u32,
    cost_max: u32,
}

impl<R: RandomSource> MockPathfinder<R> {
    pub fn new(rng: R) -> Self {
        Self::from_config(rng, &RoutingConfig::default())
    }

    pub fn from_config(rng: R, config: &RoutingConfig) -> Self {
        Self {
            rng,
            cost_min: config.mock_cost_min,
            cost_max: config.mock_cost_max,
        }
    }

    pub fn with_cost_range(mut self, min: u32, max: u32) -> Self {
        self.cost_min = min;
        self.cost_max = max;
        self
    }

    fn draw_cost(&mut self) -> u32 {
        let min = i32::try_from(self.cost_min).unwrap_or(i32::MAX);
        let max = i32::try_from(self.cost_max).unwrap_or(i32::MAX);
        // Never hand back the unreachable sentinel.
        (self.rng.uniform_int(min, max).max(0) as u32).min(Route::INFINITE_COST - 1)
    }
}

impl<R: RandomSource> Pathfinder for MockPathfinder<R> {
    fn find_route(&mut self, start: Position, goal: Position, map: &GridMap) -> Route {
        let cost = self.draw_cost();
        let row = self.rng.uniform_int(start.row - 1, start.row + 1);
        let col = self.rng.uniform_int(start.col - 1, start.col + 1);
        let waypoint = clamp_to_map(Position::new(row, col), map);

        tracing::trace!(%start, %goal, cost, %waypoint, "mock route drawn");

        Route::new(cost, vec![start, waypoint, goal])
    }
}

fn clamp_to_map(position: Position, map: &GridMap) -> Position {
    let max_row = map.height().saturating_sub(1).min(i32::MAX as u32) as i32;
    let max_col = map.width().saturating_sub(1).min(i32::MAX as u32) as i32;
    Position::new(
        position.row.clamp(0, max_row),
        position.col.clamp(0, max_col),
    )
}
