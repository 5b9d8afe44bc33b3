//! Resource (grass) selection over the occupancy grid.
//!
//! Two scans share one [`ResourceLocator`]:
//!
//! - **Area scan** ([`ResourceLocator::locate_nearest_resource`]): routes to
//!   every resource cell in a region and keeps the cheapest. An equal-cost
//!   challenger replaces the incumbent on a coin flip, which biases ties
//!   towards later cells rather than picking uniformly among them. With no
//!   resource in the region a random cell of the region becomes the goal.
//! - **Flag scan** ([`ResourceLocator::find_resource_near_flag`]): looks only
//!   along the flag's column, then its row, and keeps the first strictly
//!   closer hit. No coin flip here.
//!
//! The two scans resolve ties differently.
mod area;
mod error;
mod flag;

pub use error::LocateError;

use crate::config::RoutingConfig;
use crate::env::{GridMap, RandomSource};
use crate::order::Order;
use crate::route::{Pathfinder, Route};
use crate::state::{Position, Tank};

/// Selects grass cells and turns the chosen route into an [`Order`].
///
/// The pathfinder and random source are injected at construction and owned
/// by the locator, so one locator's random stream is never shared.
///
/// # Examples
///
/// ```
/// use grass_core::{
///     AStarPathfinder, Direction, GridMap, MapDimensions, PcgRng, Position, Region,
///     ResourceLocator, Tank, TankId,
/// };
///
/// let mut map = GridMap::filled(MapDimensions::square(30), 0);
/// map.set(Position::new(6, 5), 2).unwrap();
///
/// let mut locator = ResourceLocator::new(AStarPathfinder::new(), PcgRng::seeded(7));
/// let tank = Tank::new(TankId(1), Position::new(3, 5), Direction::Up, 2);
/// let region = Region::new(Position::new(0, 0), Position::new(10, 10)).unwrap();
///
/// let order = locator.locate_nearest_resource(&tank, &region, &map).unwrap();
/// assert_eq!(order.next, Position::new(4, 5));
/// assert_eq!(order.destination, Position::new(6, 5));
/// ```
#[derive(Clone, Debug)]
pub struct ResourceLocator<P, R> {
    pathfinder: P,
    rng: R,
    config: RoutingConfig,
}

impl<P, R> ResourceLocator<P, R>
where
    P: Pathfinder,
    R: RandomSource,
{
    pub fn new(pathfinder: P, rng: R) -> Self {
        Self {
            pathfinder,
            rng,
            config: RoutingConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RoutingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Pathfinder entry point; callers may route without selecting a target.
    pub fn compute_route(&mut self, start: Position, goal: Position, map: &GridMap) -> Route {
        self.pathfinder.find_route(start, goal, map)
    }

    fn ensure_on_map(map: &GridMap, position: Position) -> Result<(), LocateError> {
        if map.contains(position) {
            Ok(())
        } else {
            Err(LocateError::OutOfBoundsPosition { position })
        }
    }

    fn build_order(tank: &Tank, route: Route, goal: Position) -> Result<Order, LocateError> {
        let order =
            Order::from_route(tank, route).map_err(|error| LocateError::from_order(error, goal))?;

        tracing::info!(
            tank = %order.tank_id,
            current = %order.current,
            next = %order.next,
            destination = %order.destination,
            "order issued"
        );
        Ok(order)
    }
}
