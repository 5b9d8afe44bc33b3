//! Routes and the pathfinders that produce them.
//!
//! [`Pathfinder`] is the seam the locator is generic over. Two implementations
//! ship with the crate:
//!
//! - [`MockPathfinder`]: random cost and a one-cell jitter waypoint; with a
//!   seeded source it is the deterministic stand-in for exercising selection
//!   logic in isolation.
//! - [`AStarPathfinder`]: 4-neighbourhood shortest path that treats the
//!   barrier code as impassable.
mod astar;
mod mock;

pub use astar::AStarPathfinder;
pub use mock::MockPathfinder;

use crate::env::GridMap;
use crate::state::Position;

/// Costed, ordered cell sequence from start to goal inclusive.
///
/// A route is either *found* (finite cost, at least one position) or
/// *unreachable* (cost [`Route::INFINITE_COST`], no positions).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    cost: u32,
    positions: Vec<Position>,
}

impl Route {
    /// Sentinel cost meaning "no route".
    pub const INFINITE_COST: u32 = u32::MAX;

    /// The "no route" sentinel.
    pub const fn unreachable() -> Self {
        Self {
            cost: Self::INFINITE_COST,
            positions: Vec::new(),
        }
    }

    /// Builds a found route. An empty sequence or an infinite cost collapses
    /// to [`Route::unreachable`] so the two invariants cannot drift apart.
    pub fn new(cost: u32, positions: Vec<Position>) -> Self {
        if cost == Self::INFINITE_COST || positions.is_empty() {
            return Self::unreachable();
        }
        Self { cost, positions }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn is_reachable(&self) -> bool {
        self.cost != Self::INFINITE_COST
    }

    pub fn start(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    pub fn goal(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::unreachable()
    }
}

/// Computes a route between two cells of a borrowed map.
///
/// Contract:
/// - a found route begins at `start` and ends at `goal`;
/// - its cost grows with path length;
/// - an unreachable goal yields [`Route::unreachable`], never a panic.
///
/// `&mut self` lets stand-ins own a random source; the map is only ever read.
pub trait Pathfinder {
    fn find_route(&mut self, start: Position, goal: Position, map: &GridMap) -> Route;
}

impl<P: Pathfinder + ?Sized> Pathfinder for Box<P> {
    fn find_route(&mut self, start: Position, goal: Position, map: &GridMap) -> Route {
        (**self).find_route(start, goal, map)
    }
}

impl<P: Pathfinder + ?Sized> Pathfinder for &mut P {
    fn find_route(&mut self, start: Position, goal: Position, map: &GridMap) -> Route {
        (**self).find_route(start, goal, map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_collapses_to_unreachable() {
        let route = Route::new(5, Vec::new());

        assert!(!route.is_reachable());
        assert_eq!(route, Route::unreachable());
    }

    #[test]
    fn infinite_cost_drops_positions() {
        let route = Route::new(Route::INFINITE_COST, vec![Position::ORIGIN]);

        assert!(route.positions().is_empty());
        assert_eq!(route.goal(), None);
    }

    #[test]
    fn endpoints_follow_sequence() {
        let route = Route::new(
            2,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ],
        );

        assert_eq!(route.start(), Some(Position::new(0, 0)));
        assert_eq!(route.goal(), Some(Position::new(1, 1)));
        assert_eq!(route.cost(), 2);
    }
}
