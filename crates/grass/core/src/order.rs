//! Reduction of a selected route into an actionable movement order.

use crate::error::{ErrorSeverity, RoutingError};
use crate::route::Route;
use crate::state::{Direction, Position, Tank, TankId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("no route found from {start}")]
    NoRoute { start: Position },

    /// Popping the current cell left nothing to move to (start == goal or a
    /// single-cell route).
    #[error("route to {destination} has no step after the current cell")]
    EmptyAfterPop { destination: Position },
}

impl RoutingError for OrderError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            OrderError::NoRoute { .. } => "ORDER_NO_ROUTE",
            OrderError::EmptyAfterPop { .. } => "ORDER_EMPTY_AFTER_POP",
        }
    }
}

/// Movement order for one tank: where it stands, where it steps next, and
/// where the route ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub tank_id: TankId,
    pub current: Position,
    pub next: Position,
    pub destination: Position,
}

impl Order {
    /// Drops the route's first cell (the tank's own cell); the new head is
    /// `next` and the tail is `destination`.
    pub fn from_route(tank: &Tank, route: Route) -> Result<Self, OrderError> {
        if !route.is_reachable() {
            return Err(OrderError::NoRoute {
                start: tank.position,
            });
        }

        let positions = route.into_positions();
        let destination = positions.last().copied().unwrap_or(tank.position);
        let remaining = positions.get(1..).unwrap_or_default();

        let (Some(&next), Some(&last)) = (remaining.first(), remaining.last()) else {
            return Err(OrderError::EmptyAfterPop { destination });
        };

        Ok(Self {
            tank_id: tank.id,
            current: tank.position,
            next,
            destination: last,
        })
    }

    /// Heading that carries the tank from `current` onto `next`, when the two
    /// cells are orthogonally adjacent.
    pub fn heading(&self) -> Option<Direction> {
        Direction::between(self.current, self.next)
    }
}
