use crate::env::Region;
use crate::error::{ErrorSeverity, RoutingError};
use crate::order::OrderError;
use crate::state::Position;

/// Failures of the locate operations. None of them are fatal; the control loop
/// decides whether to retry, idle, or search elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    #[error("region {region} exceeds the map")]
    OutOfBoundsRegion { region: Region },

    #[error("position {position} is outside the map")]
    OutOfBoundsPosition { position: Position },

    /// The region holds no cell at all, so no fallback goal can be drawn.
    #[error("region {region} is empty")]
    EmptyRegion { region: Region },

    #[error("no route from {start} to {goal}")]
    NoRouteFound { start: Position, goal: Position },

    #[error("route to {destination} has no step after the current cell")]
    EmptyOrderAfterPop { destination: Position },

    #[error("no resource on the row or column through flag {flag}")]
    ResourceNotFound { flag: Position },
}

impl LocateError {
    pub(crate) fn from_order(error: OrderError, goal: Position) -> Self {
        match error {
            OrderError::NoRoute { start } => LocateError::NoRouteFound { start, goal },
            OrderError::EmptyAfterPop { destination } => {
                LocateError::EmptyOrderAfterPop { destination }
            }
        }
    }
}

impl RoutingError for LocateError {
    fn severity(&self) -> ErrorSeverity {
        use LocateError::*;
        match self {
            OutOfBoundsRegion { .. } | OutOfBoundsPosition { .. } | EmptyRegion { .. } => {
                ErrorSeverity::Validation
            }
            NoRouteFound { .. } | EmptyOrderAfterPop { .. } | ResourceNotFound { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use LocateError::*;
        match self {
            OutOfBoundsRegion { .. } => "LOCATE_OUT_OF_BOUNDS_REGION",
            OutOfBoundsPosition { .. } => "LOCATE_OUT_OF_BOUNDS_POSITION",
            EmptyRegion { .. } => "LOCATE_EMPTY_REGION",
            NoRouteFound { .. } => "LOCATE_NO_ROUTE_FOUND",
            EmptyOrderAfterPop { .. } => "LOCATE_EMPTY_ORDER_AFTER_POP",
            ResourceNotFound { .. } => "LOCATE_RESOURCE_NOT_FOUND",
        }
    }
}
