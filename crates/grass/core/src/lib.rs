//! Grid routing core for a tank agent hunting grass cells.
//!
//! `grass-core` scans an occupancy grid for resource cells, routes the tank to
//! the chosen cell through a pluggable [`Pathfinder`], and reduces the route
//! to an actionable [`Order`]. Everything here is synchronous and works on
//! borrowed, read-only maps; randomness is confined to the
//! [`RandomSource`] owned by each [`ResourceLocator`].
pub mod config;
pub mod env;
pub mod error;
pub mod locator;
pub mod order;
pub mod route;
pub mod state;

pub use config::RoutingConfig;
pub use env::{
    GridMap, MapDimensions, MapError, PcgRng, RandomSource, Region, TerrainCode, compute_seed,
    time_seed,
};
pub use error::{ErrorSeverity, RoutingError};
pub use locator::{LocateError, ResourceLocator};
pub use order::{Order, OrderError};
pub use route::{AStarPathfinder, MockPathfinder, Pathfinder, Route};
pub use state::{Direction, Position, Tank, TankId};
