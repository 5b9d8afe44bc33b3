//! Read-only world data and the random source.
//!
//! The map and region types are owned by the caller and only ever borrowed by
//! the locator; the random source is owned by whoever draws from it.
mod map;
mod region;
mod rng;

pub use map::{GridMap, MapDimensions, MapError, TerrainCode};
pub use region::Region;
pub use rng::{PcgRng, RandomSource, compute_seed, time_seed};
