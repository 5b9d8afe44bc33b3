//! Client configuration loaded from environment variables.
//!
//! Unset or unparsable variables fall back to their defaults.
use std::env;
use std::path::PathBuf;

use grass_core::{Position, RoutingConfig};
use strum::{Display, EnumString};

/// Which [`grass_core::Pathfinder`] the client plugs into the locator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PathfinderKind {
    /// Random-cost stand-in; reproduces the reference driver.
    #[default]
    Mock,
    /// Grid A* over non-barrier cells.
    Astar,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base seed; a time-derived seed is used when absent.
    pub seed: Option<u64>,
    pub pathfinder: PathfinderKind,
    /// Side length of the square demo map.
    pub map_size: u32,
    /// Flag used for the flag-adjacent scan.
    pub flag: Position,
    /// Write logs to `grass.log` in this directory instead of stderr.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub const DEFAULT_FLAG: Position = Position::new(5, 10);

    /// Load configuration from `GRASS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(seed) = read_var::<u64, _>(&lookup, "GRASS_SEED") {
            config.seed = Some(seed);
        }
        if let Some(kind) = read_var::<PathfinderKind, _>(&lookup, "GRASS_PATHFINDER") {
            config.pathfinder = kind;
        }
        if let Some(size) = read_var::<u32, _>(&lookup, "GRASS_MAP_SIZE") {
            config.map_size = size.max(1);
        }
        if let Some(flag) = lookup("GRASS_FLAG").as_deref().and_then(parse_position) {
            config.flag = flag;
        }
        if let Some(dir) = lookup("GRASS_LOG_DIR").filter(|dir| !dir.trim().is_empty()) {
            config.log_dir = Some(PathBuf::from(dir));
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pathfinder: PathfinderKind::default(),
            map_size: RoutingConfig::DEFAULT_MAP_SIZE,
            flag: Self::DEFAULT_FLAG,
            log_dir: None,
        }
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

/// Parses `"row,col"`.
fn parse_position(raw: &str) -> Option<Position> {
    let (row, col) = raw.split_once(',')?;
    Some(Position::new(row.trim().parse().ok()?, col.trim().parse().ok()?))
}
