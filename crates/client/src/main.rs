//! Grass routing client binary.
//!
//! Builds a [`ResourceLocator`] from `GRASS_*` environment variables, runs the
//! reference scenario, and prints each scan's outcome as a JSON line on
//! stdout. Logs go to stderr or to `$GRASS_LOG_DIR/grass.log`.
//!
//! ```bash
//! GRASS_SEED=7 GRASS_PATHFINDER=astar cargo run -p grass-client
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use grass_client::{ClientConfig, PathfinderKind, Scenario, logging};
use grass_core::{
    AStarPathfinder, MockPathfinder, Pathfinder, PcgRng, ResourceLocator, RoutingConfig,
    compute_seed, time_seed,
};

/// Seed context of the locator's own tie-break and fallback draws.
const LOCATOR_STREAM: u32 = 0;
/// Seed context of the mock pathfinder's cost and waypoint draws.
const MOCK_STREAM: u32 = 1;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let base_seed = config.seed.unwrap_or_else(time_seed);
    tracing::info!("Starting grass client");
    tracing::info!("Seed: {}", base_seed);
    tracing::info!("Pathfinder: {}", config.pathfinder);

    let routing = RoutingConfig::default();
    let pathfinder: Box<dyn Pathfinder> = match config.pathfinder {
        PathfinderKind::Mock => Box::new(MockPathfinder::from_config(
            PcgRng::seeded(compute_seed(base_seed, MOCK_STREAM)),
            &routing,
        )),
        PathfinderKind::Astar => Box::new(AStarPathfinder::from_config(&routing)),
    };
    let mut locator = ResourceLocator::new(
        pathfinder,
        PcgRng::seeded(compute_seed(base_seed, LOCATOR_STREAM)),
    )
    .with_config(routing);

    let resource_code = locator.config().resource_code;
    let scenario = Scenario::reference(config.map_size, config.flag, resource_code)
        .context("failed to build reference scenario")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for report in scenario.run(&mut locator) {
        let line = serde_json::to_string(&report).context("failed to encode report")?;
        writeln!(out, "{line}")?;
    }

    tracing::info!("Client shutdown complete");
    Ok(())
}
