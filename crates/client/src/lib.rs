//! Driver pieces for the `grass` binary: environment config, logging setup,
//! and the reference scenario.
pub mod config;
pub mod demo;
pub mod logging;

pub use config::{ClientConfig, PathfinderKind};
pub use demo::{Report, Scan, Scenario};
