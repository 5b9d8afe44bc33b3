//! Per-request value types: positions, headings and the tank itself.
mod common;
mod tank;

pub use common::{Direction, Position};
pub use tank::{Tank, TankId};
