use std::fmt;

use super::{Direction, Position};

/// Identifier assigned to a tank by the game server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TankId(pub u32);

impl fmt::Display for TankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Snapshot of the agent being routed.
///
/// Only `id` and `position` feed the locator; `direction` and `hp` ride along
/// for the control loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tank {
    pub id: TankId,
    pub position: Position,
    pub direction: Direction,
    pub hp: u32,
}

impl Tank {
    pub fn new(id: TankId, position: Position, direction: Direction, hp: u32) -> Self {
        Self {
            id,
            position,
            direction,
            hp,
        }
    }
}
