use crate::env::TerrainCode;

/// Routing constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingConfig {
    /// Terrain code marking a resource (grass) cell.
    pub resource_code: TerrainCode,
    /// Terrain code the real pathfinder refuses to enter.
    pub barrier_code: TerrainCode,
    /// Inclusive cost range drawn by the mock pathfinder.
    pub mock_cost_min: u32,
    pub mock_cost_max: u32,
}

impl RoutingConfig {
    // ===== reference deployment constants =====
    /// Side length of the square battle map.
    pub const DEFAULT_MAP_SIZE: u32 = 30;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RESOURCE_CODE: TerrainCode = 2;
    pub const DEFAULT_BARRIER_CODE: TerrainCode = 1;
    pub const DEFAULT_MOCK_COST_MIN: u32 = 20;
    pub const DEFAULT_MOCK_COST_MAX: u32 = 40;

    pub fn new() -> Self {
        Self {
            resource_code: Self::DEFAULT_RESOURCE_CODE,
            barrier_code: Self::DEFAULT_BARRIER_CODE,
            mock_cost_min: Self::DEFAULT_MOCK_COST_MIN,
            mock_cost_max: Self::DEFAULT_MOCK_COST_MAX,
        }
    }

    pub fn with_resource_code(mut self, resource_code: TerrainCode) -> Self {
        self.resource_code = resource_code;
        self
    }

    pub fn with_barrier_code(mut self, barrier_code: TerrainCode) -> Self {
        self.barrier_code = barrier_code;
        self
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self::new()
    }
}
