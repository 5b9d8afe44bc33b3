//! The reference scenario: one tank on an all-grass map running both scans.
use grass_core::{
    Direction, ErrorSeverity, GridMap, LocateError, MapDimensions, MapError, Order, Pathfinder,
    Position, RandomSource, Region, ResourceLocator, RoutingConfig, RoutingError, Tank, TankId,
};
use serde::Serialize;
use strum::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Scan {
    Area,
    Flag,
}

/// Outcome of one scan, printed as a JSON line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Report {
    Order {
        scan: Scan,
        order: Order,
    },
    Error {
        scan: Scan,
        code: &'static str,
        severity: ErrorSeverity,
        message: String,
    },
}

impl Report {
    fn from_result(scan: Scan, result: Result<Order, LocateError>) -> Self {
        match result {
            Ok(order) => Report::Order { scan, order },
            Err(error) => {
                tracing::warn!(
                    %scan,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "scan failed: {error}"
                );
                Report::Error {
                    scan,
                    code: error.error_code(),
                    severity: error.severity(),
                    message: error.to_string(),
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scenario {
    pub map: GridMap,
    pub tank: Tank,
    pub region: Region,
    pub flag: Position,
}

impl Scenario {
    pub const TANK_ID: TankId = TankId(1024);
    pub const TANK_POSITION: Position = Position::new(3, 5);
    pub const TANK_HP: u32 = 2;
    pub const REGION_START: i32 = 2;
    pub const REGION_END: i32 = 15;

    /// Square map of `map_size` filled with `resource_code`.
    ///
    /// The search region is shrunk to fit maps smaller than its nominal
    /// `(2, 2)..(15, 15)` extent.
    pub fn reference(map_size: u32, flag: Position, resource_code: i32) -> Result<Self, MapError> {
        let map = GridMap::filled(MapDimensions::square(map_size), resource_code);

        let limit = i32::try_from(map_size).unwrap_or(i32::MAX);
        let end = Self::REGION_END.min(limit);
        let start = Self::REGION_START.min(end);
        let region = Region::new(Position::new(start, start), Position::new(end, end))?;

        let tank = Tank::new(
            Self::TANK_ID,
            Self::TANK_POSITION,
            Direction::Up,
            Self::TANK_HP,
        );

        Ok(Self {
            map,
            tank,
            region,
            flag,
        })
    }

    pub fn with_default_map(map_size: u32, flag: Position) -> Result<Self, MapError> {
        Self::reference(map_size, flag, RoutingConfig::DEFAULT_RESOURCE_CODE)
    }

    /// Runs the area scan then the flag scan.
    pub fn run<P, R>(&self, locator: &mut ResourceLocator<P, R>) -> Vec<Report>
    where
        P: Pathfinder,
        R: RandomSource,
    {
        tracing::info!(
            tank = %self.tank.id,
            position = %self.tank.position,
            region = %self.region,
            flag = %self.flag,
            "running reference scenario"
        );

        let area = locator.locate_nearest_resource(&self.tank, &self.region, &self.map);
        let flag = locator.locate_nearest_resource_near_flag(&self.tank, &self.map, self.flag);

        vec![
            Report::from_result(Scan::Area, area),
            Report::from_result(Scan::Flag, flag),
        ]
    }
}
