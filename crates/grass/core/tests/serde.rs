#![cfg(feature = "serde")]

use grass_core::{Direction, Position, Region, Route, Tank, TankId};
use serde::Serialize;
use serde::de::DeserializeOwned;

fn round_trip<T>(value: &T) -> T
where
    T: Serialize + DeserializeOwned,
{
    let json = serde_json::to_string(value).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn route_round_trips_with_cost_and_cells() {
    let route = Route::new(
        2,
        vec![
            Position::new(3, 5),
            Position::new(3, 6),
            Position::new(4, 6),
        ],
    );

    let json = serde_json::to_value(&route).unwrap();
    assert_eq!(json["cost"], 2);
    assert_eq!(json["positions"][2]["row"], 4);
    assert_eq!(round_trip(&route), route);
}

#[test]
fn unreachable_route_keeps_infinite_cost() {
    let route = Route::unreachable();
    let decoded = round_trip(&route);

    assert_eq!(decoded, route);
    assert!(!decoded.is_reachable());
}

#[test]
fn tank_round_trips() {
    let tank = Tank::new(TankId(1024), Position::new(3, 5), Direction::Left, 2);

    let json = serde_json::to_value(tank).unwrap();
    assert_eq!(json["id"], 1024);
    assert_eq!(json["hp"], 2);
    assert_eq!(round_trip(&tank), tank);
}

#[test]
fn region_round_trips() {
    let region = Region::new(Position::new(2, 2), Position::new(15, 15)).unwrap();
    let decoded = round_trip(&region);

    assert_eq!(decoded, region);
    assert_eq!(decoded.cells().count(), 13 * 13);
}
