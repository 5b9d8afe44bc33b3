use grass_core::{
    AStarPathfinder, Direction, GridMap, LocateError, MapDimensions, MockPathfinder, Order, PcgRng,
    Position, Region, ResourceLocator, Route, RoutingConfig, Tank, TankId, compute_seed,
};

const GRASS: i32 = RoutingConfig::DEFAULT_RESOURCE_CODE;

fn reference_tank() -> Tank {
    Tank::new(TankId(1024), Position::new(3, 5), Direction::Up, 2)
}

fn reference_region() -> Region {
    Region::new(Position::new(2, 2), Position::new(15, 15)).unwrap()
}

fn mock_locator(seed: u64) -> ResourceLocator<MockPathfinder<PcgRng>, PcgRng> {
    ResourceLocator::new(
        MockPathfinder::new(PcgRng::seeded(compute_seed(seed, 1))),
        PcgRng::seeded(compute_seed(seed, 0)),
    )
}

#[test]
fn all_grass_map_yields_destination_inside_region() {
    let map = GridMap::filled(MapDimensions::square(30), GRASS);
    let region = reference_region();

    for seed in 0..32 {
        let order = mock_locator(seed)
            .locate_nearest_resource(&reference_tank(), &region, &map)
            .unwrap();

        assert_eq!(order.current, Position::new(3, 5));
        assert_eq!(order.tank_id, TankId(1024));
        assert!(region.contains(order.destination), "{order:?}");
        assert_eq!(map.get(order.destination), Some(GRASS));
    }
}

#[test]
fn destination_is_grass_inside_region_with_astar() {
    let mut map = GridMap::filled(MapDimensions::square(30), 0);
    for cell in [(4, 4), (12, 2), (14, 14), (1, 1), (20, 6)] {
        map.set(Position::new(cell.0, cell.1), GRASS).unwrap();
    }
    let region = reference_region();
    let mut locator = ResourceLocator::new(AStarPathfinder::new(), PcgRng::seeded(5));

    let order = locator
        .locate_nearest_resource(&reference_tank(), &region, &map)
        .unwrap();

    // (4, 4) is 2 steps away; (1, 1) is closer but outside the region.
    assert_eq!(order.destination, Position::new(4, 4));
    assert!(region.contains(order.destination));
    assert_eq!(order.next.manhattan_distance(order.current), 1);
}

#[test]
fn grassless_region_still_yields_order_inside_region() {
    let map = GridMap::filled(MapDimensions::square(30), 0);
    let region = reference_region();

    for seed in 0..32 {
        let order = mock_locator(seed)
            .locate_nearest_resource(&reference_tank(), &region, &map)
            .unwrap();

        assert!(region.contains(order.destination), "{order:?}");
    }
}

#[test]
fn same_seed_same_tie_break() {
    // Two grass cells at identical A* cost from the tank.
    let mut map = GridMap::filled(MapDimensions::square(30), 0);
    map.set(Position::new(3, 2), GRASS).unwrap();
    map.set(Position::new(3, 8), GRASS).unwrap();
    let region = Region::new(Position::new(0, 0), Position::new(10, 10)).unwrap();

    let picks: Vec<Position> = (0..16)
        .map(|seed| {
            let mut first = ResourceLocator::new(AStarPathfinder::new(), PcgRng::seeded(seed));
            let mut second = ResourceLocator::new(AStarPathfinder::new(), PcgRng::seeded(seed));
            let a = first
                .locate_nearest_resource(&reference_tank(), &region, &map)
                .unwrap();
            let b = second
                .locate_nearest_resource(&reference_tank(), &region, &map)
                .unwrap();
            assert_eq!(a, b);
            a.destination
        })
        .collect();

    assert!(
        picks
            .iter()
            .all(|pick| *pick == Position::new(3, 2) || *pick == Position::new(3, 8))
    );
}

#[test]
fn flag_scan_finds_grass_on_flag_row() {
    let flag = Position::new(5, 10);
    let mut map = GridMap::filled(MapDimensions::square(30), 0);
    map.set(Position::new(5, 25), GRASS).unwrap();
    let mut locator = mock_locator(9);

    let order = locator
        .locate_nearest_resource_near_flag(&reference_tank(), &map, flag)
        .unwrap();

    assert_eq!(order.destination, Position::new(5, 25));
}

#[test]
fn flag_scan_ignores_off_axis_grass() {
    let flag = Position::new(5, 10);
    let mut map = GridMap::filled(MapDimensions::square(30), 0);
    map.set(Position::new(2, 3), GRASS).unwrap();
    map.set(Position::new(20, 3), GRASS).unwrap();
    let mut locator = mock_locator(9);

    assert_eq!(
        locator.locate_nearest_resource_near_flag(&reference_tank(), &map, flag),
        Err(LocateError::ResourceNotFound { flag })
    );
}

#[test]
fn two_cell_route_pops_to_goal() {
    let start = Position::new(8, 8);
    let goal = Position::new(9, 8);
    let tank = Tank::new(TankId(1), start, Direction::Down, 1);

    let order = Order::from_route(&tank, Route::new(1, vec![start, goal])).unwrap();

    assert_eq!(order.next, goal);
    assert_eq!(order.destination, goal);
}

#[test]
fn compute_route_delegates_to_pathfinder() {
    let map = GridMap::filled(MapDimensions::square(10), 0);
    let mut locator = ResourceLocator::new(AStarPathfinder::new(), PcgRng::seeded(0));

    let route = locator.compute_route(Position::new(0, 0), Position::new(2, 3), &map);

    assert_eq!(route.cost(), 5);
    assert_eq!(route.start(), Some(Position::new(0, 0)));
    assert_eq!(route.goal(), Some(Position::new(2, 3)));
}

#[test]
fn custom_resource_code_is_honoured() {
    let mut map = GridMap::filled(MapDimensions::square(30), GRASS);
    map.set(Position::new(6, 6), 7).unwrap();
    let config = RoutingConfig::default().with_resource_code(7);
    let mut locator =
        ResourceLocator::new(AStarPathfinder::from_config(&config), PcgRng::seeded(1))
            .with_config(config);

    let order = locator
        .locate_nearest_resource(&reference_tank(), &reference_region(), &map)
        .unwrap();

    assert_eq!(order.destination, Position::new(6, 6));
}
