use core::cmp::Reverse;
use std::collections::BinaryHeap;

use arrayvec::ArrayVec;

use crate::config::RoutingConfig;
use crate::env::{GridMap, TerrainCode};
use crate::route::{Pathfinder, Route};
use crate::state::{Direction, Position};

const NO_PARENT: usize = usize::MAX;

/// A* search over the 4-neighbourhood with unit step cost and a Manhattan
/// heuristic.
///
/// Cells carrying the barrier code are impassable; the start cell is exempt
/// since the tank already stands on it. Route cost is the number of steps.
/// Scratch buffers are dense vectors indexed like the map, so each call is
/// bounded by the map's cell count; [`AStarPathfinder::with_expansion_limit`]
/// tightens that bound further.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AStarPathfinder {
    barrier_code: TerrainCode,
    max_expansions: Option<usize>,
}

impl AStarPathfinder {
    pub fn new() -> Self {
        Self::from_config(&RoutingConfig::default())
    }

    pub fn from_config(config: &RoutingConfig) -> Self {
        Self {
            barrier_code: config.barrier_code,
            max_expansions: None,
        }
    }

    /// Gives up (returning [`Route::unreachable`]) after expanding `limit`
    /// nodes without reaching the goal.
    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    fn is_passable(&self, map: &GridMap, position: Position) -> bool {
        map.get(position).is_some_and(|code| code != self.barrier_code)
    }

    fn neighbors(position: Position) -> ArrayVec<Position, 4> {
        Direction::ALL
            .into_iter()
            .map(|direction| direction.step(position))
            .collect()
    }

    fn reconstruct(map: &GridMap, parents: &[usize], goal_index: usize) -> Vec<Position> {
        let mut path = Vec::new();
        let mut index = goal_index;
        while index != NO_PARENT {
            path.push(map.position_at(index));
            index = parents[index];
        }
        path.reverse();
        path
    }
}

impl Default for AStarPathfinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Pathfinder for AStarPathfinder {
    fn find_route(&mut self, start: Position, goal: Position, map: &GridMap) -> Route {
        let (Some(start_index), Some(goal_index)) = (map.index(start), map.index(goal)) else {
            tracing::trace!(%start, %goal, "route endpoint off the map");
            return Route::unreachable();
        };
        if !self.is_passable(map, goal) {
            tracing::trace!(%goal, "goal is a barrier");
            return Route::unreachable();
        }
        if start_index == goal_index {
            return Route::new(0, vec![start]);
        }

        let cell_count = map.dimensions().cell_count();
        let mut g_score = vec![u32::MAX; cell_count];
        let mut parents = vec![NO_PARENT; cell_count];
        let mut closed = vec![false; cell_count];
        let mut open = BinaryHeap::new();
        let mut expansions = 0usize;

        g_score[start_index] = 0;
        let h = start.manhattan_distance(goal);
        open.push(Reverse((h, h, start)));

        while let Some(Reverse((_, _, current))) = open.pop() {
            let Some(current_index) = map.index(current) else {
                continue;
            };
            if closed[current_index] {
                continue;
            }
            closed[current_index] = true;

            if current_index == goal_index {
                let path = Self::reconstruct(map, &parents, goal_index);
                return Route::new(g_score[goal_index], path);
            }

            expansions += 1;
            if self.max_expansions.is_some_and(|limit| expansions > limit) {
                tracing::debug!(%start, %goal, expansions, "expansion limit reached");
                return Route::unreachable();
            }

            let next_g = g_score[current_index] + 1;
            for neighbor in Self::neighbors(current) {
                if !self.is_passable(map, neighbor) {
                    continue;
                }
                let Some(neighbor_index) = map.index(neighbor) else {
                    continue;
                };
                if closed[neighbor_index] || next_g >= g_score[neighbor_index] {
                    continue;
                }
                g_score[neighbor_index] = next_g;
                parents[neighbor_index] = current_index;
                let h = neighbor.manhattan_distance(goal);
                open.push(Reverse((next_g + h, h, neighbor)));
            }
        }

        tracing::trace!(%start, %goal, expansions, "goal unreachable");
        Route::unreachable()
    }
}
