use std::collections::VecDeque;
use bitvec::prelude::*;

use crate::utils::coords::Tile;

use super::{
    astar::{Heuristic, NodeCost, Search},
    grid::Grid
};

// ----------------------------------------------
// OccupancyWeightedHeuristic
// ----------------------------------------------

// Stepping onto an occupied tile costs more than a free one, so the
// search routes around obstacles but can still cross them when boxed in.
// The estimate pulls the search toward `preferred`, e.g. the position of
// the unit being ordered, instead of the raw click point.
pub struct OccupancyWeightedHeuristic {
    pub free_tile_cost: NodeCost,
    pub occupied_tile_cost: NodeCost,
    pub preferred: Option<Tile>,
}

impl OccupancyWeightedHeuristic {
    #[inline]
    pub fn new(free_tile_cost: NodeCost, occupied_tile_cost: NodeCost, preferred: Option<Tile>) -> Self {
        debug_assert!(free_tile_cost > 0.0 && occupied_tile_cost > 0.0);
        Self { free_tile_cost, occupied_tile_cost, preferred }
    }
}

impl Heuristic for OccupancyWeightedHeuristic {
    #[inline]
    fn estimate_cost_to_goal(&self, tile: Tile, _goal: Tile) -> NodeCost {
        // No preferred tile = plain Dijkstra expansion.
        self.preferred.map_or(0.0, |preferred| tile.euclidean_distance(preferred))
    }

    #[inline]
    fn movement_cost(&self, grid: &Grid, _from: Tile, to: Tile) -> NodeCost {
        if grid.is_occupied(to) { self.occupied_tile_cost } else { self.free_tile_cost }
    }
}

// ----------------------------------------------
// find_closest_free_tile
// ----------------------------------------------

// Breadth-first flood from `start`; returns the first free tile reached,
// `start` itself if it is free, or `Tile::invalid()` if every tile is occupied.
// Panics if `start` is outside the grid.
#[must_use]
pub fn find_closest_free_tile(grid: &Grid, start: Tile) -> Tile {
    assert!(grid.is_within_bounds(start), "Search start {start} is outside the grid!");

    let mut visited = bitvec![0; grid.size().area()];
    let mut frontier = VecDeque::new();

    let mut mark_visited = |tile: Tile| -> bool {
        match grid.tile_to_index(tile) {
            Some(index) if !visited[index] => {
                visited.set(index, true);
                true
            }
            _ => false,
        }
    };

    mark_visited(start);
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        if !grid.is_occupied(current) {
            return current;
        }

        for neighbor in current.neighbors() {
            // Out of bounds neighbors map to no index and are skipped.
            if mark_visited(neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }

    Tile::invalid()
}

// ----------------------------------------------
// find_closest_free_tile_weighted
// ----------------------------------------------

// Best-first variant: same expansion as the A* search but every tile is
// passable (at a cost), and the search ends on the first popped tile that
// is free. Returns `Tile::invalid()` if the heap runs dry first.
// Panics if `start` is outside the grid.
#[must_use]
pub fn find_closest_free_tile_weighted(grid: &Grid,
                                       heuristic: &OccupancyWeightedHeuristic,
                                       start: Tile) -> Tile {

    assert!(grid.is_within_bounds(start), "Search start {start} is outside the grid!");

    let goal = heuristic.preferred.unwrap_or(start);
    let mut search = Search::new(grid.size(), start);

    while let Some(current) = search.frontier.pop() {
        if !grid.is_occupied(current) {
            return current;
        }

        for neighbor in grid.neighbors(current) {
            let new_cost = search.cost_so_far[current] + heuristic.movement_cost(grid, current, neighbor);
            let estimate = heuristic.estimate_cost_to_goal(neighbor, goal);
            search.relax(current, neighbor, new_cost, estimate);
        }
    }

    Tile::invalid()
}
