use crate::utils::{
    Size,
    coords::{Tile, TileRect}
};

use super::{
    Path,
    grid::{Grid, TileMatrix},
    heap::MinHeap
};

// Useful references and reading material:
//  https://www.redblobgames.com/pathfinding/a-star/introduction.html
//  https://www.redblobgames.com/pathfinding/a-star/implementation.html

// ----------------------------------------------
// NodeCost
// ----------------------------------------------

pub type NodeCost = f32;
pub const NODE_COST_ZERO: NodeCost = 0.0;
pub const NODE_COST_UNSET: NodeCost = -1.0;

// ----------------------------------------------
// Heuristic
// ----------------------------------------------

pub trait Heuristic {
    // Returns the estimated cost from `tile` to `goal`.
    fn estimate_cost_to_goal(&self, tile: Tile, goal: Tile) -> NodeCost;

    // Returns the cost of moving `from` tile `to` tile, AKA the Edge Cost.
    fn movement_cost(&self, grid: &Grid, from: Tile, to: Tile) -> NodeCost;
}

// Uniform movement cost with straight-line distance estimate.
// Euclidean never overestimates a 4-connected unit-cost walk,
// so the first time the goal pops its cost is optimal.
pub struct AStarUniformCostHeuristic;

impl AStarUniformCostHeuristic {
    #[inline]
    pub fn new() -> Self { Self }
}

impl Default for AStarUniformCostHeuristic {
    fn default() -> Self { Self::new() }
}

impl Heuristic for AStarUniformCostHeuristic {
    #[inline]
    fn estimate_cost_to_goal(&self, tile: Tile, goal: Tile) -> NodeCost {
        tile.euclidean_distance(goal)
    }

    #[inline]
    fn movement_cost(&self, _grid: &Grid, _from: Tile, _to: Tile) -> NodeCost {
        1.0
    }
}

// ----------------------------------------------
// Search
// ----------------------------------------------

// Per-query search state. Created fresh for every call and dropped
// when it returns; nothing carries over between queries.
pub(super) struct Search {
    pub frontier: MinHeap<Tile>,
    pub came_from: TileMatrix<Tile>,
    pub cost_so_far: TileMatrix<NodeCost>,
    start: Tile,
}

impl Search {
    pub fn new(grid_size: Size, start: Tile) -> Self {
        let mut search = Self {
            frontier: MinHeap::new(),
            came_from: TileMatrix::filled(grid_size, Tile::invalid()),
            cost_so_far: TileMatrix::filled(grid_size, NODE_COST_UNSET),
            start,
        };

        search.frontier.add(NODE_COST_ZERO, start);
        search.cost_so_far[start] = NODE_COST_ZERO;
        search
    }

    // Records `new_cost` for `neighbor` if it beats the current one.
    // The neighbor is pushed again even if it's already queued; the stale
    // entry is harmless since it only re-examines settled neighbors.
    #[inline]
    pub fn relax(&mut self, current: Tile, neighbor: Tile, new_cost: NodeCost, estimate: NodeCost) {
        let known_cost = self.cost_so_far[neighbor];
        if known_cost == NODE_COST_UNSET || known_cost > new_cost {
            self.cost_so_far[neighbor] = new_cost;
            self.came_from[neighbor] = current;
            self.frontier.add(new_cost + estimate, neighbor);
        }
    }

    // Walks `came_from` back from `goal`. The start tile is not part of
    // the returned path.
    pub fn reconstruct_path(&self, goal: Tile) -> Path {
        if goal == self.start || !self.came_from[goal].is_valid() {
            return Path::new();
        }

        let mut path = Path::new();
        let mut current = goal;
        while current != self.start {
            path.push(current);
            current = self.came_from[current];
            debug_assert!(current.is_valid(), "Broken predecessor chain!");
        }

        path.reverse();
        path
    }
}

// ----------------------------------------------
// find_path
// ----------------------------------------------

// 4-connected A* from `start` to `target`. Occupied tiles are impassable
// unless they fall inside one of the `ignore_regions`.
//
// Returns the tiles after `start` up to and including `target`, or an
// empty path if `target` can't be reached or `start == target`.
// Panics if `start` or `target` are outside the grid.
#[must_use]
pub fn find_path(grid: &Grid,
                 heuristic: &impl Heuristic,
                 start: Tile,
                 target: Tile,
                 ignore_regions: &[TileRect]) -> Path {

    assert!(grid.is_within_bounds(start),  "Path start {start} is outside the grid!");
    assert!(grid.is_within_bounds(target), "Path target {target} is outside the grid!");

    if start == target {
        return Path::new();
    }

    let mut search = Search::new(grid.size(), start);

    while let Some(current) = search.frontier.pop() {
        if current == target {
            // Found a path! Whatever is left in the heap doesn't matter.
            return search.reconstruct_path(target);
        }

        for neighbor in grid.neighbors(current) {
            if grid.is_blocked(neighbor, ignore_regions) {
                continue;
            }

            let new_cost = search.cost_so_far[current] + heuristic.movement_cost(grid, current, neighbor);
            let estimate = heuristic.estimate_cost_to_goal(neighbor, target);
            search.relax(current, neighbor, new_cost, estimate);
        }
    }

    Path::new()
}
