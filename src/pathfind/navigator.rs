use crate::{
    log,
    config::PathfindConfigs,
    utils::{
        Size,
        Vec3,
        coords::{self, Tile, TileRect}
    }
};

use super::{
    Path,
    astar::{self, AStarUniformCostHeuristic},
    grid::{Grid, TileState},
    nearest::{self, OccupancyWeightedHeuristic},
    simplify,
    waypoints::WaypointQueue
};

const LOG_CHANNEL: log::Channel = log::channel!("pathfind");

// ----------------------------------------------
// Navigator
// ----------------------------------------------

// Entry point for unit movement and structure placement code.
// Owns one occupancy grid; every query runs synchronously on the
// caller's thread and keeps no state between calls. Multiple
// navigators (maps, tests) are fully independent.
pub struct Navigator {
    grid: Grid,
    configs: PathfindConfigs,
}

impl Navigator {
    pub fn new(grid_size: Size, configs: PathfindConfigs) -> Self {
        Self::with_grid(Grid::new(grid_size), configs)
    }

    pub fn with_grid(grid: Grid, configs: PathfindConfigs) -> Self {
        log::set_level(configs.log_level);
        log::info!(LOG_CHANNEL, "Navigator created with grid size {}.", grid.size());
        Self { grid, configs }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[inline]
    pub fn configs(&self) -> &PathfindConfigs {
        &self.configs
    }

    // ----------------------
    // Occupancy:
    // ----------------------

    // Panics on out of range indices.
    #[inline]
    pub fn is_tile_occupied(&self, x: i32, z: i32) -> bool {
        self.grid.is_occupied(Tile::new(x, z))
    }

    #[inline]
    pub fn occupy_tiles(&mut self, start: Tile, size: Size, state: TileState) {
        self.grid.occupy(start, size, state);
    }

    #[inline]
    pub fn free_tiles(&mut self, start: Tile, size: Size) {
        self.grid.free(start, size);
    }

    // ----------------------
    // Nearest free tile:
    // ----------------------

    // With a `preferred` tile the weighted search is used, biased toward
    // the side of an obstacle facing `preferred`. Without one it's a plain
    // breadth-first flood. Returns `Tile::invalid()` if nothing is free.
    pub fn closest_free_tile(&self, start: Tile, preferred: Option<Tile>) -> Tile {
        let free_tile = match preferred {
            Some(preferred) => {
                let heuristic = OccupancyWeightedHeuristic::new(
                    self.configs.free_tile_cost,
                    self.configs.occupied_tile_cost,
                    Some(preferred));
                nearest::find_closest_free_tile_weighted(&self.grid, &heuristic, start)
            }
            None => nearest::find_closest_free_tile(&self.grid, start),
        };

        if !free_tile.is_valid() {
            log::warn!(LOG_CHANNEL, "No free tile left around {start}: grid is fully occupied.");
        }

        free_tile
    }

    // World space wrapper over `closest_free_tile()`. Returns the center of
    // the free tile at the height of `start_pos`, or `Vec3::invalid()`.
    pub fn closest_free_world_position(&self, start_pos: Vec3, preferred_pos: Option<Vec3>) -> Vec3 {
        let start = coords::world_to_tile(start_pos);
        let preferred = preferred_pos.map(coords::world_to_tile);

        let free_tile = self.closest_free_tile(start, preferred);
        if !free_tile.is_valid() {
            return Vec3::invalid();
        }

        coords::tile_to_world(free_tile, start_pos.y)
    }

    // ----------------------
    // Paths:
    // ----------------------

    // Tiles after `start` up to and including `target`.
    // Empty if `target` is unreachable or equal to `start`.
    pub fn calculate_path(&self, start: Tile, target: Tile, ignore_regions: &[TileRect]) -> Path {
        let heuristic = AStarUniformCostHeuristic::new();
        let path = astar::find_path(&self.grid, &heuristic, start, target, ignore_regions);

        if path.is_empty() && start != target {
            log::warn!(LOG_CHANNEL, "No path from {start} to {target}.");
        } else {
            log::verbose!(LOG_CHANNEL, "Path from {start} to {target}: {} tiles.", path.len());
        }

        path
    }

    // See `simplify::simplify_path()`.
    pub fn simplify_path(&self, start: Tile, path: &[Tile], radius: f32, ignore_regions: &[TileRect]) -> Path {
        simplify::simplify_path(&self.grid, start, path, radius, ignore_regions)
    }

    // Full pipeline: world -> tiles, A*, string pulling, tiles -> world.
    // Waypoints are tile centers at the height of `start_pos`.
    // An empty queue means there's no path (or we're already there).
    pub fn path_as_world_queue(&self,
                               start_pos: Vec3,
                               target_pos: Vec3,
                               radius: f32,
                               ignore_regions: &[TileRect]) -> WaypointQueue {

        let start = coords::world_to_tile(start_pos);
        let target = coords::world_to_tile(target_pos);

        let path = self.calculate_path(start, target, ignore_regions);
        if path.is_empty() {
            return WaypointQueue::new();
        }

        let simplified = self.simplify_path(start, &path, radius, ignore_regions);
        log::verbose!(LOG_CHANNEL, "Simplified path {start} -> {target}: {} -> {} waypoints.", path.len(), simplified.len());

        WaypointQueue::from_tiles(&simplified, start_pos.y)
    }
}
