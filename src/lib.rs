// Tile grid navigation: occupancy grid, A* path search, nearest free
// tile search and line-of-sight path simplification for agents with
// a radius. Everything runs synchronously on the caller's thread.

pub mod config;
pub mod log;
pub mod pathfind;
pub mod utils;

pub use config::{Configs, PathfindConfigs};
pub use pathfind::{Grid, Navigator, Path, TileState, WaypointQueue};
pub use utils::{
    GridPoint,
    Size,
    Vec3,
    coords::{Tile, TileRect}
};
