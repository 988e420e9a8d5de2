use crate::utils::coords::Tile;

pub mod astar;
pub mod grid;
pub mod heap;
pub mod navigator;
pub mod nearest;
pub mod simplify;
pub mod traversal;
pub mod waypoints;

pub use astar::{AStarUniformCostHeuristic, Heuristic, NodeCost};
pub use grid::{Grid, TileMatrix, TileState};
pub use heap::MinHeap;
pub use navigator::Navigator;
pub use nearest::OccupancyWeightedHeuristic;
pub use traversal::GridTraversal;
pub use waypoints::WaypointQueue;


// Ordered tiles to walk, next step first, target last.
// The tile the agent currently stands on is never included.
pub type Path = Vec<Tile>;
