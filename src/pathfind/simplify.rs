use crate::utils::coords::{Tile, TileRect};

use super::{
    Path,
    grid::Grid,
    traversal
};

// ----------------------------------------------
// Line of sight
// ----------------------------------------------

// Can an agent of `radius` walk in a straight line between the centers
// of `from` and `to`? With a radius the centerline is pushed out to both
// sides and each offset line must be clear as well as the centerline.
pub fn is_walkable_line(grid: &Grid, from: Tile, to: Tile, radius: f32, ignore_regions: &[TileRect]) -> bool {
    let a = from.center();
    let b = to.center();

    if traversal::segment_blocked(grid, a, b, ignore_regions) {
        return false;
    }

    if radius <= 0.0 || from == to {
        return true;
    }

    let offset = (b - a).normalize().perpendicular() * radius;

    !traversal::segment_blocked(grid, a + offset, b + offset, ignore_regions) &&
    !traversal::segment_blocked(grid, a - offset, b - offset, ignore_regions)
}

// ----------------------------------------------
// simplify_path
// ----------------------------------------------

// String pulling: collapses a tile-by-tile path into the fewest waypoints
// an agent of `radius` can walk between in straight lines.
//
// `start` is the agent's current tile and `path` the output of a path
// search (start excluded, target last). Shortcuts are taken greedily from
// each waypoint to the farthest later waypoint in clear line of sight.
// The result follows the same convention: no start, target last.
#[must_use]
pub fn simplify_path(grid: &Grid,
                     start: Tile,
                     path: &[Tile],
                     radius: f32,
                     ignore_regions: &[TileRect]) -> Path {

    if path.is_empty() {
        return Path::new();
    }

    let mut waypoints = Path::with_capacity(path.len() + 1);
    waypoints.push(start);
    waypoints.extend_from_slice(path);

    let mut i = 0;
    while i + 1 < waypoints.len() {
        // j == i + 1 would remove nothing, stop short of it.
        for j in ((i + 2)..waypoints.len()).rev() {
            if is_walkable_line(grid, waypoints[i], waypoints[j], radius, ignore_regions) {
                waypoints.drain((i + 1)..j);
                break;
            }
        }
        i += 1;
    }

    // The agent is already standing on the start tile.
    waypoints.remove(0);
    waypoints
}
