use std::iter::FusedIterator;

use crate::utils::{
    GridPoint,
    coords::{self, Tile, TileRect}
};

use super::grid::Grid;

// Reference:
//  Amanatides & Woo, "A Fast Voxel Traversal Algorithm for Ray Tracing" (1987).

// ----------------------------------------------
// GridTraversal
// ----------------------------------------------

// Enumerates, in order, every tile a line segment passes through.
// At each step we advance to whichever of the next X or Z grid line is
// nearer along the segment. When both are equally near the segment goes
// through a tile corner and both axes advance at once (diagonal step).
#[derive(Clone, Debug)]
pub struct GridTraversal {
    current: Tile,
    end: Tile,
    step_x: i32,
    step_z: i32,
    // Segment parameter `t` (0..1) at the next X/Z grid line crossing.
    t_max_x: f32,
    t_max_z: f32,
    // How much `t` advances to go across one whole tile.
    t_delta_x: f32,
    t_delta_z: f32,
    done: bool,
}

impl GridTraversal {
    pub fn new(from: GridPoint, to: GridPoint) -> Self {
        let start = coords::grid_point_to_tile(from);
        let end = coords::grid_point_to_tile(to);

        let (step_x, t_max_x, t_delta_x) = Self::axis_setup(from.x, to.x, start.x, end.x);
        let (step_z, t_max_z, t_delta_z) = Self::axis_setup(from.z, to.z, start.z, end.z);

        Self {
            current: start,
            end,
            step_x,
            step_z,
            t_max_x,
            t_max_z,
            t_delta_x,
            t_delta_z,
            done: false,
        }
    }

    // Returns (step, t_max, t_delta) for one axis.
    fn axis_setup(from: f32, to: f32, start_tile: i32, end_tile: i32) -> (i32, f32, f32) {
        let delta = to - from;
        if start_tile == end_tile || delta == 0.0 {
            // Never needs to cross a grid line on this axis.
            return (0, f32::INFINITY, f32::INFINITY);
        }

        let t_delta = 1.0 / delta.abs();
        if delta > 0.0 {
            let next_line = (start_tile + 1) as f32;
            (1, (next_line - from) / delta, t_delta)
        } else {
            let next_line = start_tile as f32;
            (-1, (from - next_line) / -delta, t_delta)
        }
    }

    #[inline]
    fn advance_x(&mut self) {
        self.current.x += self.step_x;
        self.t_max_x = if self.current.x == self.end.x { f32::INFINITY } else { self.t_max_x + self.t_delta_x };
    }

    #[inline]
    fn advance_z(&mut self) {
        self.current.z += self.step_z;
        self.t_max_z = if self.current.z == self.end.z { f32::INFINITY } else { self.t_max_z + self.t_delta_z };
    }
}

impl Iterator for GridTraversal {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;

        if self.current == self.end {
            self.done = true;
            return Some(result);
        }

        if self.t_max_x < self.t_max_z {
            self.advance_x();
        } else if self.t_max_z < self.t_max_x {
            self.advance_z();
        } else if self.t_max_x.is_finite() {
            // Exactly through a corner.
            self.advance_x();
            self.advance_z();
        } else {
            // Both axes settled; only reachable through float drift.
            self.current = self.end;
        }

        Some(result)
    }
}

impl FusedIterator for GridTraversal {}

// ----------------------------------------------
// segment_blocked
// ----------------------------------------------

// True if any tile along `from -> to` is occupied and not inside an
// ignore region. Stops at the first blocking tile. Endpoints outside
// the grid count as blocked.
pub fn segment_blocked(grid: &Grid, from: GridPoint, to: GridPoint, ignore_regions: &[TileRect]) -> bool {
    if !is_point_within_grid(grid, from) || !is_point_within_grid(grid, to) {
        return true;
    }

    GridTraversal::new(from, to).any(|tile| {
        !grid.is_within_bounds(tile) || grid.is_blocked(tile, ignore_regions)
    })
}

#[inline]
fn is_point_within_grid(grid: &Grid, point: GridPoint) -> bool {
    let size = grid.size();
    point.x >= 0.0 && point.x < size.width as f32 &&
    point.z >= 0.0 && point.z < size.height as f32
}

// ----------------------------------------------
// Unit Tests
// ----------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfind::grid::TileState;
    use crate::utils::Size;

    fn traverse(from: Tile, to: Tile) -> Vec<Tile> {
        GridTraversal::new(from.center(), to.center()).collect()
    }

    #[test]
    fn test_single_tile() {
        assert_eq!(traverse(Tile::new(2, 2), Tile::new(2, 2)), vec![Tile::new(2, 2)]);

        let tiles: Vec<Tile> = GridTraversal::new(GridPoint::new(1.1, 1.1), GridPoint::new(1.9, 1.8)).collect();
        assert_eq!(tiles, vec![Tile::new(1, 1)]);
    }

    #[test]
    fn test_axis_aligned() {
        let horizontal: Vec<Tile> = (0..5).map(|x| Tile::new(x, 3)).collect();
        assert_eq!(traverse(Tile::new(0, 3), Tile::new(4, 3)), horizontal);

        let vertical: Vec<Tile> = (0..5).rev().map(|z| Tile::new(1, z)).collect();
        assert_eq!(traverse(Tile::new(1, 4), Tile::new(1, 0)), vertical);
    }

    #[test]
    fn test_exact_diagonal_steps_both_axes() {
        let diagonal: Vec<Tile> = (0..5).map(|i| Tile::new(i, i)).collect();
        assert_eq!(traverse(Tile::new(0, 0), Tile::new(4, 4)), diagonal);

        let anti_diagonal: Vec<Tile> = (0..4).map(|i| Tile::new(3 - i, i)).collect();
        assert_eq!(traverse(Tile::new(3, 0), Tile::new(0, 3)), anti_diagonal);
    }

    #[test]
    fn test_shallow_slope() {
        // From [0.5,0.5] to [4.5,1.5]: crosses z=1 at x=2.5, which is mid-tile.
        let expected = vec![
            Tile::new(0, 0),
            Tile::new(1, 0),
            Tile::new(2, 0),
            Tile::new(2, 1),
            Tile::new(3, 1),
            Tile::new(4, 1),
        ];
        assert_eq!(traverse(Tile::new(0, 0), Tile::new(4, 1)), expected);

        let reversed: Vec<Tile> = expected.iter().rev().copied().collect();
        assert_eq!(traverse(Tile::new(4, 1), Tile::new(0, 0)), reversed);
    }

    #[test]
    fn test_steps_are_connected() {
        let points = [
            (GridPoint::new(0.2, 7.9), GridPoint::new(9.7, 0.3)),
            (GridPoint::new(3.3, 0.1), GridPoint::new(4.1, 9.9)),
            (GridPoint::new(9.5, 4.25), GridPoint::new(0.75, 5.5)),
        ];

        for (from, to) in points {
            let tiles: Vec<Tile> = GridTraversal::new(from, to).collect();
            assert_eq!(tiles.first(), Some(&coords::grid_point_to_tile(from)));
            assert_eq!(tiles.last(), Some(&coords::grid_point_to_tile(to)));

            for pair in tiles.windows(2) {
                let dx = (pair[1].x - pair[0].x).abs();
                let dz = (pair[1].z - pair[0].z).abs();
                assert!(dx <= 1 && dz <= 1 && dx + dz >= 1, "Disconnected step {} -> {}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_segment_blocked() {
        let mut grid = Grid::new(Size::new(6, 6));
        grid.occupy(Tile::new(2, 0), Size::new(1, 3), TileState::Obstruction);

        let a = Tile::new(0, 1).center();
        let b = Tile::new(5, 1).center();
        assert!(segment_blocked(&grid, a, b, &[]));

        // Ignoring the wall clears the line.
        let regions = [TileRect::new(Tile::new(2, 0), Size::new(1, 3))];
        assert!(!segment_blocked(&grid, a, b, &regions));

        // Passing above the wall is clear.
        assert!(!segment_blocked(&grid, Tile::new(0, 4).center(), Tile::new(5, 4).center(), &[]));

        // Endpoints off the grid are treated as blocked.
        assert!(segment_blocked(&grid, GridPoint::new(-0.1, 4.5), Tile::new(5, 4).center(), &[]));
        assert!(segment_blocked(&grid, Tile::new(0, 4).center(), GridPoint::new(6.0, 4.5), &[]));
    }
}
