use std::iter::FusedIterator;
use serde::{Deserialize, Serialize};

use super::{GridPoint, Size, Vec3};

// ----------------------------------------------
// Tile
// ----------------------------------------------

// X,Z position in the tile grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub z: i32,
}

impl Tile {
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, z: 0 }
    }

    // Sentinel for "no tile", e.g. when the whole grid is occupied.
    #[inline]
    pub const fn invalid() -> Self {
        Self { x: -1, z: -1 }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x >= 0 && self.z >= 0
    }

    // Right, left, forward (+Z), back (-Z).
    #[inline]
    pub const fn neighbors(self) -> [Tile; 4] {
        [
            Tile::new(self.x + 1, self.z),
            Tile::new(self.x - 1, self.z),
            Tile::new(self.x, self.z + 1),
            Tile::new(self.x, self.z - 1),
        ]
    }

    #[inline]
    pub fn manhattan_distance(self, other: Tile) -> i32 {
        (self.x - other.x).abs() + (self.z - other.z).abs()
    }

    // Same as the distance between the two tile centers.
    #[inline]
    pub fn euclidean_distance(self, other: Tile) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dz = (self.z - other.z) as f32;
        ((dx * dx) + (dz * dz)).sqrt()
    }

    #[inline]
    pub fn center(self) -> GridPoint {
        GridPoint::new(self.x as f32 + 0.5, self.z as f32 + 0.5)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{},{}]", self.x, self.z)
    }
}

// ----------------------------------------------
// TileRect
// ----------------------------------------------

// Half-open rectangle of tiles: [start, start + size).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRect {
    pub start: Tile,
    pub size: Size,
}

impl TileRect {
    #[inline]
    pub const fn new(start: Tile, size: Size) -> Self {
        Self { start, size }
    }

    // 1x1 rect covering a single tile.
    #[inline]
    pub const fn single(tile: Tile) -> Self {
        Self { start: tile, size: Size::one() }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start.is_valid() && self.size.is_valid()
    }

    // Inclusive last tile.
    #[inline]
    pub fn end(&self) -> Tile {
        Tile::new(self.start.x + self.size.width - 1, self.start.z + self.size.height - 1)
    }

    #[inline]
    pub fn contains(&self, tile: Tile) -> bool {
        tile.x >= self.start.x && tile.x < self.start.x + self.size.width &&
        tile.z >= self.start.z && tile.z < self.start.z + self.size.height
    }

    #[inline]
    pub fn iter(&self) -> TileRectIter {
        TileRectIter::new(*self)
    }
}

impl std::fmt::Display for TileRect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let end = self.end();
        write!(f, "[{},{}; {},{}]", self.start.x, self.start.z, end.x, end.z)
    }
}

// ----------------------------------------------
// TileRectIter
// ----------------------------------------------

// Row-major walk over a TileRect (X first, then Z).
#[derive(Copy, Clone)]
pub struct TileRectIter {
    rect:   TileRect,
    curr_x: i32,
    curr_z: i32,
    done:   bool,
}

impl TileRectIter {
    #[inline]
    pub fn new(rect: TileRect) -> Self {
        Self {
            rect,
            curr_x: rect.start.x,
            curr_z: rect.start.z,
            // Empty or negative sizes yield nothing.
            done: rect.size.width <= 0 || rect.size.height <= 0,
        }
    }
}

impl Iterator for TileRectIter {
    type Item = Tile;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = Tile::new(self.curr_x, self.curr_z);
        let end = self.rect.end();

        if self.curr_x < end.x {
            self.curr_x += 1;
        } else if self.curr_z < end.z {
            self.curr_z += 1;
            self.curr_x = self.rect.start.x;
        } else {
            self.done = true;
        }

        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for TileRectIter {
    #[inline]
    fn len(&self) -> usize {
        if self.done {
            return 0;
        }
        let width = self.rect.size.width as usize;
        let total = width * (self.rect.size.height as usize);
        let z_offset = (self.curr_z - self.rect.start.z) as usize;
        let x_offset = (self.curr_x - self.rect.start.x) as usize;
        total - (z_offset * width + x_offset)
    }
}

impl FusedIterator for TileRectIter {}

impl IntoIterator for &TileRect {
    type Item = Tile;
    type IntoIter = TileRectIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// +-----------------------------------------------+
// |     COORDINATE SPACE TRANSFORMS REFERENCE     |
// +-----------------------------------------------+
// | Operation            | Function               |
// | -------------------- | ---------------------- |
// | World -> Tile        | world_to_tile()        |
// | Tile  -> World       | tile_to_world()        |
// | Plane point -> Tile  | grid_point_to_tile()   |
// +-----------------------------------------------+

// Floor-based: the tile that contains the point.
#[inline]
pub fn grid_point_to_tile(point: GridPoint) -> Tile {
    Tile::new(point.x.floor() as i32, point.z.floor() as i32)
}

#[inline]
pub fn world_to_tile(position: Vec3) -> Tile {
    grid_point_to_tile(position.to_grid_point())
}

// Center of the tile at the given world height.
#[inline]
pub fn tile_to_world(tile: Tile, height: f32) -> Vec3 {
    let center = tile.center();
    Vec3::new(center.x, height, center.z)
}

// ----------------------------------------------
// Unit Tests
// ----------------------------------------------
