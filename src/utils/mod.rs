use std::ops::{Add, Mul, Sub};
use serde::{Deserialize, Serialize};

pub mod coords;
pub mod hash;

// ----------------------------------------------
// Size
// ----------------------------------------------

// Integer width & height pair. For the tile grid `height`
// is the extent along the Z axis.
#[derive(Copy, Clone, Debug, Default, PartialOrd, Ord, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn one() -> Self {
        Self { width: 1, height: 1 }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[inline]
    pub fn area(&self) -> usize {
        debug_assert!(self.is_valid());
        (self.width as usize) * (self.height as usize)
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{},{}]", self.width, self.height)
    }
}

// ----------------------------------------------
// GridPoint
// ----------------------------------------------

// Continuous point on the grid plane, in tile units.
// Tile [x,z] covers [x, x+1) * [z, z+1).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: f32,
    pub z: f32,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, z: 0.0 }
    }

    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        (self.x * other.x) + (self.z * other.z)
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 { Self::new(self.x / len, self.z / len) } else { Self::zero() }
    }

    // Counter-clockwise perpendicular.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.z, self.x)
    }
}

impl Add for GridPoint {
    type Output = GridPoint;
    fn add(self, other: GridPoint) -> GridPoint {
        GridPoint::new(self.x + other.x, self.z + other.z)
    }
}

impl Sub for GridPoint {
    type Output = GridPoint;
    fn sub(self, other: GridPoint) -> GridPoint {
        GridPoint::new(self.x - other.x, self.z - other.z)
    }
}

impl Mul<f32> for GridPoint {
    type Output = GridPoint;
    fn mul(self, scalar: f32) -> GridPoint {
        GridPoint::new(self.x * scalar, self.z * scalar)
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{:.2},{:.2}]", self.x, self.z)
    }
}

// ----------------------------------------------
// Vec3
// ----------------------------------------------

// World space position. The grid lies on the XZ plane;
// Y is height and is carried through unchanged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    // "No position" marker returned when a search comes up empty.
    #[inline]
    pub const fn invalid() -> Self {
        Self { x: -1.0, y: -1.0, z: -1.0 }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::invalid()
    }

    #[inline]
    pub const fn to_grid_point(self) -> GridPoint {
        GridPoint::new(self.x, self.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{:.2},{:.2},{:.2}]", self.x, self.y, self.z)
    }
}
