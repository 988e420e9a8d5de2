use std::ops::{Index, IndexMut};
use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

use crate::utils::{
    Size,
    coords::{Tile, TileRect}
};

// ----------------------------------------------
// TileState
// ----------------------------------------------

// What sits on a tile. Anything but Empty blocks movement.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, Serialize, Deserialize)]
pub enum TileState {
    #[default]
    Empty,
    Building,
    Resource,
    Obstruction,
}

impl TileState {
    #[inline]
    pub fn is_occupied(self) -> bool {
        self != Self::Empty
    }
}

// ----------------------------------------------
// TileMatrix
// ----------------------------------------------

// Dense WxH matrix with one payload per tile.
// Can be indexed with `matrix[tile]`. Out of bounds access panics.
#[derive(Clone)]
pub struct TileMatrix<T> {
    size: Size,
    tiles: Vec<T>, // WxH tiles.
}

impl<T> TileMatrix<T> {
    #[inline]
    pub fn new(size: Size, tiles: Vec<T>) -> Self {
        assert!(size.is_valid(), "Invalid tile matrix size: {size}");
        assert!(tiles.len() == size.area(), "Expected {} tiles, got {}!", size.area(), tiles.len());
        Self { size, tiles }
    }

    #[inline]
    pub fn filled(size: Size, value: T) -> Self where T: Clone {
        assert!(size.is_valid(), "Invalid tile matrix size: {size}");
        Self { size, tiles: vec![value; size.area()] }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn is_within_bounds(&self, tile: Tile) -> bool {
        tile.x >= 0 && tile.x < self.size.width &&
        tile.z >= 0 && tile.z < self.size.height
    }

    #[inline]
    pub fn get(&self, tile: Tile) -> Option<&T> {
        self.tile_to_index(tile).map(|index| &self.tiles[index])
    }

    #[inline]
    pub fn fill(&mut self, value: T) where T: Clone {
        self.tiles.fill(value);
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.tiles.iter()
    }

    #[inline]
    pub fn index_to_tile(&self, index: usize) -> Tile {
        debug_assert!(index < self.tiles.len());
        let width = self.size.width as usize;
        Tile::new((index % width) as i32, (index / width) as i32)
    }

    #[inline]
    pub fn tile_to_index(&self, tile: Tile) -> Option<usize> {
        if !self.is_within_bounds(tile) {
            return None;
        }
        Some((tile.x + (tile.z * self.size.width)) as usize)
    }

    #[inline]
    fn checked_index(&self, tile: Tile) -> usize {
        self.tile_to_index(tile)
            .unwrap_or_else(|| panic!("Tile {tile} is out of bounds for grid of size {}!", self.size))
    }
}

// Immutable indexing
impl<T> Index<Tile> for TileMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, tile: Tile) -> &Self::Output {
        let index = self.checked_index(tile);
        &self.tiles[index]
    }
}

// Mutable indexing
impl<T> IndexMut<Tile> for TileMatrix<T> {
    #[inline]
    fn index_mut(&mut self, tile: Tile) -> &mut Self::Output {
        let index = self.checked_index(tile);
        &mut self.tiles[index]
    }
}

// ----------------------------------------------
// Grid
// ----------------------------------------------

// Long-lived occupancy grid. Stores only a state tag per tile,
// never a reference to whatever occupies it.
#[derive(Clone)]
pub struct Grid {
    states: TileMatrix<TileState>,
}

impl Grid {
    pub fn new(size: Size) -> Self {
        Self::with_tile_state(size, TileState::Empty)
    }

    pub fn with_tile_state(size: Size, state: TileState) -> Self {
        Self { states: TileMatrix::filled(size, state) }
    }

    // `states` is row-major, `size.width` tiles per row, Z increasing.
    pub fn with_tile_states(size: Size, states: Vec<TileState>) -> Self {
        Self { states: TileMatrix::new(size, states) }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.states.size()
    }

    #[inline]
    pub fn is_within_bounds(&self, tile: Tile) -> bool {
        self.states.is_within_bounds(tile)
    }

    // Row-major index of `tile`, None if outside the grid.
    #[inline]
    pub fn tile_to_index(&self, tile: Tile) -> Option<usize> {
        self.states.tile_to_index(tile)
    }

    // 4-connected neighbors of `tile` that fall inside the grid.
    #[inline]
    pub fn neighbors(&self, tile: Tile) -> ArrayVec<Tile, 4> {
        tile.neighbors()
            .into_iter()
            .filter(|neighbor| self.is_within_bounds(*neighbor))
            .collect()
    }

    // Panics if `tile` is outside the grid. An out of range query is
    // always a caller bug, so it is never clamped.
    #[inline]
    pub fn tile_state(&self, tile: Tile) -> TileState {
        self.states[tile]
    }

    #[inline]
    pub fn try_tile_state(&self, tile: Tile) -> Option<TileState> {
        self.states.get(tile).copied()
    }

    // Panics if `tile` is outside the grid.
    #[inline]
    pub fn is_occupied(&self, tile: Tile) -> bool {
        self.tile_state(tile).is_occupied()
    }

    // Occupied and not covered by any of the query's ignore regions.
    // Panics if `tile` is outside the grid.
    #[inline]
    pub fn is_blocked(&self, tile: Tile, ignore_regions: &[TileRect]) -> bool {
        self.is_occupied(tile) && !is_inside_ignore_region(tile, ignore_regions)
    }

    // Marks every tile in [start, start + size) with `state`.
    // Keeping the rect inside the grid is the caller's job; tiles
    // outside the grid panic.
    pub fn occupy(&mut self, start: Tile, size: Size, state: TileState) {
        for tile in &TileRect::new(start, size) {
            self.states[tile] = state;
        }
    }

    #[inline]
    pub fn free(&mut self, start: Tile, size: Size) {
        self.occupy(start, size, TileState::Empty);
    }

    pub fn clear(&mut self) {
        self.states.fill(TileState::Empty);
    }

    pub fn free_tile_count(&self) -> usize {
        self.states.iter().filter(|state| !state.is_occupied()).count()
    }
}

// True if `tile` falls inside any of the `regions`.
#[inline]
pub fn is_inside_ignore_region(tile: Tile, regions: &[TileRect]) -> bool {
    regions.iter().any(|region| region.contains(tile))
}

// ----------------------------------------------
// Unit Tests
// ----------------------------------------------
