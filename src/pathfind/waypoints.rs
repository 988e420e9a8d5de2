use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::utils::{
    Vec3,
    coords::{self, Tile}
};

// ----------------------------------------------
// WaypointQueue
// ----------------------------------------------

// World positions an agent walks through, next one first.
//
// Consumed from the front as the agent reaches each waypoint. There is
// no rewind and the queue is not Clone: when it goes stale (the grid
// changed, the order changed) drop it and request a new one.
#[derive(Debug, Default)]
pub struct WaypointQueue {
    waypoints: VecDeque<Vec3>,
}

impl WaypointQueue {
    #[inline]
    pub fn new() -> Self {
        Self { waypoints: VecDeque::new() }
    }

    // Tile centers at the given world height.
    pub fn from_tiles(tiles: &[Tile], height: f32) -> Self {
        Self {
            waypoints: tiles.iter().map(|tile| coords::tile_to_world(*tile, height)).collect(),
        }
    }

    #[inline]
    pub fn next_waypoint(&mut self) -> Option<Vec3> {
        self.waypoints.pop_front()
    }

    #[inline]
    pub fn peek(&self) -> Option<&Vec3> {
        self.waypoints.front()
    }

    #[inline]
    pub fn destination(&self) -> Option<&Vec3> {
        self.waypoints.back()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

impl Iterator for WaypointQueue {
    type Item = Vec3;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_waypoint()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.waypoints.len(), Some(self.waypoints.len()))
    }
}

impl ExactSizeIterator for WaypointQueue {}
impl FusedIterator for WaypointQueue {}
