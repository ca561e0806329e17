//! Coordinate types shared by the map projection and the route math.

use serde::{Deserialize, Serialize};

/// A position in the game's native 3D space (engine units, z is elevation).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldPoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Pixel position relative to the rendered map's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// Pixel dimensions of the rendered map image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapSize {
    pub width: f64,
    pub height: f64,
}

impl MapSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for MapSize {
    fn default() -> Self {
        Self::new(1320.0, 900.0)
    }
}
