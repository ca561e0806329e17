//! Projection of world positions onto the rendered map image.
//!
//! The map art covers a fixed rectangle of the world. A border is reserved
//! on every side as a fraction of the current pixel size, so positions must
//! be recomputed whenever the map is resized.

#![allow(dead_code)]

use super::geometry::{MapSize, ScreenPoint, WorldPoint};

/// Horizontal border as a fraction of map width.
pub const BORDER_X_FRACTION: f64 = 0.08;
/// Vertical border as a fraction of map height.
pub const BORDER_Y_FRACTION: f64 = 0.13;
/// Extra top offset (two thirds of 5%) pushing markers downward.
pub const TOP_MARGIN_FRACTION: f64 = 0.0333;

/// Width:height ratio of the map artwork (originally drawn at 1320x900).
pub const MAP_ASPECT_RATIO: f64 = 1320.0 / 900.0;

/// Axis-aligned world rectangle that the map artwork covers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Extremes of every settlement on the shipped map.
pub const WORLD_BOUNDS: WorldBounds = WorldBounds {
    min_x: -1_974_887.420323,
    max_x: 63_377.039789148,
    min_y: -1_180_489.317986,
    max_y: 171_850.471882255,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapTransform {
    bounds: WorldBounds,
    size: MapSize,
}

impl MapTransform {
    pub fn new(size: MapSize) -> Self {
        Self::with_bounds(WORLD_BOUNDS, size)
    }

    pub fn with_bounds(bounds: WorldBounds, size: MapSize) -> Self {
        Self { bounds, size }
    }

    pub fn size(&self) -> MapSize {
        self.size
    }

    pub fn border_x(&self) -> f64 {
        self.size.width * BORDER_X_FRACTION
    }

    pub fn border_y(&self) -> f64 {
        self.size.height * BORDER_Y_FRACTION
    }

    pub fn top_margin(&self) -> f64 {
        self.size.height * TOP_MARGIN_FRACTION
    }

    /// Projects `point` to pixels. Elevation is ignored and world Y is
    /// flipped, since north is up on the map but screen Y grows downward.
    pub fn to_screen(&self, point: &WorldPoint) -> ScreenPoint {
        let border_x = self.border_x();
        let border_y = self.border_y();
        let inner_width = self.size.width - 2.0 * border_x;
        let inner_height = self.size.height - 2.0 * border_y;

        let bounds = &self.bounds;
        let tx = (point.x - bounds.min_x) / (bounds.max_x - bounds.min_x);
        let ty = (point.y - bounds.min_y) / (bounds.max_y - bounds.min_y);

        ScreenPoint {
            x: border_x + tx * inner_width,
            y: border_y + self.top_margin() + (inner_height - ty * inner_height),
        }
    }
}

/// One-shot projection against the shipped world bounds.
pub fn transform_coordinates(point: &WorldPoint, map_width: f64, map_height: f64) -> ScreenPoint {
    MapTransform::new(MapSize::new(map_width, map_height)).to_screen(point)
}

/// Largest map size with the artwork's aspect ratio that fits the viewport.
/// Fits to width first and falls back to height when that is too tall.
pub fn fit_map_to_viewport(viewport_width: f64, viewport_height: f64) -> MapSize {
    let width = viewport_width;
    let height = width / MAP_ASPECT_RATIO;
    if height > viewport_height {
        MapSize::new(viewport_height * MAP_ASPECT_RATIO, viewport_height)
    } else {
        MapSize::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn corners_land_on_the_inner_rectangle() {
        let transform = MapTransform::new(MapSize::new(1000.0, 600.0));
        let top_left = transform.to_screen(&WorldPoint::new(
            WORLD_BOUNDS.min_x,
            WORLD_BOUNDS.max_y,
            0.0,
        ));
        let bottom_right = transform.to_screen(&WorldPoint::new(
            WORLD_BOUNDS.max_x,
            WORLD_BOUNDS.min_y,
            0.0,
        ));

        assert!(close(top_left.x, 80.0));
        assert!(close(top_left.y, 78.0 + 19.98));
        assert!(close(bottom_right.x, 920.0));
        assert!(close(bottom_right.y, 600.0 - 78.0 + 19.98));
    }

    #[test]
    fn projection_is_monotonic_per_axis() {
        let transform = MapTransform::new(MapSize::default());
        let west = transform.to_screen(&WorldPoint::new(-1_500_000.0, -500_000.0, 0.0));
        let east = transform.to_screen(&WorldPoint::new(-200_000.0, -500_000.0, 0.0));
        let north = transform.to_screen(&WorldPoint::new(-500_000.0, 100_000.0, 0.0));
        let south = transform.to_screen(&WorldPoint::new(-500_000.0, -900_000.0, 0.0));

        assert!(east.x > west.x);
        assert!(close(east.y, west.y));
        assert!(north.y < south.y);
        assert!(close(north.x, south.x));
    }

    #[test]
    fn elevation_does_not_move_markers() {
        let low = transform_coordinates(&WorldPoint::new(-884_751.5, -325_649.1, 0.0), 1320.0, 900.0);
        let high =
            transform_coordinates(&WorldPoint::new(-884_751.5, -325_649.1, 50_000.0), 1320.0, 900.0);
        assert_eq!(low, high);
    }

    #[test]
    fn borders_scale_with_map_size() {
        let small = MapTransform::new(MapSize::new(660.0, 450.0));
        let large = MapTransform::new(MapSize::new(1320.0, 900.0));
        let point = WorldPoint::new(-1_000_000.0, -400_000.0, 0.0);

        let a = small.to_screen(&point);
        let b = large.to_screen(&point);
        assert!(close(a.x * 2.0, b.x));
        assert!(close(a.y * 2.0, b.y));
    }

    #[test]
    fn viewport_fit_keeps_aspect_ratio() {
        let wide = fit_map_to_viewport(2000.0, 900.0);
        assert!(close(wide.height, 900.0));
        assert!(close(wide.width, 1320.0));

        let tall = fit_map_to_viewport(1320.0, 2000.0);
        assert!(close(tall.width, 1320.0));
        assert!(close(tall.height, 900.0));
    }
}
