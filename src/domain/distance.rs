//! Straight-line travel distance between world positions.

use super::geometry::WorldPoint;

/// World units per kilometre.
pub const WORLD_UNITS_PER_KM: f64 = 10_000.0;

/// Full 3D Euclidean distance in raw world units. Elevation counts.
pub fn raw_distance(a: &WorldPoint, b: &WorldPoint) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// 3D distance in kilometres. Each coordinate is scaled before differencing
/// so results are reproducible for the same inputs.
pub fn distance_km(a: &WorldPoint, b: &WorldPoint) -> f64 {
    let scaled = |p: &WorldPoint| {
        WorldPoint::new(
            p.x / WORLD_UNITS_PER_KM,
            p.y / WORLD_UNITS_PER_KM,
            p.z / WORLD_UNITS_PER_KM,
        )
    };
    raw_distance(&scaled(a), &scaled(b))
}

/// Human-readable distance: metres below one kilometre, otherwise km.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.4} meters", km * 1000.0)
    } else {
        format!("{km:.4} km")
    }
}
