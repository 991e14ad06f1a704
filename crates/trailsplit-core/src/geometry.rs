//! Point-to-point geometry primitives.

use crate::track::TrackPoint;

/// Earth radius in kilometers.
///
/// The classifier thresholds and effort constants were calibrated
/// against distances computed on a 6371 km sphere, so this stays an
/// exact constant rather than the mean-radius value other libraries use.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers, via the
/// haversine formula.
///
/// Pure and symmetric; zero for identical points, never negative.
pub fn distance_km(a: &TrackPoint, b: &TrackPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Total path length over consecutive points, in kilometers.
///
/// Zero for fewer than two points.
pub fn path_distance_km(points: &[TrackPoint]) -> f64 {
    points.windows(2).map(|w| distance_km(&w[0], &w[1])).sum()
}

/// Index of the track point closest to `(lat, lon)`.
///
/// Linear scan with a strict `<` comparison, so ties resolve to the
/// lowest index. `points` must be non-empty; the engine checks that at
/// its boundary.
pub fn nearest_index(points: &[TrackPoint], lat: f64, lon: f64) -> usize {
    let target = TrackPoint::new(lat, lon, 0.0);
    let mut closest = 0;
    let mut min_distance = f64::INFINITY;

    for (i, point) in points.iter().enumerate() {
        let distance = distance_km(&target, point);
        if distance < min_distance {
            min_distance = distance;
            closest = i;
        }
    }

    closest
}
