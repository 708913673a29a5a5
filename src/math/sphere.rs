use crate::geometry::LatLon;

/// Cosine of the central angle between two positions, clamped to `[-1, 1]`.
fn central_cos(p1: &LatLon, p2: &LatLon) -> f64 {
    let (lat1, lat2) = (p1.lat.to_radians(), p2.lat.to_radians());
    let dlon = (p1.lon - p2.lon).to_radians();
    (lat1.cos() * lat2.cos() * dlon.cos() + lat1.sin() * lat2.sin()).clamp(-1.0, 1.0)
}

/// Central angle in radians between two positions.
#[must_use]
pub fn central_angle(p1: &LatLon, p2: &LatLon) -> f64 {
    central_cos(p1, p2).acos()
}

/// Distance along the surface of a sphere of the given radius.
#[must_use]
pub fn great_circle_distance(radius: f64, p1: &LatLon, p2: &LatLon) -> f64 {
    radius * central_angle(p1, p2)
}

/// Straight-line (chord) distance through a sphere of the given radius.
#[must_use]
pub fn chord_distance(radius: f64, p1: &LatLon, p2: &LatLon) -> f64 {
    radius * (2.0 - 2.0 * central_cos(p1, p2)).max(0.0).sqrt()
}
