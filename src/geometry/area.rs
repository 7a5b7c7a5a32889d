use geo::{Area, LineString, Polygon};

use crate::domain::Position;

/// Planar shoelace area of a ring, in squared coordinate units.
///
/// The ring is treated as implicitly closed. Fewer than three points have
/// no area.
pub fn ring_area(ring: &[Position]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    let exterior: LineString<f64> = ring
        .iter()
        .map(|&(x, y)| geo::coord! { x: x, y: y })
        .collect();

    Polygon::new(exterior, vec![]).unsigned_area()
}

/// Area of a polygon's exterior ring (holes are not subtracted).
pub fn exterior_area(polygon: &[Vec<Position>]) -> f64 {
    polygon.first().map(|ring| ring_area(ring)).unwrap_or(0.0)
}
