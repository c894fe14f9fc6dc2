//! Open/closed detection for outlines drawn point by point.
//!
//! While drawing, the user finishes by tapping near the first point, which
//! leaves a last point that nearly duplicates the first. These helpers measure
//! that gap and drop the duplicate.

use super::measure::distance;
use crate::error::Result;
use crate::shape::Polygon;

/// Distance between the first and the last point.
pub fn gap_distance(polygon: &Polygon) -> f64 {
    let pts = polygon.points();
    distance(pts[0], pts[pts.len() - 1])
}

/// Whether the last point lies within `tolerance` of the first.
#[inline]
pub fn is_closed(polygon: &Polygon, tolerance: f64) -> bool {
    gap_distance(polygon) <= tolerance
}

/// Close an outline by dropping its last point.
///
/// An outline that is already closed is returned unchanged. Otherwise the last
/// point is assumed to be a near-duplicate of the first and removed; nothing is
/// interpolated or moved. Fails with `TooFewPoints` if fewer than three points
/// would remain.
pub fn auto_close(polygon: &Polygon, tolerance: f64) -> Result<Polygon> {
    if is_closed(polygon, tolerance) {
        return Ok(polygon.clone());
    }
    let mut points = polygon.points().to_vec();
    points.pop();
    Polygon::new(points)
}
