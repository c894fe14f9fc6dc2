//! Read-only measurements: distances, edge lengths, interior angles.

use nalgebra::Vector2;

use crate::error::{check_index, Result};
use crate::shape::{Point, Polygon};
use crate::units::Degree;

/// Euclidean distance in centimeters.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2.to_vector() - p1.to_vector()).norm()
}

/// Distance from `point` to the closed segment `a–b`.
///
/// Projects onto the segment's line and clamps the parameter to `[0, 1]`;
/// a degenerate segment falls back to the distance to `a`.
pub fn distance_to_segment(point: Point, a: Point, b: Point) -> f64 {
    let (p, a, b) = (point.to_vector(), a.to_vector(), b.to_vector());
    let d = b - a;
    let len2 = d.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&d) / len2).clamp(0.0, 1.0);
    (p - (a + d * t)).norm()
}

/// Length of every edge, closing edge included, rounded to whole centimeters.
pub fn edge_lengths(polygon: &Polygon) -> Vec<i64> {
    polygon
        .edges()
        .map(|(a, b)| distance(a, b).round() as i64)
        .collect()
}

/// Interior angle at `vertex_index` for a counter-clockwise ring.
///
/// Measured counter-clockwise from the ray towards the next vertex to the ray
/// towards the previous vertex, so convex corners of a CCW outline read below
/// 180° and reflex corners above. A clockwise ring reads `360° - angle`.
/// `adjust_angle_local` is the inverse of this measurement.
pub fn interior_angle(polygon: &Polygon, vertex_index: usize) -> Result<Degree> {
    let pts = polygon.points();
    let n = pts.len();
    check_index("vertex", vertex_index, n)?;
    let cur = pts[vertex_index].to_vector();
    let to_prev = pts[(vertex_index + n - 1) % n].to_vector() - cur;
    let to_next = pts[(vertex_index + 1) % n].to_vector() - cur;
    Degree::from_radians(heading(to_prev) - heading(to_next))
}

/// `interior_angle` for every vertex, in order.
pub fn interior_angles(polygon: &Polygon) -> Result<Vec<Degree>> {
    (0..polygon.vertex_count())
        .map(|i| interior_angle(polygon, i))
        .collect()
}

#[inline]
pub(super) fn heading(v: Vector2<f64>) -> f64 {
    v.y.atan2(v.x)
}
