//! Edits that return a new polygon.

use std::f64::consts::PI;

use nalgebra::Vector2;
use tracing::debug;

use super::measure::{distance, heading};
use crate::error::{check_index, GeometryError, Result};
use crate::shape::{Point, Polygon};
use crate::units::{Degree, Length};

/// Set edge `edge_index` to `new_length` by moving only its end vertex.
///
/// The end vertex slides along the current edge direction; its start vertex and
/// every other vertex stay put, so the neighbouring edge changes too. A
/// zero-length edge has no direction and is returned unchanged.
pub fn adjust_edge_length(
    polygon: &Polygon,
    edge_index: usize,
    new_length: Length,
) -> Result<Polygon> {
    let (start, end) = polygon.edge_endpoints(edge_index)?;
    if new_length.is_zero() {
        return Err(GeometryError::NonPositiveLength);
    }
    let dir = end.to_vector() - start.to_vector();
    let current = dir.norm();
    if current == 0.0 {
        return Ok(polygon.clone());
    }
    let scale = new_length.value() as f64 / current;
    let moved = Point::from_vector_rounded(start.to_vector() + dir * scale)?;
    debug!(edge = edge_index, from = %end, to = %moved, "edge length adjusted");
    replace_vertex(polygon, (edge_index + 1) % polygon.vertex_count(), moved)
}

/// Replace one vertex. No simplicity check is made.
pub fn move_vertex(polygon: &Polygon, vertex_index: usize, new_position: Point) -> Result<Polygon> {
    check_index("vertex", vertex_index, polygon.vertex_count())?;
    replace_vertex(polygon, vertex_index, new_position)
}

/// Make the interior angle at `vertex_index` equal `angle`.
///
/// The incoming edge is the reference and stays fixed. The next vertex is
/// rotated about `vertex_index`, keeping the outgoing edge's length. Later
/// vertices are not realigned, so the outline may open up. `angle` must be
/// strictly positive.
pub fn adjust_angle_local(polygon: &Polygon, vertex_index: usize, angle: Degree) -> Result<Polygon> {
    let pts = polygon.points();
    let n = pts.len();
    check_index("vertex", vertex_index, n)?;
    if angle.value() <= 0.0 {
        return Err(GeometryError::AngleOutOfRange(angle.value()));
    }
    let prev = pts[(vertex_index + n - 1) % n];
    let cur = pts[vertex_index];
    let next_index = (vertex_index + 1) % n;

    let incoming = cur.to_vector() - prev.to_vector();
    let out_heading = heading(incoming) + PI - angle.to_radians();
    let out_len = distance(cur, pts[next_index]);
    let offset = Vector2::new(out_heading.cos(), out_heading.sin()) * out_len;
    let moved = Point::from_vector_rounded(cur.to_vector() + offset)?;
    debug!(vertex = vertex_index, %angle, to = %moved, "angle adjusted");
    replace_vertex(polygon, next_index, moved)
}

/// Uniformly scale the outline so edge `reference_edge` gets `new_length`.
///
/// The first vertex is the fixed origin. Every other vertex keeps its direction
/// from it with the distance scaled by `new_length / current_length`, so all
/// angles and length ratios survive up to rounding. A zero-length reference
/// edge leaves the polygon unchanged.
pub fn apply_similarity(
    polygon: &Polygon,
    reference_edge: usize,
    new_length: Length,
) -> Result<Polygon> {
    let (start, end) = polygon.edge_endpoints(reference_edge)?;
    if new_length.is_zero() {
        return Err(GeometryError::NonPositiveLength);
    }
    let current = distance(start, end);
    if current == 0.0 {
        return Ok(polygon.clone());
    }
    let k = new_length.value() as f64 / current;
    let origin = polygon.points()[0].to_vector();
    let points = polygon
        .points()
        .iter()
        .map(|p| Point::from_vector_rounded(origin + (p.to_vector() - origin) * k))
        .collect::<Result<Vec<_>>>()?;
    debug!(edge = reference_edge, scale = k, "similarity applied");
    Polygon::new(points)
}

fn replace_vertex(polygon: &Polygon, index: usize, point: Point) -> Result<Polygon> {
    let mut points = polygon.points().to_vec();
    points[index] = point;
    Polygon::new(points)
}
