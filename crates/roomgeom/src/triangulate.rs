//! Ear-clipping triangulation of simple polygons.
//!
//! Algorithm
//! - Scan the remaining vertices in order. Vertex `b` with neighbours `a` and
//!   `c` is an ear when the turn `a → b → c` is strictly counter-clockwise and
//!   no other remaining vertex lies in triangle `(a, b, c)` (boundary included).
//! - Clip the first ear found, emit its triangle, restart the scan.
//! - Stop at three vertices and emit the last triangle.
//!
//! Input is expected counter-clockwise. A simple CCW polygon with `n` vertices
//! yields `n - 2` triangles covering exactly its area. When a scan finds no ear
//! (clockwise or self-intersecting input), `triangulate` returns the triangles
//! clipped so far and `try_triangulate` reports `GeometryError::NoEar`.
//!
//! Complexity: O(n³) worst case, which is fine for room and furniture outlines.

use tracing::{debug, warn};

use crate::error::{GeometryError, Result};
use crate::predicates::cross_product;
use crate::shape::{Point, Polygon, Shape, Triangle};

/// Triangulate any shape; a triangle is returned as itself.
///
/// Never fails. On input without an ear the result is partial and a warning is
/// logged; use `try_triangulate` to treat that as an error.
pub fn triangulate(shape: &Shape) -> Vec<Triangle> {
    match shape {
        Shape::Triangle(t) => vec![*t],
        Shape::Polygon(poly) => {
            let clipped = clip_ears(poly.points());
            if let Some(remaining) = clipped.stuck_at {
                warn!(
                    remaining,
                    triangles = clipped.triangles.len(),
                    "ear clipping found no ear; returning partial triangulation"
                );
            }
            clipped.triangles
        }
    }
}

/// Strict variant: all `n - 2` triangles or `NoEar`.
pub fn try_triangulate(poly: &Polygon) -> Result<Vec<Triangle>> {
    let clipped = clip_ears(poly.points());
    match clipped.stuck_at {
        None => Ok(clipped.triangles),
        Some(remaining) => Err(GeometryError::NoEar { remaining }),
    }
}

struct Clipped {
    triangles: Vec<Triangle>,
    /// Vertex count left when no ear could be found.
    stuck_at: Option<usize>,
}

fn clip_ears(points: &[Point]) -> Clipped {
    let mut ring = points.to_vec();
    let mut triangles = Vec::with_capacity(ring.len().saturating_sub(2));
    while ring.len() > 3 {
        let Some(b) = find_ear(&ring) else {
            return Clipped {
                triangles,
                stuck_at: Some(ring.len()),
            };
        };
        let n = ring.len();
        let (a, c) = ((b + n - 1) % n, (b + 1) % n);
        triangles.push(Triangle::new(ring[a], ring[b], ring[c]));
        debug!(vertex = %ring[b], remaining = n - 1, "clipped ear");
        ring.remove(b);
    }
    if let &[p1, p2, p3] = ring.as_slice() {
        triangles.push(Triangle::new(p1, p2, p3));
    }
    Clipped {
        triangles,
        stuck_at: None,
    }
}

fn find_ear(ring: &[Point]) -> Option<usize> {
    let n = ring.len();
    (0..n).find(|&b| {
        let (a, c) = ((b + n - 1) % n, (b + 1) % n);
        if cross_product(ring[a], ring[b], ring[c]) <= 0 {
            return false;
        }
        let ear = Triangle::new(ring[a], ring[b], ring[c]);
        !(0..n)
            .filter(|&i| i != a && i != b && i != c)
            .any(|i| ear.contains(ring[i]))
    })
}
