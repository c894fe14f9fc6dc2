//! Exact integer orientation and segment-intersection predicates.
//!
//! All arithmetic is done in `i128`, so every predicate is exact for the whole
//! `Centimeter` range: no epsilons, no rounding.
//!
//! Touch policy for `edges_intersect`
//! - Proper crossings count.
//! - An endpoint lying strictly inside the other segment (T-junction) counts.
//! - Collinear segments count only if they share more than a single point.
//! - Segments meeting only at a shared endpoint never count. This lets a chain
//!   of edges grow point by point without flagging its own joints.

use crate::shape::{Edge, Point};

/// z-component of `(a - o) × (b - o)`.
///
/// Positive for a counter-clockwise turn `o → a → b`, negative for clockwise,
/// zero when the three points are collinear.
#[inline]
pub fn cross_product(o: Point, a: Point, b: Point) -> i128 {
    let (ox, oy) = (o.x.value() as i128, o.y.value() as i128);
    let (ax, ay) = (a.x.value() as i128, a.y.value() as i128);
    let (bx, by) = (b.x.value() as i128, b.y.value() as i128);
    (ax - ox) * (by - oy) - (ay - oy) * (bx - ox)
}

/// Whether two edges intersect under the touch policy above.
pub fn edges_intersect(e1: &Edge, e2: &Edge) -> bool {
    let (o1, a1) = (e1.start(), e1.end());
    let (o2, a2) = (e2.start(), e2.end());

    let d1 = cross_product(o1, a1, o2);
    let d2 = cross_product(o1, a1, a2);
    let d3 = cross_product(o2, a2, o1);
    let d4 = cross_product(o2, a2, a1);

    if opposite(d1, d2) && opposite(d3, d4) {
        return true;
    }

    // Both edges have positive length, so one pair vanishing implies the other does.
    if (d1 == 0 && d2 == 0) || (d3 == 0 && d4 == 0) {
        return segments_overlap(o1, a1, o2, a2);
    }

    (d1 == 0 && on_segment_interior(o1, o2, a1))
        || (d2 == 0 && on_segment_interior(o1, a2, a1))
        || (d3 == 0 && on_segment_interior(o2, o1, a2))
        || (d4 == 0 && on_segment_interior(o2, a1, a2))
}

/// Proper crossing only: each edge strictly separates the other's endpoints.
///
/// Touches of any kind (shared endpoints, T-junctions, collinear overlap) do
/// not count. Used where flush contact is allowed, e.g. furniture against a wall.
pub fn edges_cross(e1: &Edge, e2: &Edge) -> bool {
    let (o1, a1) = (e1.start(), e1.end());
    let (o2, a2) = (e2.start(), e2.end());
    opposite(cross_product(o1, a1, o2), cross_product(o1, a1, a2))
        && opposite(cross_product(o2, a2, o1), cross_product(o2, a2, a1))
}

#[inline]
fn opposite(a: i128, b: i128) -> bool {
    (a > 0 && b < 0) || (a < 0 && b > 0)
}

#[inline]
fn in_bbox(p: Point, q: Point, r: Point) -> bool {
    q.x >= p.x.min(r.x) && q.x <= p.x.max(r.x) && q.y >= p.y.min(r.y) && q.y <= p.y.max(r.y)
}

/// `q` lies on segment `p–r`, endpoints included.
#[inline]
pub(crate) fn on_segment(p: Point, q: Point, r: Point) -> bool {
    cross_product(p, r, q) == 0 && in_bbox(p, q, r)
}

/// `q` lies strictly inside segment `p–r`. Callers guarantee collinearity.
#[inline]
fn on_segment_interior(p: Point, q: Point, r: Point) -> bool {
    q != p && q != r && in_bbox(p, q, r)
}

/// Overlap of two collinear segments beyond a single shared point.
///
/// Projects both segments onto the dominant axis of their common line; a
/// vertical line is the only case where x carries no information.
fn segments_overlap(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let use_x = p1.x != p2.x;
    let proj = |p: Point| if use_x { p.x.value() } else { p.y.value() };
    let (p_lo, p_hi) = ordered(proj(p1), proj(p2));
    let (q_lo, q_hi) = ordered(proj(q1), proj(q2));
    p_lo.max(q_lo) < p_hi.min(q_hi)
}

#[inline]
fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
