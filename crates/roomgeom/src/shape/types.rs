//! Value types: points, edges, triangles, polygons and the closed `Shape` sum.
//!
//! - `Point`: integer centimeter coordinates, compared structurally.
//! - `Edge`: oriented segment with strictly positive length.
//! - `Triangle`: three points; boundary-inclusive containment by orientation signs.
//! - `Polygon`: ordered ring of at least three points; containment by ray casting.
//! - `Shape`: the two variants above behind one `points()` accessor.
//!
//! All values are immutable after construction; edits produce new values
//! (see `crate::edit`).

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::Builder;
use crate::error::{check_index, GeometryError, Result};
use crate::predicates::{cross_product, on_segment};
use crate::units::Centimeter;

/// Point on the floor plan, in centimeters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: Centimeter,
    pub y: Centimeter,
}

impl Point {
    pub const ORIGIN: Point = Point {
        x: Centimeter::ZERO,
        y: Centimeter::ZERO,
    };

    #[inline]
    pub fn new(x: Centimeter, y: Centimeter) -> Self {
        Self { x, y }
    }

    /// Build from raw centimeter values, validating both axes.
    pub fn from_xy(x: i32, y: i32) -> Result<Self> {
        Ok(Self::new(Centimeter::new(x)?, Centimeter::new(y)?))
    }

    /// Round a floating position to the centimeter grid.
    pub fn from_f64_rounded(x: f64, y: f64) -> Result<Self> {
        Ok(Self::new(
            Centimeter::from_f64_rounded(x)?,
            Centimeter::from_f64_rounded(y)?,
        ))
    }

    #[inline]
    pub fn from_vector_rounded(v: Vector2<f64>) -> Result<Self> {
        Self::from_f64_rounded(v.x, v.y)
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x.value() as f64, self.y.value() as f64)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Oriented segment `start → end` with length > 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    start: Point,
    end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Result<Self> {
        let dx = end.x.value() as i64 - start.x.value() as i64;
        let dy = end.y.value() as i64 - start.y.value() as i64;
        if dx == 0 && dy == 0 {
            return Err(GeometryError::ZeroLengthEdge);
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Same segment, opposite orientation.
    #[inline]
    pub fn reversed(&self) -> Edge {
        Edge {
            start: self.end,
            end: self.start,
        }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.end.to_vector() - self.start.to_vector()).norm()
    }
}

/// Triangle `p1, p2, p3`; the output unit of triangulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    #[inline]
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }

    #[inline]
    pub fn points(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Boundary-inclusive containment.
    ///
    /// Inside iff the three edge orientations never mix strictly positive and
    /// strictly negative signs; works for either winding.
    pub fn contains(&self, point: Point) -> bool {
        let s1 = cross_product(point, self.p1, self.p2);
        let s2 = cross_product(point, self.p2, self.p3);
        let s3 = cross_product(point, self.p3, self.p1);
        let has_neg = s1 < 0 || s2 < 0 || s3 < 0;
        let has_pos = s1 > 0 || s2 > 0 || s3 > 0;
        !(has_neg && has_pos)
    }

    /// Twice the signed area (positive for counter-clockwise order).
    #[inline]
    pub fn signed_area2(&self) -> i128 {
        cross_product(self.p1, self.p2, self.p3)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area2().unsigned_abs() as f64 / 2.0
    }
}

/// Closed ring of at least three points, in order.
///
/// The ring is implicit: the last point connects back to the first, so the
/// first point is never repeated at the end.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PolygonRepr", into = "PolygonRepr")]
pub struct Polygon {
    points: Vec<Point>,
}

#[derive(Clone, Serialize, Deserialize)]
struct PolygonRepr {
    points: Vec<Point>,
}

impl TryFrom<PolygonRepr> for Polygon {
    type Error = GeometryError;
    fn try_from(r: PolygonRepr) -> Result<Self> {
        Polygon::new(r.points)
    }
}

impl From<Polygon> for PolygonRepr {
    fn from(p: Polygon) -> Self {
        PolygonRepr { points: p.points }
    }
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints { got: points.len() });
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of vertices (also the number of edges).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn vertex(&self, index: usize) -> Result<Point> {
        check_index("vertex", index, self.points.len())?;
        Ok(self.points[index])
    }

    /// Endpoints of edge `index`, i.e. `points[index] → points[index + 1]`,
    /// wrapping from the last vertex to the first.
    pub fn edge_endpoints(&self, index: usize) -> Result<(Point, Point)> {
        let n = self.points.len();
        check_index("edge", index, n)?;
        Ok((self.points[index], self.points[(index + 1) % n]))
    }

    /// All edges as endpoint pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Point-in-polygon test.
    ///
    /// Points exactly on an edge count as inside. Everything else follows the
    /// parity of a rightward horizontal ray: an edge is crossed when its
    /// endpoints straddle the point's y (one strictly above, one not) and the
    /// x-intersection lies strictly right of the point. The comparison is
    /// cross-multiplied, so fractional crossings are exact and both windings
    /// of a ring agree.
    pub fn contains(&self, point: Point) -> bool {
        if self.edges().any(|(a, b)| on_segment(a, point, b)) {
            return true;
        }
        let (px, py) = (point.x.value() as i128, point.y.value() as i128);
        let n = self.points.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (pi, pj) = (self.points[i], self.points[j]);
            let (xi, yi) = (pi.x.value() as i128, pi.y.value() as i128);
            let (xj, yj) = (pj.x.value() as i128, pj.y.value() as i128);
            if (yi > py) != (yj > py) {
                // px < xi + (xj - xi) * (py - yi) / dy, without dividing
                let dy = yj - yi;
                let lhs = (px - xi) * dy;
                let rhs = (xj - xi) * (py - yi);
                let right_of_point = if dy > 0 { lhs < rhs } else { lhs > rhs };
                if right_of_point {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Twice the signed shoelace area; positive for counter-clockwise rings.
    pub fn signed_area2(&self) -> i128 {
        self.edges()
            .map(|(a, b)| {
                a.x.value() as i128 * b.y.value() as i128
                    - b.x.value() as i128 * a.y.value() as i128
            })
            .sum()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area2().unsigned_abs() as f64 / 2.0
    }

    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area2() > 0
    }

    /// Arithmetic mean of the vertices (not the area centroid).
    pub fn vertex_centroid(&self) -> Vector2<f64> {
        let sum = self
            .points
            .iter()
            .fold(Vector2::<f64>::zeros(), |acc, p| acc + p.to_vector());
        sum / self.points.len() as f64
    }

    /// Reopen this polygon for incremental editing.
    pub fn edit(&self) -> Builder {
        Builder::from_points(self.points.clone())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}

/// Closed set of shapes understood by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Triangle(Triangle),
    Polygon(Polygon),
}

impl Shape {
    pub fn points(&self) -> Vec<Point> {
        match self {
            Shape::Triangle(t) => t.points().to_vec(),
            Shape::Polygon(p) => p.points().to_vec(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        match self {
            Shape::Triangle(_) => 3,
            Shape::Polygon(p) => p.vertex_count(),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        match self {
            Shape::Triangle(t) => t.contains(point),
            Shape::Polygon(p) => p.contains(point),
        }
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

impl From<Triangle> for Polygon {
    fn from(t: Triangle) -> Self {
        Polygon {
            points: t.points().to_vec(),
        }
    }
}
