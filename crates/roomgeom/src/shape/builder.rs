//! Incremental polygon construction with a self-intersection pre-flight check.

use super::{Edge, Point, Polygon};
use crate::error::{GeometryError, Result};
use crate::predicates::edges_intersect;

/// Owns a growing point list until `build()` turns it into a `Polygon`.
///
/// Lifecycle: empty → accumulating (`add`/`insert`) → built. `build` takes
/// `self`, so a finished builder cannot be touched again.
#[derive(Debug, Default)]
pub struct Builder {
    points: Vec<Point>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing points, e.g. from `Polygon::edit`.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Append without validation.
    pub fn add(&mut self, point: Point) -> &mut Self {
        self.points.push(point);
        self
    }

    /// Insert before `index` (`index == len` appends). No geometric validation.
    pub fn insert(&mut self, index: usize, point: Point) -> Result<&mut Self> {
        if index > self.points.len() {
            return Err(GeometryError::IndexOutOfRange {
                kind: "insert",
                index,
                len: self.points.len(),
            });
        }
        self.points.insert(index, point);
        Ok(self)
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pre-flight check before committing `point`.
    ///
    /// Returns `true` when the tentative edge `last → point` crosses no edge of
    /// the ring built so far (closing edge included). Edges sharing an endpoint
    /// with the tentative edge are exempt, so extending a chain never flags its
    /// own joint. With fewer than two points there is nothing to cross.
    /// Repeating the last point is refused: it would add a zero-length edge.
    pub fn can_add(&self, point: Point) -> bool {
        let n = self.points.len();
        if n < 2 {
            return true;
        }
        let start = self.points[n - 1];
        let Ok(tentative) = Edge::new(start, point) else {
            return false;
        };
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            if a == start || b == start || a == point || b == point {
                continue;
            }
            // Repeated points leave zero-length gaps in the ring; nothing to hit there.
            let Ok(existing) = Edge::new(a, b) else {
                continue;
            };
            if edges_intersect(&tentative, &existing) {
                return false;
            }
        }
        true
    }

    /// Finish: validate the point count and hand over the points.
    pub fn build(self) -> Result<Polygon> {
        Polygon::new(self.points)
    }
}
