//! Hit testing: which vertex or edge lies under a tap.
//!
//! Linear scans. A candidate only wins when strictly closer than the best so
//! far, which starts at `threshold`; ties therefore go to the lowest index and
//! a feature exactly at `threshold` is not picked.

use super::measure::{distance, distance_to_segment};
use crate::shape::{Point, Polygon};

/// Index of the vertex closest to `point` within `threshold`.
pub fn nearest_vertex(point: Point, polygon: &Polygon, threshold: f64) -> Option<usize> {
    nearest_below(
        polygon.points().iter().map(|&v| distance(point, v)),
        threshold,
    )
}

/// Index of the edge (`i → i + 1`, wrapping) closest to `point` within `threshold`.
pub fn nearest_edge(point: Point, polygon: &Polygon, threshold: f64) -> Option<usize> {
    nearest_below(
        polygon
            .edges()
            .map(|(a, b)| distance_to_segment(point, a, b)),
        threshold,
    )
}

fn nearest_below(distances: impl Iterator<Item = f64>, threshold: f64) -> Option<usize> {
    let mut best = None;
    let mut best_dist = threshold;
    for (i, d) in distances.enumerate() {
        if d < best_dist {
            best_dist = d;
            best = Some(i);
        }
    }
    best
}
