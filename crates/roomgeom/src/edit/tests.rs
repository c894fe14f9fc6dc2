use super::*;
use crate::error::GeometryError;
use crate::shape::{Point, Polygon};
use crate::units::{Degree, Length};

fn p(x: i32, y: i32) -> Point {
    Point::from_xy(x, y).unwrap()
}

fn poly(coords: &[(i32, i32)]) -> Polygon {
    Polygon::new(coords.iter().map(|&(x, y)| p(x, y)).collect()).unwrap()
}

fn square() -> Polygon {
    poly(&[(0, 0), (100, 0), (100, 100), (0, 100)])
}

fn len(v: i32) -> Length {
    Length::new(v).unwrap()
}

fn deg(v: f64) -> Degree {
    Degree::new(v).unwrap()
}

#[test]
fn distances() {
    assert!((distance(p(0, 0), p(3, 4)) - 5.0).abs() < 1e-12);
    let (a, b) = (p(0, 0), p(100, 0));
    assert_eq!(distance_to_segment(p(50, 30), a, b), 30.0);
    // clamped to the endpoints
    assert_eq!(distance_to_segment(p(150, 0), a, b), 50.0);
    assert!((distance_to_segment(p(-3, -4), a, b) - 5.0).abs() < 1e-12);
    // degenerate segment
    assert!((distance_to_segment(p(3, 4), a, a) - 5.0).abs() < 1e-12);
}

#[test]
fn square_edge_lengths_and_angles() {
    let sq = square();
    assert_eq!(edge_lengths(&sq), vec![100, 100, 100, 100]);
    for a in interior_angles(&sq).unwrap() {
        assert!((a.value() - 90.0).abs() < 1e-9, "{a}");
    }
    assert!(matches!(
        interior_angle(&sq, 4),
        Err(GeometryError::IndexOutOfRange { kind: "vertex", .. })
    ));
}

#[test]
fn reflex_corner_reads_above_180() {
    let l = poly(&[(0, 0), (100, 0), (100, 50), (50, 50), (50, 100), (0, 100)]);
    let angles = interior_angles(&l).unwrap();
    assert!((angles[3].value() - 270.0).abs() < 1e-9);
    let total: f64 = angles.iter().map(|a| a.value()).sum();
    assert!((total - 720.0).abs() < 1e-9);
    assert_eq!(edge_lengths(&l), vec![100, 50, 50, 50, 50, 100]);
}

#[test]
fn adjust_edge_length_moves_only_the_end_vertex() {
    let sq = square();
    let adjusted = adjust_edge_length(&sq, 0, len(150)).unwrap();
    assert_eq!(adjusted.points()[1], p(150, 0));
    let lengths = edge_lengths(&adjusted);
    assert_eq!(lengths[0], 150);
    assert_eq!(lengths[2], 100);
    assert_eq!(lengths[3], 100);
    // input untouched
    assert_eq!(sq.points()[1], p(100, 0));

    // the closing edge moves the first vertex
    let closing = adjust_edge_length(&sq, 3, len(50)).unwrap();
    assert_eq!(closing.points()[0], p(0, 50));

    let diag = poly(&[(0, 0), (30, 40), (0, 40)]);
    let stretched = adjust_edge_length(&diag, 0, len(10)).unwrap();
    assert_eq!(stretched.points()[1], p(6, 8));
}

#[test]
fn adjust_edge_length_preconditions() {
    let sq = square();
    assert!(matches!(
        adjust_edge_length(&sq, 4, len(10)),
        Err(GeometryError::IndexOutOfRange { kind: "edge", index: 4, len: 4 })
    ));
    assert_eq!(
        adjust_edge_length(&sq, 0, Length::ZERO),
        Err(GeometryError::NonPositiveLength)
    );
    let with_dup = poly(&[(0, 0), (0, 0), (100, 0), (0, 100)]);
    assert_eq!(adjust_edge_length(&with_dup, 0, len(10)).unwrap(), with_dup);
}

#[test]
fn move_vertex_replaces_one_point() {
    let tri = poly(&[(0, 0), (100, 0), (50, 100)]);
    let moved = move_vertex(&tri, 2, p(50, 150)).unwrap();
    assert_eq!(moved.points(), &[p(0, 0), p(100, 0), p(50, 150)]);
    assert!(move_vertex(&tri, 3, p(0, 0)).is_err());
}

#[test]
fn adjust_angle_local_is_inverse_of_interior_angle() {
    let sq = square();
    for i in 0..4 {
        let same = adjust_angle_local(&sq, i, deg(90.0)).unwrap();
        assert_eq!(same, sq, "vertex {i}");
    }

    let sharp = adjust_angle_local(&sq, 1, deg(45.0)).unwrap();
    assert_eq!(sharp.points()[2], p(29, 71));
    assert!((interior_angle(&sharp, 1).unwrap().value() - 45.0).abs() < 1.0);
    // both adjacent edges keep their length
    let lengths = edge_lengths(&sharp);
    assert_eq!(lengths[0], 100);
    assert_eq!(lengths[1], 100);
    // the outline is not realigned downstream
    assert_eq!(sharp.points()[3], p(0, 100));
}

#[test]
fn adjust_angle_local_preconditions() {
    let sq = square();
    assert_eq!(
        adjust_angle_local(&sq, 0, Degree::ZERO),
        Err(GeometryError::AngleOutOfRange(0.0))
    );
    assert!(adjust_angle_local(&sq, 9, deg(90.0)).is_err());
}

#[test]
fn similarity_doubles_the_square() {
    let scaled = apply_similarity(&square(), 0, len(200)).unwrap();
    assert_eq!(edge_lengths(&scaled), vec![200, 200, 200, 200]);
    assert_eq!(scaled.points()[0], p(0, 0));
    assert_eq!(scaled.points()[2], p(200, 200));
}

#[test]
fn similarity_keeps_origin_and_angles() {
    let l = poly(&[(10, 10), (110, 10), (110, 60), (60, 60), (60, 110), (10, 110)]);
    let half = apply_similarity(&l, 1, len(25)).unwrap();
    assert_eq!(half.points()[0], p(10, 10));
    assert_eq!(edge_lengths(&half), vec![50, 25, 25, 25, 25, 50]);
    let before = interior_angles(&l).unwrap();
    let after = interior_angles(&half).unwrap();
    for (a, b) in before.iter().zip(&after) {
        assert!((a.value() - b.value()).abs() < 1e-9);
    }
    assert_eq!(
        apply_similarity(&l, 0, Length::ZERO),
        Err(GeometryError::NonPositiveLength)
    );
    assert!(apply_similarity(&l, 6, len(10)).is_err());
}

#[test]
fn nearest_vertex_uses_strict_threshold() {
    let tri = poly(&[(0, 0), (100, 0), (50, 100)]);
    assert_eq!(nearest_vertex(p(2, 2), &tri, 20.0), Some(0));
    assert_eq!(nearest_vertex(p(98, 1), &tri, 20.0), Some(1));
    assert_eq!(nearest_vertex(p(500, 500), &tri, 20.0), None);
    // exactly at the threshold is not a hit
    assert_eq!(nearest_vertex(p(0, 20), &tri, 20.0), None);
    // ties go to the lower index
    assert_eq!(nearest_vertex(p(50, 0), &tri, 60.0), Some(0));
}

#[test]
fn nearest_edge_scans_all_edges() {
    let sq = square();
    assert_eq!(nearest_edge(p(50, 5), &sq, 20.0), Some(0));
    assert_eq!(nearest_edge(p(50, -5), &sq, 20.0), Some(0));
    assert_eq!(nearest_edge(p(95, 50), &sq, 20.0), Some(1));
    assert_eq!(nearest_edge(p(50, 50), &sq, 20.0), None);
    // closing edge
    assert_eq!(nearest_edge(p(3, 60), &sq, EditCfg::default().pick_threshold), Some(3));
    // a corner is equally close to edges 0 and 3
    assert_eq!(nearest_edge(p(0, 0), &sq, 20.0), Some(0));
}

#[test]
fn closing_a_drawn_outline() {
    let tol = EditCfg::default().close_tolerance;
    let nearly = poly(&[(0, 0), (100, 0), (100, 100), (0, 100), (0, 1)]);
    assert_eq!(gap_distance(&nearly), 1.0);
    assert!(is_closed(&nearly, tol));
    assert_eq!(auto_close(&nearly, tol).unwrap(), nearly);

    let open = poly(&[(0, 0), (100, 0), (100, 100), (0, 100), (0, 5)]);
    assert!(!is_closed(&open, tol));
    assert!(is_closed(&open, 5.0));
    assert_eq!(auto_close(&open, tol).unwrap(), square());

    let tri = poly(&[(0, 0), (100, 0), (50, 100)]);
    assert_eq!(
        auto_close(&tri, tol),
        Err(GeometryError::TooFewPoints { got: 2 })
    );
}

#[test]
fn edit_cfg_defaults() {
    let cfg = EditCfg::default();
    assert_eq!(cfg.pick_threshold, 20.0);
    assert_eq!(cfg.close_tolerance, 1.0);
}
