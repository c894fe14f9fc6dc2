use proptest::prelude::*;
use roomgeom::edit::{apply_similarity, distance};
use roomgeom::predicates::{cross_product, edges_intersect};
use roomgeom::prelude::*;

fn pt(x: i32, y: i32) -> Point {
    Point::from_xy(x, y).unwrap()
}

fn small_point() -> impl Strategy<Value = Point> {
    // A tight grid makes collinear and touching configurations common.
    (-12i32..=12, -12i32..=12).prop_map(|(x, y)| pt(x, y))
}

fn small_edge() -> impl Strategy<Value = Edge> {
    (small_point(), small_point())
        .prop_filter("zero-length edge", |(a, b)| a != b)
        .prop_map(|(a, b)| Edge::new(a, b).unwrap())
}

fn random_cfg() -> RandomPolygonCfg {
    RandomPolygonCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 40 },
        ..RandomPolygonCfg::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn intersection_is_symmetric_and_orientation_free(e1 in small_edge(), e2 in small_edge()) {
        let r = edges_intersect(&e1, &e2);
        prop_assert_eq!(r, edges_intersect(&e2, &e1));
        prop_assert_eq!(r, edges_intersect(&e1.reversed(), &e2));
        prop_assert_eq!(r, edges_intersect(&e1, &e2.reversed()));
        prop_assert_eq!(r, edges_intersect(&e1.reversed(), &e2.reversed()));
    }

    #[test]
    fn shared_endpoint_alone_is_not_an_intersection(
        s in small_point(),
        a in small_point(),
        b in small_point(),
    ) {
        prop_assume!(cross_product(s, a, b) != 0);
        let e1 = Edge::new(s, a).unwrap();
        let e2 = Edge::new(s, b).unwrap();
        prop_assert!(!edges_intersect(&e1, &e2));
        prop_assert!(!edges_intersect(&e1.reversed(), &e2));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ear_clipping_yields_n_minus_2_triangles_covering_the_area(seed in any::<u64>()) {
        let poly = random_simple_polygon(random_cfg(), seed).unwrap();
        let tris = try_triangulate(&poly).unwrap();
        prop_assert_eq!(tris.len(), poly.vertex_count() - 2);
        for t in &tris {
            prop_assert!(t.signed_area2() > 0);
            let [a, b, c] = t.points();
            prop_assert!(a != b && b != c && a != c);
        }
        let sum: f64 = tris.iter().map(Triangle::area).sum();
        prop_assert!((sum - poly.area()).abs() < 1e-6);
        prop_assert_eq!(triangulate(&Shape::Polygon(poly)), tris);
    }

    #[test]
    fn similarity_scales_every_edge(
        seed in any::<u64>(),
        edge in 0usize..40,
        new_len in 1i32..=3000,
    ) {
        let poly = random_simple_polygon(random_cfg(), seed).unwrap();
        let edge = edge % poly.vertex_count();
        let (a, b) = poly.edge_endpoints(edge).unwrap();
        let current = distance(a, b);
        prop_assume!(current > 0.0);
        let k = new_len as f64 / current;

        let scaled = apply_similarity(&poly, edge, Length::new(new_len).unwrap()).unwrap();
        prop_assert_eq!(scaled.points()[0], poly.points()[0]);
        for ((p1, p2), (q1, q2)) in poly.edges().zip(scaled.edges()) {
            let expected = k * distance(p1, p2);
            // each endpoint moves at most half a centimeter per axis
            prop_assert!((distance(q1, q2) - expected).abs() <= 1.5);
        }
    }

    #[test]
    fn convex_polygons_contain_their_vertices_and_midpoints(seed in any::<u64>()) {
        let cfg = RandomPolygonCfg {
            vertex_count: VertexCount::Uniform { min: 3, max: 24 },
            radial_jitter: 0.0,
            ..RandomPolygonCfg::default()
        };
        let circle = random_simple_polygon(cfg, seed).unwrap();
        // doubled coordinates keep every edge midpoint on the grid
        let doubled: Vec<Point> = circle
            .points()
            .iter()
            .map(|p| pt(2 * p.x.value(), 2 * p.y.value()))
            .collect();
        let poly = Polygon::new(doubled).unwrap();
        for (a, b) in poly.edges() {
            prop_assert!(poly.contains(a));
            let mid = pt(
                (a.x.value() + b.x.value()) / 2,
                (a.y.value() + b.y.value()) / 2,
            );
            prop_assert!(poly.contains(mid));
        }
        prop_assert!(poly.contains(Point::ORIGIN));
        prop_assert!(!poly.contains(pt(1_000_000, 1_000_000)));
        prop_assert!(!poly.contains(pt(-1_000_000, 0)));
    }

    #[test]
    fn builder_accepts_every_point_of_a_simple_polygon(seed in any::<u64>()) {
        let poly = random_simple_polygon(random_cfg(), seed).unwrap();
        let mut b = Builder::new();
        for &p in poly.points() {
            prop_assert!(b.can_add(p));
            b.add(p);
        }
        prop_assert_eq!(b.build().unwrap(), poly);
    }
}
