//! Property-based tests for the planar geometry invariants using the `proptest` crate.

use proptest::prelude::*;

use blackhole_geometry::circle::{Circle, CircleIntersection, circle_intersect};
use blackhole_geometry::point::{Point2d, Point3d};
use blackhole_geometry::projection::project_to_plane;
use blackhole_geometry::vector::Vec3;
use blackhole_geometry::Tolerance;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Integer-valued coordinates, the shape of real input.
fn arb_int_point() -> impl Strategy<Value = Point3d> {
    (-1000i64..=1000, -1000i64..=1000, -1000i64..=1000)
        .prop_map(|(x, y, z)| Point3d::from_integers([x, y, z]))
}

/// Arbitrary real coordinates.
fn arb_point() -> impl Strategy<Value = Point3d> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0, -1000.0f64..1000.0)
        .prop_map(|(x, y, z)| Point3d::new(x, y, z))
}

fn arb_circle() -> impl Strategy<Value = Circle> {
    (-50.0f64..50.0, -50.0f64..50.0, 0.0f64..60.0)
        .prop_map(|(x, y, r)| Circle::new(Point2d::new(x, y), r))
}

fn assert_projection_preserves(p0: Point3d, p1: Point3d, p2: Point3d) -> Result<(), TestCaseError> {
    let tol = Tolerance::default();
    let proj = project_to_plane(p0, p1, p2);
    let pairs = [
        (p0.distance_to(&p1), proj.a.distance_to(&proj.b)),
        (p1.distance_to(&p2), proj.b.distance_to(&proj.c)),
        (p2.distance_to(&p0), proj.c.distance_to(&proj.a)),
    ];
    for (original, projected) in pairs {
        prop_assert!(
            tol.distances_match(original, projected),
            "distance {} became {}", original, projected
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// 1. Projection keeps every pairwise distance
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn projection_preserves_distances_integer(
        p0 in arb_int_point(),
        p1 in arb_int_point(),
        p2 in arb_int_point(),
    ) {
        assert_projection_preserves(p0, p1, p2)?;
    }
}

proptest! {
    #[test]
    fn projection_preserves_distances_real(
        p0 in arb_point(),
        p1 in arb_point(),
        p2 in arb_point(),
    ) {
        assert_projection_preserves(p0, p1, p2)?;
    }
}

// ---------------------------------------------------------------------------
// 2. Collinear input never produces NaN
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn collinear_projection_is_finite(
        origin in arb_int_point(),
        (dx, dy, dz) in (-20i64..=20, -20i64..=20, -20i64..=20),
        s in -5i64..=5,
        t in -5i64..=5,
    ) {
        let dir = Vec3::new(dx as f64, dy as f64, dz as f64);
        let p1 = origin + dir * s as f64;
        let p2 = origin + dir * t as f64;
        let proj = project_to_plane(origin, p1, p2);
        for p in proj.points() {
            prop_assert!(p.x.is_finite() && p.y.is_finite());
        }
        assert_projection_preserves(origin, p1, p2)?;
    }
}

// ---------------------------------------------------------------------------
// 3. Circle intersection does not depend on argument order
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn circle_intersection_symmetry(a in arb_circle(), b in arb_circle()) {
        let tol = Tolerance::default();
        let ab = circle_intersect(&a, &b, &tol);
        let ba = circle_intersect(&b, &a, &tol);
        match (ab, ba) {
            (CircleIntersection::Disjoint, CircleIntersection::Disjoint) => {}
            (CircleIntersection::Coincident(x), CircleIntersection::Coincident(y)) => {
                prop_assert!((x.radius - y.radius).abs() < 1e-12);
            }
            (CircleIntersection::TwoPoints(p1, q1), CircleIntersection::TwoPoints(p2, q2)) => {
                let same = |u: Point2d, v: Point2d| u.distance_to(&v) < 1e-9;
                prop_assert!(
                    (same(p1, p2) && same(q1, q2)) || (same(p1, q2) && same(q1, p2)),
                    "{:?} vs {:?}", ab, ba
                );
            }
            _ => {
                prop_assert!(false, "outcomes differ: {:?} vs {:?}", ab, ba);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Crossing points lie on both boundaries
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn crossing_points_lie_on_both_circles(a in arb_circle(), b in arb_circle()) {
        let tol = Tolerance::default();
        if let CircleIntersection::TwoPoints(p, q) = circle_intersect(&a, &b, &tol) {
            let scale = a.radius.max(b.radius).max(1.0);
            for point in [p, q] {
                prop_assert!((point.distance_to(&a.center) - a.radius).abs() < 1e-6 * scale);
                prop_assert!((point.distance_to(&b.center) - b.radius).abs() < 1e-6 * scale);
            }
        }
    }
}
