use serde::{Deserialize, Serialize};

use crate::Tolerance;
use crate::point::Point2d;

/// A closed disk in the projection plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2d,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2d, radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "negative circle radius {radius}");
        Self { center, radius }
    }

    /// True when `point` lies inside the disk or on its boundary.
    pub fn contains(&self, point: &Point2d) -> bool {
        self.center.distance_squared_to(point) <= self.radius * self.radius
    }
}

/// Outcome of intersecting two circle boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleIntersection {
    /// Centers are farther apart than the radii reach.
    Disjoint,
    /// Boundaries cross; a tangency yields the same point twice.
    TwoPoints(Point2d, Point2d),
    /// One disk lies within the other. Carries the smaller disk, which is
    /// the whole of their intersection.
    Coincident(Circle),
}

impl CircleIntersection {
    pub fn is_disjoint(&self) -> bool {
        matches!(self, CircleIntersection::Disjoint)
    }
}

/// Order two circles by radius, smaller first.
pub fn by_radius(c1: Circle, c2: Circle) -> (Circle, Circle) {
    if c1.radius > c2.radius { (c2, c1) } else { (c1, c2) }
}

/// Intersect two circles using the chord construction.
///
/// With `R1 <= R2` and center distance `D`, the chord lies at distance
/// `d = (R1^2 - R2^2 + D^2) / 2D` from the smaller center along the center
/// line, and the crossing points sit `h = sqrt(R1^2 - d^2)` off that line.
/// See <http://paulbourke.net/geometry/circlesphere/>.
pub fn circle_intersect(c1: &Circle, c2: &Circle, tol: &Tolerance) -> CircleIntersection {
    let (small, large) = by_radius(*c1, *c2);
    let (r1, r2) = (small.radius, large.radius);
    let dx = large.center.x - small.center.x;
    let dy = large.center.y - small.center.y;
    let dist = (dx * dx + dy * dy).sqrt();

    if dist > r1 + r2 {
        return CircleIntersection::Disjoint;
    }
    if dist <= r2 - r1 {
        return CircleIntersection::Coincident(small);
    }

    // dist > r2 - r1 >= 0 here, so the division is safe.
    let chord_dist = (r1 * r1 - r2 * r2 + dist * dist) / (2.0 * dist);
    let h_squared = r1 * r1 - chord_dist * chord_dist;
    debug_assert!(
        h_squared >= -tol.chord_slack * (r1 * r1).max(1.0),
        "chord below the smaller circle: h^2 = {h_squared}"
    );
    let half_chord = h_squared.max(0.0).sqrt();

    let mid_x = small.center.x + chord_dist * dx / dist;
    let mid_y = small.center.y + chord_dist * dy / dist;
    let off_x = half_chord * dy / dist;
    let off_y = half_chord * dx / dist;

    CircleIntersection::TwoPoints(
        Point2d::new(mid_x + off_x, mid_y - off_y),
        Point2d::new(mid_x - off_x, mid_y + off_y),
    )
}

/// Whether disks `c1`, `c2` and `c3` share at least one point, judged from
/// the boundary of `c1` and `c2`.
///
/// Crossing boundaries overlap `c3` when either crossing point lies in it.
/// Nested disks reduce to the smaller one, which must touch `c3`.
pub fn pairwise_overlap(c1: &Circle, c2: &Circle, c3: &Circle, tol: &Tolerance) -> bool {
    match circle_intersect(c1, c2, tol) {
        CircleIntersection::Disjoint => false,
        CircleIntersection::TwoPoints(p, q) => c3.contains(&p) || c3.contains(&q),
        CircleIntersection::Coincident(inner) => !circle_intersect(&inner, c3, tol).is_disjoint(),
    }
}

/// `pairwise_overlap` tried with each of the three pairs as the base.
pub fn any_overlap(a: &Circle, b: &Circle, c: &Circle, tol: &Tolerance) -> bool {
    pairwise_overlap(a, b, c, tol) || pairwise_overlap(b, c, a, tol) || pairwise_overlap(c, a, b, tol)
}
