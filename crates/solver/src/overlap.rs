//! The overlap predicate over all role assignments.
//!
//! Each body is given an exclusion disk whose radius is a fixed multiple of
//! the search radius `r`. Two multiplier sets exist, and each can be handed
//! to the bodies in any of the three cyclic orders. The predicate holds when
//! any of those six configurations has three disks sharing a point.

use blackhole_geometry::{Circle, Point2d, Projection, Tolerance, any_overlap};
use serde::{Deserialize, Serialize};

/// Radius multipliers handed to the bodies in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleAssignment {
    /// `(1, 3, 3)`
    Spread,
    /// `(5, 1, 1)`
    Dominant,
}

impl RoleAssignment {
    pub const ALL: [RoleAssignment; 2] = [RoleAssignment::Spread, RoleAssignment::Dominant];

    pub fn multipliers(self) -> [f64; 3] {
        match self {
            RoleAssignment::Spread => [1.0, 3.0, 3.0],
            RoleAssignment::Dominant => [5.0, 1.0, 1.0],
        }
    }

    /// Exclusion disks for `bodies` at search radius `r`.
    pub fn circles(self, bodies: [Point2d; 3], r: f64) -> [Circle; 3] {
        let m = self.multipliers();
        [
            Circle::new(bodies[0], m[0] * r),
            Circle::new(bodies[1], m[1] * r),
            Circle::new(bodies[2], m[2] * r),
        ]
    }
}

/// The first configuration found to overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapWitness {
    /// How far the bodies were rotated: 0 is `(a, b, c)`, 1 is `(b, c, a)`,
    /// 2 is `(c, a, b)`.
    pub rotation: usize,
    pub assignment: RoleAssignment,
}

fn rotated(points: [Point2d; 3], rotation: usize) -> [Point2d; 3] {
    [
        points[rotation % 3],
        points[(rotation + 1) % 3],
        points[(rotation + 2) % 3],
    ]
}

/// Search all six configurations at radius `r`, in rotation-major order.
pub fn find_overlap(points: [Point2d; 3], r: f64, tol: &Tolerance) -> Option<OverlapWitness> {
    for rotation in 0..3 {
        let bodies = rotated(points, rotation);
        for assignment in RoleAssignment::ALL {
            let [a, b, c] = assignment.circles(bodies, r);
            if any_overlap(&a, &b, &c, tol) {
                return Some(OverlapWitness {
                    rotation,
                    assignment,
                });
            }
        }
    }
    None
}

/// Whether any role assignment makes the three exclusion disks meet at radius `r`.
pub fn overlaps_at_radius(a: Point2d, b: Point2d, c: Point2d, r: f64, tol: &Tolerance) -> bool {
    find_overlap([a, b, c], r, tol).is_some()
}

/// The overlap predicate bound to one projected triangle.
#[derive(Debug, Clone, Copy)]
pub struct OverlapPredicate {
    points: [Point2d; 3],
    tolerance: Tolerance,
}

impl OverlapPredicate {
    pub fn new(projection: &Projection, tolerance: Tolerance) -> Self {
        Self::from_points(projection.points(), tolerance)
    }

    pub fn from_points(points: [Point2d; 3], tolerance: Tolerance) -> Self {
        Self { points, tolerance }
    }

    pub fn overlaps(&self, r: f64) -> bool {
        self.witness(r).is_some()
    }

    pub fn witness(&self, r: f64) -> Option<OverlapWitness> {
        find_overlap(self.points, r, &self.tolerance)
    }
}
