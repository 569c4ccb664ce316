//! Rotation of three 3D points into the XY plane.
//!
//! The triangle is translated so its first vertex sits at the origin, then
//! rotated about X and about Y until its normal points along +Z. Both steps
//! are rotations, so pairwise distances survive and the three images share
//! z = 0 up to rounding.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::matrix::{Matrix, RotationMatrix};
use crate::point::{Point2d, Point3d};
use crate::vector::Vec3;

/// The result of flattening a triangle onto the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub a: Point2d,
    pub b: Point2d,
    pub c: Point2d,
    /// Plane normal before rotation.
    pub normal: Vec3,
    /// True when the points were collinear and `fallback_normal` was used.
    pub degenerate: bool,
    /// Largest |z| left on the projected points.
    pub residual_z: f64,
}

impl Projection {
    pub fn points(&self) -> [Point2d; 3] {
        [self.a, self.b, self.c]
    }

    pub fn max_pairwise_distance(&self) -> f64 {
        self.a
            .distance_to(&self.b)
            .max(self.b.distance_to(&self.c))
            .max(self.c.distance_to(&self.a))
    }
}

/// Normal used when `edge1 x edge2` vanishes.
///
/// Any plane through a line keeps distances along it, so the choice only has
/// to be deterministic. The first nonzero edge is inspected: a zero component
/// at index `j` makes the unit axis `e_j` perpendicular to it; with no zero
/// component `(y, -x, 0)` is perpendicular instead.
pub fn fallback_normal(edge1: Vec3, edge2: Vec3) -> Vec3 {
    let edge = if edge1.is_zero() { edge2 } else { edge1 };
    match (0..3).find(|&j| edge[j] == 0.0) {
        Some(j) => Vec3::axis(j),
        None => Vec3::new(edge.y, -edge.x, 0.0),
    }
}

/// Signed angle that rotates `v` about X onto the XZ half-plane with z >= 0.
///
/// Equals `atan2((v_yz x Z) . X, v_yz . Z)` with `v_yz = (0, v.y, v.z)`.
fn angle_about_x(v: Vec3) -> f64 {
    if v.y == 0.0 && v.z == 0.0 {
        return 0.0;
    }
    v.y.atan2(v.z)
}

/// Signed angle that rotates `v` about Y onto +Z, assuming `v.y == 0`.
///
/// Equals `atan2((v x Z) . Y, v . Z)`.
fn angle_about_y(v: Vec3) -> f64 {
    if v.is_zero() {
        return 0.0;
    }
    (-v.x).atan2(v.z)
}

/// Project three points onto a plane, preserving their pairwise distances.
///
/// The first point always lands on the origin.
#[instrument(level = "debug", skip_all, fields(p0 = ?p0.to_array(), p1 = ?p1.to_array(), p2 = ?p2.to_array()))]
pub fn project_to_plane(p0: Point3d, p1: Point3d, p2: Point3d) -> Projection {
    let edge1 = p1 - p0;
    let edge2 = p2 - p0;

    let mut normal = edge1.cross(&edge2);
    let degenerate = normal.is_zero();
    if degenerate {
        normal = fallback_normal(edge1, edge2);
        debug!(normal = ?normal.to_array(), "collinear points, using fallback normal");
    }

    // Row 0 tracks the normal, rows 1-3 the translated points.
    let mut frame: Matrix<4, 3> = Matrix::from_rows([
        normal.to_array(),
        Vec3::ZERO.to_array(),
        edge1.to_array(),
        edge2.to_array(),
    ]);

    let theta_x = angle_about_x(frame.row_vec3(0));
    frame = frame * RotationMatrix::rotation_x(theta_x);

    let theta_y = angle_about_y(frame.row_vec3(0));
    frame = frame * RotationMatrix::rotation_y(theta_y);

    let residual_z = (1..4).map(|i| frame.rows[i][2].abs()).fold(0.0, f64::max);
    debug!(theta_x, theta_y, residual_z, "rotated triangle into XY plane");

    let flat = |i: usize| Point2d::new(frame.rows[i][0], frame.rows[i][1]);
    Projection {
        a: flat(1),
        b: flat(2),
        c: flat(3),
        normal,
        degenerate,
        residual_z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_distances_preserved(p0: Point3d, p1: Point3d, p2: Point3d) {
        let proj = project_to_plane(p0, p1, p2);
        let scale = p0.distance_to(&p1).max(p1.distance_to(&p2)).max(1.0);
        assert_abs_diff_eq!(proj.a.distance_to(&proj.b), p0.distance_to(&p1), epsilon = 1e-9 * scale);
        assert_abs_diff_eq!(proj.b.distance_to(&proj.c), p1.distance_to(&p2), epsilon = 1e-9 * scale);
        assert_abs_diff_eq!(proj.c.distance_to(&proj.a), p2.distance_to(&p0), epsilon = 1e-9 * scale);
        assert!(proj.residual_z <= 1e-9 * scale, "residual z {}", proj.residual_z);
    }

    #[test]
    fn test_triangle_already_in_xy_plane() {
        let proj = project_to_plane(
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(3.0, 0.0, 0.0),
            Point3d::new(0.0, 4.0, 0.0),
        );
        assert!(!proj.degenerate);
        assert_abs_diff_eq!(proj.b.x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(proj.b.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(proj.c.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(proj.c.y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_first_point_lands_on_origin() {
        let proj = project_to_plane(
            Point3d::new(5.0, -2.0, 7.0),
            Point3d::new(1.0, 1.0, 1.0),
            Point3d::new(-4.0, 0.0, 9.0),
        );
        assert_eq!(proj.a, Point2d::ORIGIN);
    }

    #[test]
    fn test_tilted_triangles_preserve_distances() {
        assert_distances_preserved(
            Point3d::new(1.0, 2.0, 3.0),
            Point3d::new(-4.0, 6.0, 0.0),
            Point3d::new(2.0, -3.0, 8.0),
        );
        assert_distances_preserved(
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(0.0, 5.0, 0.0),
            Point3d::new(0.0, 0.0, 5.0),
        );
        assert_distances_preserved(
            Point3d::new(-1000.0, 999.0, 13.0),
            Point3d::new(250.0, -640.0, 1000.0),
            Point3d::new(7.0, 7.0, -7.0),
        );
    }

    #[test]
    fn test_normal_with_negative_z_is_flipped() {
        // Clockwise in XY, so the cross product points down.
        assert_distances_preserved(
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(0.0, 1.0, 0.0),
            Point3d::new(1.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_collinear_points_use_axis_fallback() {
        let proj = project_to_plane(
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 0.0, 0.0),
            Point3d::new(2.0, 0.0, 0.0),
        );
        assert!(proj.degenerate);
        assert_eq!(proj.normal, Vec3::Y);
        for p in proj.points() {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
        assert_abs_diff_eq!(proj.max_pairwise_distance(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_collinear_points_without_zero_component() {
        assert_distances_preserved(
            Point3d::new(1.0, 1.0, 1.0),
            Point3d::new(2.0, 3.0, 4.0),
            Point3d::new(4.0, 7.0, 10.0),
        );
    }

    #[test]
    fn test_fallback_normal_depends_on_zero_pattern_only() {
        assert_eq!(fallback_normal(Vec3::new(1.0, 0.0, 2.0), Vec3::ZERO), Vec3::Y);
        assert_eq!(fallback_normal(Vec3::new(900.0, 0.0, -7.0), Vec3::ZERO), Vec3::Y);
        assert_eq!(fallback_normal(Vec3::new(0.0, 3.0, 3.0), Vec3::ZERO), Vec3::X);
    }

    #[test]
    fn test_fallback_normal_is_perpendicular() {
        let edge = Vec3::new(2.0, 3.0, 4.0);
        let n = fallback_normal(edge, edge * 2.0);
        assert!(!n.is_zero());
        assert_abs_diff_eq!(n.dot(&edge), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fallback_normal_skips_zero_first_edge() {
        let n = fallback_normal(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(n, Vec3::X);
    }

    #[test]
    fn test_all_points_coincident() {
        let p = Point3d::new(4.0, 4.0, 4.0);
        let proj = project_to_plane(p, p, p);
        assert!(proj.degenerate);
        assert_eq!(proj.max_pairwise_distance(), 0.0);
    }
}
