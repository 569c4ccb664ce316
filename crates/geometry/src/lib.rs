pub mod vector;
pub mod point;
pub mod matrix;
pub mod projection;
pub mod circle;

pub use circle::{Circle, CircleIntersection, any_overlap, circle_intersect, pairwise_overlap};
pub use matrix::{Matrix, RotationMatrix};
pub use point::{Point2d, Point3d};
pub use projection::{Projection, project_to_plane};
pub use vector::Vec3;

use serde::{Deserialize, Serialize};

/// Tolerance configuration for the planar geometry checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// How far below zero `R1^2 - d^2` may drift in the chord construction,
    /// relative to `max(R1^2, 1)`, before it is treated as a bug.
    pub chord_slack: f64,
    /// Relative error allowed on distances after projection.
    pub projection: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            chord_slack: 1e-6,
            projection: 1e-9,
        }
    }
}

impl Tolerance {
    /// Whether `projected` matches `original` within the projection tolerance,
    /// scaled to the larger of the two lengths.
    pub fn distances_match(&self, original: f64, projected: f64) -> bool {
        (original - projected).abs() <= self.projection * original.abs().max(1.0)
    }
}
