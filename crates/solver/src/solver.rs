use blackhole_geometry::{Point3d, project_to_plane};
use thiserror::Error;
use tracing::{instrument, warn};

use crate::config::SearchConfig;
use crate::search::{Threshold, search_threshold};

#[derive(Debug, Error, PartialEq)]
pub enum SolveError {
    #[error("Search epsilon must be positive and finite, got {0}")]
    InvalidEpsilon(f64),
    #[error("Point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

/// Threshold radius of three bodies with the default configuration.
///
/// Coordinates are expected to be finite; use [`solve_with`] to have them
/// checked.
pub fn solve(p0: Point3d, p1: Point3d, p2: Point3d) -> f64 {
    run(p0, p1, p2, &SearchConfig::default()).radius
}

/// Threshold radius of three bodies, after validating the inputs.
#[instrument(skip_all, fields(epsilon = config.epsilon, bracket = ?config.bracket))]
pub fn solve_with(
    p0: Point3d,
    p1: Point3d,
    p2: Point3d,
    config: &SearchConfig,
) -> Result<Threshold, SolveError> {
    config.validate()?;
    if let Some(index) = [p0, p1, p2].iter().position(|p| !p.is_finite()) {
        return Err(SolveError::NonFiniteCoordinate { index });
    }
    Ok(run(p0, p1, p2, config))
}

/// Solve one case in the integer form it is read in.
pub fn solve_integer_case(points: [[i64; 3]; 3], config: &SearchConfig) -> Result<Threshold, SolveError> {
    let [p0, p1, p2] = points.map(Point3d::from_integers);
    solve_with(p0, p1, p2, config)
}

fn run(p0: Point3d, p1: Point3d, p2: Point3d, config: &SearchConfig) -> Threshold {
    let projection = project_to_plane(p0, p1, p2);

    let tol = &config.tolerance;
    let sides = [
        (p0.distance_to(&p1), projection.a.distance_to(&projection.b)),
        (p1.distance_to(&p2), projection.b.distance_to(&projection.c)),
        (p2.distance_to(&p0), projection.c.distance_to(&projection.a)),
    ];
    for (original, projected) in sides {
        if !tol.distances_match(original, projected) {
            warn!(original, projected, "projection distorted a side length");
        }
    }

    search_threshold(&projection, config)
}
