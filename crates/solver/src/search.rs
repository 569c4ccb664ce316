use blackhole_geometry::Projection;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::config::SearchConfig;
use crate::overlap::OverlapPredicate;

/// Result of a bisection run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    /// Largest radius known not to overlap; equals `lo`.
    pub radius: f64,
    pub lo: f64,
    pub hi: f64,
    pub iterations: usize,
}

/// Bisect `[lo, hi]` for the point where `predicate` turns true.
///
/// Expects `predicate` false at `lo` and true at `hi`. Stops once the
/// bracket is no wider than `2 * epsilon`, or when the midpoint rounds onto
/// an endpoint and the bracket can no longer shrink.
pub fn bisect<F>(lo: f64, hi: f64, epsilon: f64, mut predicate: F) -> Threshold
where
    F: FnMut(f64) -> bool,
{
    let (mut lo, mut hi) = (lo, hi);
    let mut iterations = 0;

    while hi - lo > 2.0 * epsilon {
        let mid = lo + (hi - lo) / 2.0;
        if mid <= lo || mid >= hi {
            debug!(lo, hi, "bisection stalled on floating-point resolution");
            break;
        }
        if predicate(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
        iterations += 1;
        trace!(iterations, lo, hi, "bisection step");
    }

    Threshold {
        radius: lo,
        lo,
        hi,
        iterations,
    }
}

/// Find the threshold radius of a projected triangle.
#[instrument(level = "debug", skip_all, fields(bracket = ?config.bracket, epsilon = config.epsilon))]
pub fn search_threshold(projection: &Projection, config: &SearchConfig) -> Threshold {
    let max_dist = projection.max_pairwise_distance();
    let (lo, hi) = config.bracket.bounds(max_dist);
    debug!(max_dist, lo, hi, "search bracket");

    let predicate = OverlapPredicate::new(projection, config.tolerance);
    let threshold = bisect(lo, hi, config.epsilon, |r| predicate.overlaps(r));
    debug!(
        radius = threshold.radius,
        iterations = threshold.iterations,
        witness = ?predicate.witness(threshold.hi),
        "threshold converged"
    );
    threshold
}
