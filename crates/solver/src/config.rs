//! Configuration for the threshold search.

use blackhole_geometry::Tolerance;
use serde::{Deserialize, Serialize};

use crate::solver::SolveError;

/// Interval the bisection starts from, as a function of the longest side of
/// the projected triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchBracket {
    /// `[0, max_dist]`. Always contains the threshold.
    #[default]
    Wide,
    /// `[max_dist / 6, max_dist * (sqrt(35) - sqrt(3)) / 16]`.
    ///
    /// The upper end is the threshold of an equilateral triangle; the lower
    /// end that of three evenly spaced collinear points. Only valid for the
    /// 1/3/5 multiplier assignments.
    Tight,
}

impl SearchBracket {
    /// `(lo, hi)` for a triangle whose longest side is `max_dist`.
    pub fn bounds(self, max_dist: f64) -> (f64, f64) {
        match self {
            SearchBracket::Wide => (0.0, max_dist),
            SearchBracket::Tight => (max_dist / 6.0, max_dist * equilateral_ratio()),
        }
    }
}

/// Threshold of an equilateral triangle divided by its side length.
pub fn equilateral_ratio() -> f64 {
    (35.0f64.sqrt() - 3.0f64.sqrt()) / 16.0
}

/// Configuration for the bisection search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Half-width of the final bracket.
    pub epsilon: f64,
    pub bracket: SearchBracket,
    pub tolerance: Tolerance,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::precise()
    }
}

impl SearchConfig {
    /// Converge to `1e-11`.
    pub fn precise() -> Self {
        Self {
            epsilon: 1e-11,
            bracket: SearchBracket::Wide,
            tolerance: Tolerance::default(),
        }
    }

    /// Converge to `1e-6`.
    pub fn fast() -> Self {
        Self {
            epsilon: 1e-6,
            ..Self::precise()
        }
    }

    /// Precise epsilon over the tight bracket.
    pub fn tight() -> Self {
        Self {
            bracket: SearchBracket::Tight,
            ..Self::precise()
        }
    }

    pub fn with_epsilon(self, epsilon: f64) -> Self {
        Self { epsilon, ..self }
    }

    pub fn with_bracket(self, bracket: SearchBracket) -> Self {
        Self { bracket, ..self }
    }

    /// The epsilon must be positive and finite for the bisection to stop on width.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.epsilon.is_finite() && self.epsilon > 0.0 {
            Ok(())
        } else {
            Err(SolveError::InvalidEpsilon(self.epsilon))
        }
    }

    /// Decimal places needed to show a result at this epsilon.
    pub fn decimal_places(&self) -> usize {
        // log10 of a power of ten can land a hair above the integer.
        let places = (-self.epsilon.log10() - 1e-9).ceil();
        if places.is_finite() && places > 0.0 { places as usize } else { 0 }
    }
}
