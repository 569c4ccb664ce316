//! Case-file front end for the blackhole threshold solver.

pub mod input;
pub mod report;

pub use input::{Case, InputError, parse_cases, read_cases};
pub use report::{CaseReport, OutputFormat, format_case, write_reports};

use blackhole_solver::{SearchConfig, SolveError, solve_with};
use thiserror::Error;
use tracing::{debug, info_span};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Case {case}: {source}")]
    Solve { case: usize, source: SolveError },
    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Solve each case in order.
pub fn solve_cases(cases: &[Case], config: &SearchConfig) -> Result<Vec<CaseReport>, CliError> {
    cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let number = i + 1;
            let _span = info_span!("case", number).entered();
            let [p0, p1, p2] = case.points;
            let threshold =
                solve_with(p0, p1, p2, config).map_err(|source| CliError::Solve { case: number, source })?;
            debug!(radius = threshold.radius, iterations = threshold.iterations, "case solved");
            Ok(CaseReport {
                case: number,
                radius: threshold.radius,
                iterations: threshold.iterations,
            })
        })
        .collect()
}
