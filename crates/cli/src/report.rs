use std::io::Write;

use serde::Serialize;

use crate::CliError;

/// Solved case, ready for output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CaseReport {
    /// 1-based case number.
    pub case: usize,
    pub radius: f64,
    pub iterations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Case #i: radius` with a fixed number of decimals.
    Text { precision: usize },
    /// One JSON object per line.
    Json,
}

pub fn format_case(report: &CaseReport, precision: usize) -> String {
    format!("Case #{}: {:.*}", report.case, precision, report.radius)
}

pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[CaseReport],
    format: OutputFormat,
) -> Result<(), CliError> {
    for report in reports {
        match format {
            OutputFormat::Text { precision } => writeln!(out, "{}", format_case(report, precision))?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, report)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
