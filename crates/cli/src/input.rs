//! Reader for the case file.
//!
//! The first token is the number of cases `T`; each case follows as nine
//! numbers, three points of three coordinates. Only whitespace separates
//! tokens, so line breaks carry no meaning.

use std::io::Read;

use blackhole_geometry::Point3d;
use thiserror::Error;

const COORDS_PER_CASE: usize = 9;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input is empty; expected a case count")]
    MissingCaseCount,
    #[error("Invalid case count '{0}'")]
    InvalidCaseCount(String),
    #[error("Token {position} ('{token}') is not a number")]
    InvalidNumber { token: String, position: usize },
    #[error("Case {case} is truncated: expected {expected} coordinates, found {found}")]
    Truncated {
        case: usize,
        expected: usize,
        found: usize,
    },
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// One test case: the three body positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Case {
    pub points: [Point3d; 3],
}

/// Parse every case from `text`. Tokens after the last case are ignored.
pub fn parse_cases(text: &str) -> Result<Vec<Case>, InputError> {
    let mut tokens = text.split_whitespace().enumerate();

    let (_, count_token) = tokens.next().ok_or(InputError::MissingCaseCount)?;
    let count: usize = count_token
        .parse()
        .map_err(|_| InputError::InvalidCaseCount(count_token.to_string()))?;

    // The count is untrusted; never reserve more cases than the text can hold.
    let mut cases = Vec::with_capacity(count.min(text.len() / COORDS_PER_CASE));
    for case in 1..=count {
        let mut coords = [0.0f64; COORDS_PER_CASE];
        for (found, slot) in coords.iter_mut().enumerate() {
            let (index, token) = tokens.next().ok_or(InputError::Truncated {
                case,
                expected: COORDS_PER_CASE,
                found,
            })?;
            *slot = token.parse().map_err(|_| InputError::InvalidNumber {
                token: token.to_string(),
                position: index + 1,
            })?;
        }
        let point = |i: usize| Point3d::new(coords[3 * i], coords[3 * i + 1], coords[3 * i + 2]);
        cases.push(Case {
            points: [point(0), point(1), point(2)],
        });
    }
    Ok(cases)
}

/// Read all of `reader` and parse it.
pub fn read_cases<R: Read>(mut reader: R) -> Result<Vec<Case>, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_cases(&text)
}
