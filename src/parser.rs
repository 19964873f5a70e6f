//! Instance file loader.
//!
//! Reads the Taillard benchmark layout as one flat stream of
//! whitespace-separated integers:
//!
//! ```text
//! nb_jobs nb_machines seed upper_bound lower_bound
//! p[0][0] p[0][1] ... p[0][nb_jobs-1]
//! ...
//! p[nb_machines-1][0] ... p[nb_machines-1][nb_jobs-1]
//! ```
//!
//! Line breaks carry no meaning. Tokens after the last matrix row are
//! ignored. Loading is all-or-nothing: either a complete instance or an
//! error.
//!
//! # Reference
//! Taillard (1993), "Benchmarks for basic scheduling problems"

use std::fs::read_to_string;
use std::path::Path;

use crate::error::ParseError;
use crate::models::{FlowshopInstance, InstanceHeader};

const HEADER_LEN: usize = 5;

/// Parses every whitespace-separated token as an integer.
fn read_integers(text: &str) -> Result<Vec<i64>, ParseError> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| ParseError::InvalidToken {
                position,
                token: token.to_string(),
            })
        })
        .collect()
}

fn dimension(value: i64, name: &str) -> Result<usize, ParseError> {
    match usize::try_from(value) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidHeader(format!(
            "{name} must be a positive integer, got {value}"
        ))),
    }
}

/// Parses an instance from its text form.
///
/// # Errors
/// Fails on non-integer tokens, a short header or matrix, non-positive
/// dimensions, or negative processing times.
pub fn parse_instance(text: &str) -> Result<FlowshopInstance, ParseError> {
    let integers = read_integers(text)?;
    if integers.len() < HEADER_LEN {
        return Err(ParseError::UnexpectedEof {
            expected: HEADER_LEN,
            found: integers.len(),
        });
    }

    let nb_jobs = dimension(integers[0], "nb_jobs")?;
    let nb_machines = dimension(integers[1], "nb_machines")?;
    let header = InstanceHeader {
        seed: integers[2],
        upper_bound: integers[3],
        lower_bound: integers[4],
    };

    let expected = nb_jobs
        .checked_mul(nb_machines)
        .and_then(|cells| cells.checked_add(HEADER_LEN))
        .ok_or_else(|| {
            ParseError::InvalidHeader(format!(
                "{nb_jobs} jobs × {nb_machines} machines is too large"
            ))
        })?;
    if integers.len() < expected {
        return Err(ParseError::UnexpectedEof {
            expected,
            found: integers.len(),
        });
    }
    if integers.len() > expected {
        tracing::debug!(
            extra = integers.len() - expected,
            "ignoring trailing tokens after processing-time matrix"
        );
    }

    let rows = integers[HEADER_LEN..expected]
        .chunks(nb_jobs)
        .map(<[i64]>::to_vec)
        .collect();
    let instance = FlowshopInstance::new(rows)?.with_header(header);

    tracing::debug!(nb_jobs, nb_machines, seed = header.seed, "parsed flowshop instance");
    Ok(instance)
}

/// Reads and parses an instance file.
///
/// Relative paths resolve against the current working directory.
///
/// # Errors
/// Fails if the file cannot be read or does not parse.
pub fn load_instance(path: impl AsRef<Path>) -> Result<FlowshopInstance, ParseError> {
    let path = path.as_ref();
    let text = read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loading flowshop instance");
    parse_instance(&text)
}
