//! Hard-failure error types.
//!
//! Malformed candidate sequences are not errors here: they are reported
//! through [`crate::validation::ValidationError`] lists or the evaluation
//! penalty. The types below cover instance construction and loading, which
//! are all-or-nothing.

use thiserror::Error;

/// Rejection reasons for a processing-time table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    #[error("instance must have at least one machine")]
    NoMachines,

    #[error("instance must have at least one job")]
    NoJobs,

    #[error("machine {machine} has {found} processing times, expected {expected}")]
    RaggedRow {
        machine: usize,
        expected: usize,
        found: usize,
    },

    #[error("negative processing time {value} for job {job} on machine {machine}")]
    NegativeProcessingTime { machine: usize, job: usize, value: i64 },
}

/// Failure while evaluating a job order against an instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("order has {found} jobs but instance has {expected}")]
    OrderLength { expected: usize, found: usize },
}

/// Failure while loading an instance from text or a file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read instance file: {0}")]
    Io(#[from] std::io::Error),

    #[error("token {position} is not an integer: {token:?}")]
    InvalidToken { position: usize, token: String },

    #[error("unexpected end of input: expected {expected} integers, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error(transparent)]
    Instance(#[from] InstanceError),
}
