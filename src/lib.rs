//! Permutation flowshop evaluation for the U-Engine ecosystem.
//!
//! Every job visits every machine in the same fixed order, and every machine
//! processes the jobs in the same sequence. This crate scores a proposed job
//! sequence by its makespan and rejects sequences that are not permutations.
//! It does not search for good sequences; optimizers live in `u-metaheur`
//! and consume this crate through [`problem::Problem`].
//!
//! # Modules
//!
//! - **`models`**: `FlowshopInstance` (processing-time table) and `JobOrder`
//!   (validated permutation)
//! - **`validation`**: Permutation checks for candidate sequences
//! - **`evaluation`**: Completion-time recurrence and makespan
//! - **`problem`**: `Problem` capability trait, `FlowshopProblem`, config
//! - **`parser`**: Taillard-style instance loader
//! - **`kpi`**: Schedule quality metrics for an evaluated sequence
//!
//! # References
//!
//! - Johnson (1954), "Optimal two- and three-stage production schedules
//!   with setup times included"
//! - Taillard (1993), "Benchmarks for basic scheduling problems"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6

pub mod error;
pub mod evaluation;
pub mod kpi;
pub mod models;
pub mod parser;
pub mod problem;
pub mod validation;

pub use error::{EvaluationError, InstanceError, ParseError};
pub use evaluation::{makespan, CompletionMatrix};
pub use models::{FlowshopInstance, InstanceHeader, JobOrder};
pub use problem::{FlowshopConfig, FlowshopProblem, Problem};
