//! Problem capability interface and the flowshop implementation.
//!
//! Optimizers see a problem only through [`Problem`]: score a candidate,
//! or draw a random starting candidate. Lower scores are better
//! (minimization convention).

mod config;
mod flowshop;

use rand::Rng;

pub use config::{FlowshopConfig, DEFAULT_PENALTY};
pub use flowshop::FlowshopProblem;

/// A minimization problem an optimizer can drive.
pub trait Problem {
    /// Candidate representation handed to [`Problem::evaluate`].
    type Solution;

    /// Scores a candidate. Infeasible candidates receive a penalty that
    /// ranks them worse than any feasible one, never an error.
    fn evaluate(&self, solution: &Self::Solution) -> f64;

    /// Draws a feasible candidate uniformly at random.
    fn random_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;
}
