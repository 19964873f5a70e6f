//! Permutation flowshop problem definition.
//!
//! Bridges the instance model to the [`Problem`] interface: validates a
//! raw candidate, runs the completion recurrence, and applies the penalty
//! policy. This is the only place where an invalid candidate becomes a
//! score instead of an error.

use std::path::Path;

use rand::Rng;

use super::{FlowshopConfig, Problem};
use crate::error::{EvaluationError, ParseError};
use crate::evaluation::makespan;
use crate::models::{FlowshopInstance, JobOrder};
use crate::parser;

/// Flowshop makespan problem.
///
/// # Example
/// ```
/// use u_flowshop::{FlowshopInstance, FlowshopProblem, Problem};
///
/// let instance = FlowshopInstance::new(vec![vec![2, 3], vec![4, 1]]).unwrap();
/// let problem = FlowshopProblem::new(instance);
/// assert_eq!(problem.evaluate(&vec![0, 1]), 7.0);
/// assert_eq!(problem.evaluate(&vec![0, 0]), 1e9);
/// ```
#[derive(Debug, Clone)]
pub struct FlowshopProblem {
    instance: FlowshopInstance,
    config: FlowshopConfig,
}

impl FlowshopProblem {
    /// Creates a problem with the default configuration.
    pub fn new(instance: FlowshopInstance) -> Self {
        Self::with_config(instance, FlowshopConfig::default())
    }

    /// Creates a problem with an explicit configuration.
    pub fn with_config(instance: FlowshopInstance, config: FlowshopConfig) -> Self {
        let upper = instance.trivial_upper_bound();
        if upper as f64 >= config.penalty {
            tracing::warn!(
                upper_bound = upper,
                penalty = config.penalty,
                "penalty does not exceed every feasible makespan; invalid candidates may outrank valid ones"
            );
        }
        Self { instance, config }
    }

    /// Loads a problem from an instance file.
    ///
    /// # Errors
    /// Propagates I/O and format errors from [`parser::load_instance`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        Ok(Self::new(parser::load_instance(path)?))
    }

    /// The underlying instance.
    pub fn instance(&self) -> &FlowshopInstance {
        &self.instance
    }

    /// The evaluation configuration.
    pub fn config(&self) -> &FlowshopConfig {
        &self.config
    }

    /// Makespan of an already validated order.
    ///
    /// # Errors
    /// Fails if `order` was built for a different number of jobs.
    pub fn evaluate_order(&self, order: &JobOrder) -> Result<i64, EvaluationError> {
        makespan(&self.instance, order)
    }

    /// A uniformly random valid order.
    pub fn random_order<R: Rng>(&self, rng: &mut R) -> JobOrder {
        JobOrder::random(self.instance.nb_jobs(), rng)
    }
}

impl std::str::FromStr for FlowshopProblem {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(parser::parse_instance(text)?))
    }
}

impl Problem for FlowshopProblem {
    type Solution = Vec<usize>;

    fn evaluate(&self, solution: &Vec<usize>) -> f64 {
        let nb_jobs = self.instance.nb_jobs();
        match JobOrder::from_permutation(solution, nb_jobs) {
            Some(order) => match self.evaluate_order(&order) {
                Ok(ms) => ms as f64,
                Err(_) => self.config.penalty,
            },
            None => {
                tracing::trace!(len = solution.len(), nb_jobs, "rejected candidate");
                self.config.penalty
            }
        }
    }

    fn random_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        self.random_order(rng).into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::is_permutation;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn problem(rows: Vec<Vec<i64>>) -> FlowshopProblem {
        FlowshopProblem::new(FlowshopInstance::new(rows).unwrap())
    }

    #[test]
    fn test_scenario_single_job() {
        let p = problem(vec![vec![5]]);
        assert_eq!(p.evaluate(&vec![0]), 5.0);
    }

    #[test]
    fn test_scenario_single_machine() {
        let p = problem(vec![vec![3, 4]]);
        assert_eq!(p.evaluate(&vec![0, 1]), 7.0);
        assert_eq!(p.evaluate(&vec![1, 0]), 7.0);
    }

    #[test]
    fn test_scenario_two_machines() {
        let p = problem(vec![vec![2, 3], vec![4, 1]]);
        assert_eq!(p.evaluate(&vec![0, 1]), 7.0);
    }

    #[test]
    fn test_scenario_duplicate_penalized() {
        let p = problem(vec![vec![1, 2, 3], vec![3, 2, 1]]);
        assert_eq!(p.evaluate(&vec![0, 0, 1]), 1e9);
    }

    #[test]
    fn test_invalid_candidates_get_exact_penalty() {
        let p = problem(vec![vec![1, 2, 3], vec![3, 2, 1]]);
        for candidate in [vec![], vec![0, 1], vec![0, 1, 2, 0], vec![0, 1, 3], vec![2, 2, 2]] {
            assert_eq!(p.evaluate(&candidate), 1e9, "{candidate:?}");
        }
    }

    #[test]
    fn test_custom_penalty() {
        let instance = FlowshopInstance::new(vec![vec![1, 2]]).unwrap();
        let config = FlowshopConfig::default().with_penalty(5e12);
        let p = FlowshopProblem::with_config(instance, config);
        assert_eq!(p.evaluate(&vec![1]), 5e12);
        assert_eq!(p.config().penalty, 5e12);
        assert!(p.evaluate(&vec![1, 0]) < p.evaluate(&vec![1]));
    }

    #[test]
    fn test_evaluation_does_not_touch_instance() {
        let p = problem(vec![vec![2, 3], vec![4, 1]]);
        let before = p.instance().clone();
        p.evaluate(&vec![5, 5]);
        p.evaluate(&vec![1, 0]);
        assert_eq!(p.instance(), &before);
    }

    #[test]
    fn test_random_solution_is_valid() {
        let p = problem(vec![vec![4, 2, 7, 1, 9], vec![3, 3, 8, 2, 6], vec![5, 1, 1, 4, 2]]);
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let s = p.random_solution(&mut rng);
            assert!(is_permutation(&s, 5));
            let score = p.evaluate(&s);
            assert!(score < 1e9);
            assert!(score >= p.instance().machine_total(0) as f64);
            assert!(score >= p.instance().machine_total(2) as f64);
            assert_eq!(score, p.evaluate(&s));
        }
    }

    #[test]
    fn test_evaluate_order_matches_evaluate() {
        let p = problem(vec![vec![2, 3], vec![4, 1]]);
        let mut rng = SmallRng::seed_from_u64(1);
        let order = p.random_order(&mut rng);
        let ms = p.evaluate_order(&order).unwrap();
        assert_eq!(ms as f64, p.evaluate(&order.into_inner()));
    }

    #[test]
    fn test_evaluate_order_from_other_instance() {
        let p = problem(vec![vec![1, 2, 3]]);
        assert_eq!(
            p.evaluate_order(&JobOrder::identity(2)),
            Err(EvaluationError::OrderLength {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_huge_times_do_not_overflow_on_build() {
        let half = i64::MAX / 2 + 1;
        let p: FlowshopProblem = format!("2 1 0 0 0 {half} {half}").parse().unwrap();
        assert_eq!(p.instance().trivial_upper_bound(), i64::MAX);
    }

    #[test]
    fn test_from_str() {
        let p: FlowshopProblem = "2 2 0 0 0\n2 3\n4 1\n".parse().unwrap();
        assert_eq!(p.evaluate(&vec![0, 1]), 7.0);
        assert!(p.instance().header().is_some());
    }

    #[test]
    fn test_shared_across_threads() {
        let p = problem(vec![vec![2, 3], vec![4, 1]]);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(p.evaluate(&vec![0, 1]), 7.0));
            }
        });
    }
}
