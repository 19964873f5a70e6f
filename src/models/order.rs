//! Validated job sequence.
//!
//! A `JobOrder` is a permutation of `0..nb_jobs`. The only ways to obtain
//! one are through the validator, a random shuffle, or the identity, so
//! code that receives a `JobOrder` never needs to re-check it.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::validation::{is_permutation, validate_order, ValidationError};

/// A permutation of job indices, applied on every machine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobOrder {
    jobs: Vec<usize>,
}

impl JobOrder {
    /// Validates `jobs` as a permutation of `0..nb_jobs`.
    ///
    /// # Errors
    /// Returns every problem found by [`validate_order`].
    pub fn new(jobs: Vec<usize>, nb_jobs: usize) -> Result<Self, Vec<ValidationError>> {
        validate_order(&jobs, nb_jobs)?;
        Ok(Self { jobs })
    }

    /// Fast check without diagnostics: `Some` iff `jobs` is a permutation
    /// of `0..nb_jobs`.
    pub fn from_permutation(jobs: &[usize], nb_jobs: usize) -> Option<Self> {
        is_permutation(jobs, nb_jobs).then(|| Self {
            jobs: jobs.to_vec(),
        })
    }

    /// The sequence `0, 1, …, nb_jobs - 1`.
    pub fn identity(nb_jobs: usize) -> Self {
        Self {
            jobs: (0..nb_jobs).collect(),
        }
    }

    /// A uniformly random permutation of `0..nb_jobs`.
    pub fn random<R: Rng + ?Sized>(nb_jobs: usize, rng: &mut R) -> Self {
        let mut jobs: Vec<usize> = (0..nb_jobs).collect();
        jobs.shuffle(rng);
        Self { jobs }
    }

    /// Job indices in processing order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.jobs
    }

    /// Number of jobs in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Iterates over job indices in processing order.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.jobs.iter()
    }

    /// Consumes the order, returning the raw sequence.
    pub fn into_inner(self) -> Vec<usize> {
        self.jobs
    }
}

impl AsRef<[usize]> for JobOrder {
    fn as_ref(&self) -> &[usize] {
        &self.jobs
    }
}

impl<'a> IntoIterator for &'a JobOrder {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}
