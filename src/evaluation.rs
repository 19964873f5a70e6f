//! Completion-time recurrence for permutation flowshops.
//!
//! # Algorithm
//!
//! With `seq[k]` the job at position `k` and `p[m][j]` its processing time:
//!
//! ```text
//! C[0][0] = p[0][seq[0]]
//! C[0][k] = C[0][k-1] + p[0][seq[k]]
//! C[m][0] = C[m-1][0] + p[m][seq[0]]
//! C[m][k] = max(C[m][k-1], C[m-1][k]) + p[m][seq[k]]
//! ```
//!
//! A job starts on machine `m` once the previous job has left `m` and the
//! job itself has left `m-1`. The makespan is `C[M-1][N-1]`.
//!
//! # Complexity
//! O(machines × jobs) time and space per evaluation.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6.1

use crate::error::EvaluationError;
use crate::models::{FlowshopInstance, JobOrder};

/// Completion (and start) times of every operation for one job sequence.
///
/// Indexed by machine and sequence position, not by job index. Each
/// evaluation allocates its own matrix; the instance is only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionMatrix {
    nb_jobs: usize,
    nb_machines: usize,
    /// `completion[m * nb_jobs + k]`
    completion: Vec<i64>,
    /// `start[m * nb_jobs + k]`
    start: Vec<i64>,
}

impl CompletionMatrix {
    /// Runs the recurrence for `order` on `instance`.
    ///
    /// # Errors
    /// Fails if `order` was built for a different number of jobs.
    pub fn compute(
        instance: &FlowshopInstance,
        order: &JobOrder,
    ) -> Result<Self, EvaluationError> {
        let n = instance.nb_jobs();
        let machines = instance.nb_machines();
        if order.len() != n {
            return Err(EvaluationError::OrderLength {
                expected: n,
                found: order.len(),
            });
        }
        let seq = order.as_slice();

        let mut completion = vec![0i64; machines * n];
        let mut start = vec![0i64; machines * n];

        // Machine 0: back-to-back, never blocked upstream
        let mut prev = 0;
        for (k, &job) in seq.iter().enumerate() {
            start[k] = prev;
            prev += instance.processing_time(0, job);
            completion[k] = prev;
        }

        for m in 1..machines {
            let row = m * n;
            let above = row - n;
            for (k, &job) in seq.iter().enumerate() {
                let upstream = completion[above + k];
                let begin = if k == 0 {
                    upstream
                } else {
                    completion[row + k - 1].max(upstream)
                };
                start[row + k] = begin;
                completion[row + k] = begin + instance.processing_time(m, job);
            }
        }

        Ok(Self {
            nb_jobs: n,
            nb_machines: machines,
            completion,
            start,
        })
    }

    /// Number of sequence positions.
    pub fn nb_jobs(&self) -> usize {
        self.nb_jobs
    }

    /// Number of machines.
    pub fn nb_machines(&self) -> usize {
        self.nb_machines
    }

    /// Completion time of the job at `position` on `machine`.
    #[inline]
    pub fn completion(&self, machine: usize, position: usize) -> i64 {
        self.completion[self.index(machine, position)]
    }

    /// Start time of the job at `position` on `machine`.
    #[inline]
    pub fn start(&self, machine: usize, position: usize) -> i64 {
        self.start[self.index(machine, position)]
    }

    /// Completion times of every position on `machine`.
    pub fn machine_row(&self, machine: usize) -> &[i64] {
        let from = machine * self.nb_jobs;
        &self.completion[from..from + self.nb_jobs]
    }

    /// Completion time of the last job on the last machine.
    pub fn makespan(&self) -> i64 {
        self.completion.last().copied().unwrap_or(0)
    }

    /// Completion time of each position on the last machine, i.e. when each
    /// job leaves the shop.
    pub fn job_completion_times(&self) -> &[i64] {
        self.machine_row(self.nb_machines - 1)
    }

    /// Time `machine` spends waiting between time 0 and its last completion.
    pub fn machine_idle(&self, machine: usize) -> i64 {
        let from = machine * self.nb_jobs;
        let mut idle = 0;
        let mut free_at = 0;
        for k in from..from + self.nb_jobs {
            idle += self.start[k] - free_at;
            free_at = self.completion[k];
        }
        idle
    }

    #[inline]
    fn index(&self, machine: usize, position: usize) -> usize {
        assert!(position < self.nb_jobs, "position {position} out of range");
        machine * self.nb_jobs + position
    }
}

/// Makespan of `order` on `instance`.
///
/// # Errors
/// Fails if `order` was built for a different number of jobs.
pub fn makespan(
    instance: &FlowshopInstance,
    order: &JobOrder,
) -> Result<i64, EvaluationError> {
    CompletionMatrix::compute(instance, order).map(|c| c.makespan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn order(jobs: &[usize], n: usize) -> JobOrder {
        JobOrder::new(jobs.to_vec(), n).unwrap()
    }

    #[test]
    fn test_single_job_single_machine() {
        let inst = FlowshopInstance::new(vec![vec![5]]).unwrap();
        assert_eq!(makespan(&inst, &order(&[0], 1)).unwrap(), 5);
    }

    #[test]
    fn test_single_machine_order_independent() {
        let inst = FlowshopInstance::new(vec![vec![3, 4]]).unwrap();
        assert_eq!(makespan(&inst, &order(&[0, 1], 2)).unwrap(), 7);
        assert_eq!(makespan(&inst, &order(&[1, 0], 2)).unwrap(), 7);
    }

    #[test]
    fn test_two_by_two_matrix() {
        let inst = FlowshopInstance::new(vec![vec![2, 3], vec![4, 1]]).unwrap();
        let c = CompletionMatrix::compute(&inst, &order(&[0, 1], 2)).unwrap();
        assert_eq!(c.machine_row(0), &[2, 5]);
        assert_eq!(c.completion(1, 0), 6);
        // max(6, 5) + 1
        assert_eq!(c.completion(1, 1), 7);
        assert_eq!(c.makespan(), 7);
        assert_eq!(c.start(1, 1), 6);
        assert_eq!(c.job_completion_times(), &[6, 7]);
    }

    #[test]
    fn test_reverse_order_differs() {
        let inst = FlowshopInstance::new(vec![vec![2, 3], vec![4, 1]]).unwrap();
        // [1, 0]: M0 = [3, 5]; M1 = [4, max(4, 5) + 4 = 9]
        let c = CompletionMatrix::compute(&inst, &order(&[1, 0], 2)).unwrap();
        assert_eq!(c.machine_row(0), &[3, 5]);
        assert_eq!(c.machine_row(1), &[4, 9]);
        assert_eq!(c.makespan(), 9);
    }

    #[test]
    fn test_three_machines_blocking_chain() {
        // Job 0 is long on machine 1, so job 1 waits there.
        let inst = FlowshopInstance::new(vec![vec![1, 1], vec![10, 1], vec![1, 1]]).unwrap();
        let c = CompletionMatrix::compute(&inst, &order(&[0, 1], 2)).unwrap();
        assert_eq!(c.machine_row(0), &[1, 2]);
        assert_eq!(c.machine_row(1), &[11, 12]);
        assert_eq!(c.machine_row(2), &[12, 13]);
        assert_eq!(c.machine_idle(0), 0);
        assert_eq!(c.machine_idle(1), 1);
        assert_eq!(c.machine_idle(2), 11);
    }

    #[test]
    fn test_zero_processing_times() {
        let inst = FlowshopInstance::new(vec![vec![0, 0, 0], vec![0, 0, 0]]).unwrap();
        assert_eq!(makespan(&inst, &order(&[2, 1, 0], 3)).unwrap(), 0);
    }

    #[test]
    fn test_makespan_bounds_and_determinism() {
        let inst = FlowshopInstance::new(vec![
            vec![54, 83, 15, 71, 77, 36],
            vec![79, 3, 11, 99, 56, 70],
            vec![16, 89, 49, 15, 89, 45],
            vec![66, 58, 31, 68, 78, 91],
        ])
        .unwrap();
        let first_total = inst.machine_total(0);
        let last_total = inst.machine_total(inst.nb_machines() - 1);
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..100 {
            let o = JobOrder::random(inst.nb_jobs(), &mut rng);
            let ms = makespan(&inst, &o).unwrap();
            assert!(ms >= first_total);
            assert!(ms >= last_total);
            assert!(ms >= inst.lower_bound());
            assert!(ms <= inst.trivial_upper_bound());
            assert_eq!(ms, makespan(&inst, &o).unwrap());
        }
    }

    #[test]
    fn test_start_plus_duration_is_completion() {
        let inst = FlowshopInstance::new(vec![vec![3, 1, 4], vec![1, 5, 9], vec![2, 6, 5]]).unwrap();
        let o = order(&[1, 2, 0], 3);
        let c = CompletionMatrix::compute(&inst, &o).unwrap();
        for m in 0..3 {
            for (k, &job) in o.iter().enumerate() {
                assert_eq!(c.start(m, k) + inst.processing_time(m, job), c.completion(m, k));
                if m > 0 {
                    assert!(c.start(m, k) >= c.completion(m - 1, k));
                }
                if k > 0 {
                    assert!(c.start(m, k) >= c.completion(m, k - 1));
                }
            }
        }
    }

    #[test]
    fn test_order_from_other_instance_rejected() {
        let inst = FlowshopInstance::new(vec![vec![1, 2, 3]]).unwrap();
        assert_eq!(
            CompletionMatrix::compute(&inst, &JobOrder::identity(2)),
            Err(EvaluationError::OrderLength {
                expected: 3,
                found: 2
            })
        );
        assert!(makespan(&inst, &JobOrder::identity(4)).is_err());
    }
}
