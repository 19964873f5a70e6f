//! Flowshop instance model.
//!
//! An instance is the immutable processing-time table of a permutation
//! flowshop. Times are stored machine-major in a flat vector, so row `m`
//! is the contiguous slice of all job times on machine `m`.
//!
//! # Reference
//! Taillard (1993), "Benchmarks for basic scheduling problems"

use serde::{Deserialize, Serialize};

use crate::error::InstanceError;

/// Header metadata carried by benchmark instance files.
///
/// Informational only: evaluation never reads these values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceHeader {
    /// Seed used by the instance generator.
    pub seed: i64,
    /// Best known upper bound on the optimal makespan.
    pub upper_bound: i64,
    /// Best known lower bound on the optimal makespan.
    pub lower_bound: i64,
}

/// A permutation flowshop instance.
///
/// Built only through [`FlowshopInstance::new`], which validates the whole
/// table before returning. Once built it is never mutated, so one instance
/// can back any number of evaluations, including concurrent ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance", into = "RawInstance")]
pub struct FlowshopInstance {
    nb_jobs: usize,
    nb_machines: usize,
    /// `processing_times[m * nb_jobs + j]`
    processing_times: Vec<i64>,
    header: Option<InstanceHeader>,
}

#[derive(Serialize, Deserialize)]
struct RawInstance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    header: Option<InstanceHeader>,
    processing_times: Vec<Vec<i64>>,
}

impl TryFrom<RawInstance> for FlowshopInstance {
    type Error = InstanceError;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        let mut instance = Self::new(raw.processing_times)?;
        instance.header = raw.header;
        Ok(instance)
    }
}

impl From<FlowshopInstance> for RawInstance {
    fn from(instance: FlowshopInstance) -> Self {
        let processing_times = (0..instance.nb_machines)
            .map(|m| instance.machine_times(m).to_vec())
            .collect();
        Self {
            header: instance.header,
            processing_times,
        }
    }
}

impl FlowshopInstance {
    /// Creates an instance from one row of job times per machine.
    ///
    /// `rows[m][j]` is the processing time of job `j` on machine `m`.
    ///
    /// # Errors
    /// Fails if there are no machines or no jobs, if rows differ in length,
    /// or if any processing time is negative.
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self, InstanceError> {
        let nb_machines = rows.len();
        if nb_machines == 0 {
            return Err(InstanceError::NoMachines);
        }
        let nb_jobs = rows[0].len();
        if nb_jobs == 0 {
            return Err(InstanceError::NoJobs);
        }

        let mut processing_times = Vec::with_capacity(nb_machines * nb_jobs);
        for (machine, row) in rows.into_iter().enumerate() {
            if row.len() != nb_jobs {
                return Err(InstanceError::RaggedRow {
                    machine,
                    expected: nb_jobs,
                    found: row.len(),
                });
            }
            if let Some((job, &value)) = row.iter().enumerate().find(|(_, &t)| t < 0) {
                return Err(InstanceError::NegativeProcessingTime {
                    machine,
                    job,
                    value,
                });
            }
            processing_times.extend(row);
        }

        Ok(Self {
            nb_jobs,
            nb_machines,
            processing_times,
            header: None,
        })
    }

    /// Attaches benchmark header metadata.
    pub fn with_header(mut self, header: InstanceHeader) -> Self {
        self.header = Some(header);
        self
    }

    /// Number of jobs.
    #[inline]
    pub fn nb_jobs(&self) -> usize {
        self.nb_jobs
    }

    /// Number of machines.
    #[inline]
    pub fn nb_machines(&self) -> usize {
        self.nb_machines
    }

    /// Header metadata, if the instance was loaded from a benchmark file.
    pub fn header(&self) -> Option<&InstanceHeader> {
        self.header.as_ref()
    }

    /// Processing time of `job` on `machine`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn processing_time(&self, machine: usize, job: usize) -> i64 {
        assert!(job < self.nb_jobs, "job index {job} out of range");
        self.processing_times[machine * self.nb_jobs + job]
    }

    /// All job times on `machine`, indexed by job.
    pub fn machine_times(&self, machine: usize) -> &[i64] {
        let start = machine * self.nb_jobs;
        &self.processing_times[start..start + self.nb_jobs]
    }

    /// Times of `job` on each machine, in machine order.
    pub fn job_times(&self, job: usize) -> impl Iterator<Item = i64> + '_ {
        self.processing_times
            .iter()
            .skip(job)
            .step_by(self.nb_jobs)
            .copied()
    }

    /// Total load of `machine` across all jobs.
    pub fn machine_total(&self, machine: usize) -> i64 {
        self.machine_times(machine).iter().sum()
    }

    /// Total processing time of `job` across all machines.
    pub fn job_total(&self, job: usize) -> i64 {
        self.job_times(job).sum()
    }

    /// Sum of every entry in the table, saturating at `i64::MAX`.
    pub fn total_processing_time(&self) -> i64 {
        self.processing_times
            .iter()
            .fold(0i64, |acc, &t| acc.saturating_add(t))
    }

    /// A lower bound on the makespan of any sequence.
    ///
    /// No machine can finish before it has processed its whole load, and no
    /// job can finish before it has visited every machine.
    pub fn lower_bound(&self) -> i64 {
        let machine_bound = (0..self.nb_machines)
            .map(|m| self.machine_total(m))
            .max()
            .unwrap_or(0);
        let job_bound = (0..self.nb_jobs)
            .map(|j| self.job_total(j))
            .max()
            .unwrap_or(0);
        machine_bound.max(job_bound)
    }

    /// An upper bound on the makespan of any sequence: running every
    /// operation strictly one after another.
    pub fn trivial_upper_bound(&self) -> i64 {
        self.total_processing_time()
    }
}
