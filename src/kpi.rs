//! Schedule quality metrics (KPIs) for an evaluated sequence.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Completion of the last job on the last machine |
//! | Total Completion (ΣC_j) | Sum of job exit times from the last machine |
//! | Avg Flow Time | Mean job exit time (all jobs released at t=0) |
//! | Machine Utilization | Busy time / makespan, per machine |
//! | Total Idle | Sum of machine idle time before each machine's last job |
//! | Lower-Bound Gap | (makespan - LB) / LB |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::Serialize;

use crate::error::EvaluationError;
use crate::evaluation::CompletionMatrix;
use crate::models::{FlowshopInstance, JobOrder};

/// Performance indicators of one job sequence.
#[derive(Debug, Clone, Serialize)]
pub struct FlowshopKpi {
    /// Makespan.
    pub makespan: i64,
    /// Sum of completion times on the last machine.
    pub total_completion: i64,
    /// Average flow time.
    pub avg_flow_time: f64,
    /// Utilization per machine (0.0..1.0), indexed by machine.
    pub utilization_by_machine: Vec<f64>,
    /// Mean of `utilization_by_machine`.
    pub avg_utilization: f64,
    /// Idle time summed over all machines.
    pub total_idle: i64,
    /// Relative gap to [`FlowshopInstance::lower_bound`]; 0.0 when the bound is 0.
    pub lower_bound_gap: f64,
}

impl FlowshopKpi {
    /// Computes KPIs for `order` on `instance`.
    ///
    /// # Errors
    /// Fails if `order` was built for a different number of jobs.
    pub fn calculate(
        instance: &FlowshopInstance,
        order: &JobOrder,
    ) -> Result<Self, EvaluationError> {
        let matrix = CompletionMatrix::compute(instance, order)?;
        Ok(Self::from_matrix(instance, &matrix))
    }

    /// Computes KPIs from an existing completion matrix.
    pub fn from_matrix(instance: &FlowshopInstance, matrix: &CompletionMatrix) -> Self {
        let makespan = matrix.makespan();
        let exits = matrix.job_completion_times();
        let total_completion: i64 = exits.iter().sum();
        let avg_flow_time = total_completion as f64 / exits.len() as f64;

        let utilization_by_machine: Vec<f64> = (0..instance.nb_machines())
            .map(|m| {
                if makespan == 0 {
                    0.0
                } else {
                    instance.machine_total(m) as f64 / makespan as f64
                }
            })
            .collect();
        let avg_utilization =
            utilization_by_machine.iter().sum::<f64>() / utilization_by_machine.len() as f64;

        let total_idle = (0..instance.nb_machines())
            .map(|m| matrix.machine_idle(m))
            .sum();

        let lb = instance.lower_bound();
        let lower_bound_gap = if lb == 0 {
            0.0
        } else {
            (makespan - lb) as f64 / lb as f64
        };

        Self {
            makespan,
            total_completion,
            avg_flow_time,
            utilization_by_machine,
            avg_utilization,
            total_idle,
            lower_bound_gap,
        }
    }

    /// Whether the sequence is within `max_gap` of the lower bound and
    /// keeps machines at least `min_utilization` busy on average.
    pub fn meets_thresholds(&self, max_gap: f64, min_utilization: f64) -> bool {
        self.lower_bound_gap <= max_gap && self.avg_utilization >= min_utilization
    }
}
