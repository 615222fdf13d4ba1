//! Outsourcing problem instance.
//!
//! Bundles the inputs shared by both selectors: the job set, a parallel
//! per-job outsourcing-cost list, the machine count and the budget.

use serde::{Deserialize, Serialize};

use super::Job;
use crate::error::{FlowShopError, Result};
use crate::validation::{validate_outsourcing_input, CostPolicy};

/// Input container for outsourcing selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutsourcingInstance {
    /// All jobs (in-house candidates).
    pub jobs: Vec<Job>,
    /// Outsourcing cost per job, parallel to `jobs`.
    pub costs: Vec<i64>,
    /// Number of machines in the flow shop.
    pub machines: usize,
    /// Maximum total outsourcing spend.
    pub budget: i64,
}

impl OutsourcingInstance {
    /// Creates an instance with one machine and zero budget.
    pub fn new(jobs: Vec<Job>, costs: Vec<i64>) -> Self {
        Self {
            jobs,
            costs,
            machines: 1,
            budget: 0,
        }
    }

    /// Sets the machine count.
    pub fn with_machines(mut self, machines: usize) -> Self {
        self.machines = machines;
        self
    }

    /// Sets the outsourcing budget.
    pub fn with_budget(mut self, budget: i64) -> Self {
        self.budget = budget;
        self
    }

    /// Number of jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Sum of every job's outsourcing cost.
    ///
    /// # Errors
    /// [`FlowShopError::InvalidArgument`] when the sum leaves `i64`.
    pub fn total_cost(&self) -> Result<i64> {
        sum_costs(&self.costs)
    }

    /// Checks the instance with the strictest (DP) cost policy.
    pub fn validate(&self) -> Result<()> {
        validate_outsourcing_input(
            &self.jobs,
            &self.costs,
            self.machines,
            self.budget,
            CostPolicy::NonNegative,
        )?;
        Ok(())
    }
}

/// Checked sum of outsourcing costs.
pub(crate) fn sum_costs<'a>(costs: impl IntoIterator<Item = &'a i64>) -> Result<i64> {
    costs
        .into_iter()
        .try_fold(0i64, |total, &cost| total.checked_add(cost))
        .ok_or_else(|| FlowShopError::overflow("outsourcing cost"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OutsourcingInstance {
        OutsourcingInstance::new(
            vec![Job::new(0, 2, 4), Job::new(1, 4, 1), Job::new(2, 3, 2)],
            vec![120, 30, 100],
        )
        .with_machines(2)
        .with_budget(100)
    }

    #[test]
    fn test_instance_builder() {
        let inst = sample();
        assert_eq!(inst.job_count(), 3);
        assert_eq!(inst.machines, 2);
        assert_eq!(inst.budget, 100);
        assert_eq!(inst.total_cost().unwrap(), 250);
        assert!(inst.validate().is_ok());
    }

    #[test]
    fn test_instance_validate_rejects_negative_cost() {
        let inst = OutsourcingInstance::new(vec![Job::new(0, 1, 1)], vec![-1])
            .with_machines(1)
            .with_budget(5);
        assert!(inst.validate().is_err());
    }

    #[test]
    fn test_total_cost_overflow() {
        let inst = OutsourcingInstance::new(
            vec![Job::new(0, 1, 1), Job::new(1, 1, 1)],
            vec![i64::MAX, 1],
        );
        assert!(matches!(
            inst.total_cost(),
            Err(FlowShopError::InvalidArgument { .. })
        ));
        // Negative entries may bring a large partial sum back into range.
        assert_eq!(sum_costs(&[i64::MAX, -1, 1]).unwrap(), i64::MAX);
    }

    #[test]
    fn test_instance_serde() {
        let inst = sample();
        let json = serde_json::to_string(&inst).unwrap();
        let back: OutsourcingInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(inst, back);
    }
}
