//! Outsourcing selection under a budget.
//!
//! Decides which jobs stay in-house and which are outsourced so that the
//! total outsourcing cost fits the budget and the in-house weighted
//! completion time is minimal. Two selectors share one contract:
//!
//! - [`ExhaustiveSelector`]: enumerates every partition (n ≤ 62).
//! - [`BudgetedDpSelector`]: DP over (jobs decided, spend cap).
//!
//! Both delegate in-house sequencing to a [`SequencingOracle`].
//!
//! # Usage
//!
//! ```
//! use u_flowshop::models::Job;
//! use u_flowshop::outsourcing::{select_dp, select_exhaustive};
//!
//! let jobs = vec![Job::new(0, 2, 4), Job::new(1, 4, 1), Job::new(2, 3, 2)];
//! let costs = [120, 30, 100];
//! let exhaustive = select_exhaustive(&jobs, &costs, 2, 100).unwrap();
//! let dp = select_dp(&jobs, &costs, 2, 100).unwrap();
//! assert_eq!(exhaustive.objective, dp.objective);
//! ```

mod dp;
mod exhaustive;

pub use dp::BudgetedDpSelector;
pub use exhaustive::{ExhaustiveSelector, MAX_EXHAUSTIVE_JOBS};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{FlowShopError, Result};
use crate::models::{Job, OutsourcingDecision, OutsourcingInstance, Schedule};
use crate::scheduler::{OracleConfig, SequencingOracle, WsptMciScheduler};

/// Selector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Configuration of the WSPT-MCI oracle.
    pub oracle: OracleConfig,
    /// Cache oracle objectives by in-house job-ID set (DP only).
    pub memoize: bool,
}

impl SelectorConfig {
    /// Default configuration: plain oracle, memoization on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the oracle configuration.
    pub fn with_oracle(mut self, oracle: OracleConfig) -> Self {
        self.oracle = oracle;
        self
    }

    /// Enables or disables DP memoization.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            oracle: OracleConfig::default(),
            memoize: true,
        }
    }
}

/// Objective of the oracle's sequencing of `jobs`; 0 for an empty set.
pub fn objective_only(jobs: &[Job], machines: usize) -> Result<u64> {
    if jobs.is_empty() {
        return Ok(0);
    }
    Ok(WsptMciScheduler::new().sequence(jobs, machines)?.objective)
}

/// Full oracle result for `jobs`.
///
/// # Errors
/// [`FlowShopError::InvalidArgument`] on an empty set or `machines == 0`.
pub fn sequence_and_objective(jobs: &[Job], machines: usize) -> Result<Schedule> {
    WsptMciScheduler::new().sequence(jobs, machines)
}

/// Exhaustive selection with the default configuration.
pub fn select_exhaustive(
    jobs: &[Job],
    costs: &[i64],
    machines: usize,
    budget: i64,
) -> Result<OutsourcingDecision> {
    ExhaustiveSelector::default().select(jobs, costs, machines, budget)
}

/// DP selection with the default configuration.
pub fn select_dp(
    jobs: &[Job],
    costs: &[i64],
    machines: usize,
    budget: i64,
) -> Result<OutsourcingDecision> {
    BudgetedDpSelector::default().select(jobs, costs, machines, budget)
}

/// Runs both selectors on `instance` and checks that they agree.
///
/// Returns `(exhaustive, dp)` on agreement.
///
/// # Errors
/// - [`FlowShopError::ObjectiveMismatch`] when the objectives differ.
/// - Any error raised by either selector.
pub fn cross_validate(
    instance: &OutsourcingInstance,
    config: SelectorConfig,
) -> Result<(OutsourcingDecision, OutsourcingDecision)> {
    let exhaustive = ExhaustiveSelector::new(config).select(
        &instance.jobs,
        &instance.costs,
        instance.machines,
        instance.budget,
    )?;
    let dp = BudgetedDpSelector::new(config).select(
        &instance.jobs,
        &instance.costs,
        instance.machines,
        instance.budget,
    )?;

    if exhaustive.objective != dp.objective {
        warn!(
            exhaustive = exhaustive.objective,
            dp = dp.objective,
            jobs = instance.job_count(),
            budget = instance.budget,
            "selectors disagree"
        );
        return Err(FlowShopError::ObjectiveMismatch {
            exhaustive: exhaustive.objective,
            dp: dp.objective,
        });
    }
    Ok((exhaustive, dp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::closed_form_objective;
    use crate::generator::InstanceGenerator;

    fn sample_jobs() -> Vec<Job> {
        vec![Job::new(0, 2, 4), Job::new(1, 4, 1), Job::new(2, 3, 2)]
    }

    #[test]
    fn test_objective_only() {
        assert_eq!(objective_only(&sample_jobs(), 2).unwrap(), 45);
        assert_eq!(objective_only(&[], 2).unwrap(), 0);
        assert!(objective_only(&sample_jobs(), 0).is_err());
    }

    #[test]
    fn test_sequence_and_objective() {
        let schedule = sequence_and_objective(&sample_jobs(), 2).unwrap();
        assert_eq!(schedule.job_ids(), vec![0, 2, 1]);
        assert_eq!(schedule.objective, 45);
        assert!(sequence_and_objective(&[], 2).is_err());
    }

    #[test]
    fn test_sample_scenario_both_selectors() {
        let costs = [120, 30, 100];
        let ex = select_exhaustive(&sample_jobs(), &costs, 2, 100).unwrap();
        let dp = select_dp(&sample_jobs(), &costs, 2, 100).unwrap();
        for d in [&ex, &dp] {
            assert_eq!(d.objective, 26);
            assert_eq!(d.in_house_ids(), vec![0, 1]);
            assert_eq!(d.outsourced_ids(), vec![2]);
            assert_eq!(d.outsourcing_cost, 100);
            assert!(d.is_partition_of(&sample_jobs()));
        }
    }

    #[test]
    fn test_large_values_rejected_not_wrapped() {
        let heavy = [Job::new(0, 1 << 33, 1 << 33), Job::new(1, 1, 1)];
        assert!(matches!(
            objective_only(&heavy, 2),
            Err(FlowShopError::InvalidArgument { .. })
        ));
        assert!(sequence_and_objective(&heavy, 2).is_err());

        let jobs = [Job::new(0, 1, 1), Job::new(1, 1, 1)];
        let costs = [i64::MAX, 1];
        assert!(matches!(
            select_exhaustive(&jobs, &costs, 1, 5),
            Err(FlowShopError::InvalidArgument { .. })
        ));
        assert!(matches!(
            select_dp(&jobs, &costs, 1, 5),
            Err(FlowShopError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_cross_validate_agreement() {
        let instance = OutsourcingInstance::new(sample_jobs(), vec![120, 30, 100])
            .with_machines(2)
            .with_budget(100);
        let (ex, dp) = cross_validate(&instance, SelectorConfig::default()).unwrap();
        assert_eq!(ex.objective, dp.objective);
    }

    #[test]
    fn test_cross_validate_reports_mismatch() {
        // DP keeps {J1} at (2, 5) because it is cheaper than {J2}, but J3
        // cannot be outsourced and pairs better with J2:
        // {J1,J3} = 101010, {J2,J3} = 100220 on one machine.
        let jobs = vec![Job::new(0, 1, 10), Job::new(1, 10, 2), Job::new(2, 100, 1000)];
        let instance = OutsourcingInstance::new(jobs, vec![5, 5, 1000])
            .with_machines(1)
            .with_budget(5);

        let result = cross_validate(&instance, SelectorConfig::default());
        assert_eq!(
            result.unwrap_err(),
            FlowShopError::ObjectiveMismatch {
                exhaustive: 100_220,
                dp: 101_010,
            }
        );
    }

    #[test]
    fn test_random_instances_invariants() {
        let generator = InstanceGenerator::new(8)
            .with_machines(3)
            .with_budget_fraction(0.4);
        for seed in 0..30 {
            let instance = generator.generate_seeded(seed);
            let ex = select_exhaustive(
                &instance.jobs,
                &instance.costs,
                instance.machines,
                instance.budget,
            )
            .unwrap();
            let dp = select_dp(
                &instance.jobs,
                &instance.costs,
                instance.machines,
                instance.budget,
            )
            .unwrap();

            for d in [&ex, &dp] {
                assert!(d.is_partition_of(&instance.jobs));
                assert!(d.within_budget());
                assert_eq!(
                    closed_form_objective(&d.in_house, instance.machines).unwrap(),
                    d.objective
                );
            }
            // The DP answer is one of the partitions the enumeration scores.
            assert!(ex.objective <= dp.objective, "seed {seed}");
        }
    }

    #[test]
    fn test_exhaustive_monotone_in_budget_random() {
        let generator = InstanceGenerator::new(7).with_machines(2);
        for seed in 0..10 {
            let instance = generator.generate_seeded(seed);
            let selector = ExhaustiveSelector::default();
            let mut last = u64::MAX;
            for budget in (0..=instance.total_cost().unwrap()).step_by(25) {
                let d = selector
                    .select(&instance.jobs, &instance.costs, instance.machines, budget)
                    .unwrap();
                assert!(d.objective <= last, "seed {seed} budget {budget}");
                last = d.objective;
            }
        }
    }

    #[test]
    fn test_selector_config() {
        let cfg = SelectorConfig::new()
            .with_memoize(false)
            .with_oracle(OracleConfig::new().with_verify(true));
        assert!(!cfg.memoize);
        assert!(cfg.oracle.verify);
        assert!(SelectorConfig::default().memoize);

        let json = serde_json::to_string(&cfg).unwrap();
        let back: SelectorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
