//! Budget-indexed dynamic program.
//!
//! # Algorithm
//!
//! State `(i, c)`: the first `i` jobs have been decided and at most `c` has
//! been spent on outsourcing. Each cell holds the smallest in-house
//! objective found and the exact in-house set reaching it.
//!
//! - Base: `(0, c)` is the empty set with objective 0 for every `c`.
//! - Keep job `i`: take the set at `(i-1, c)`, add job `i` and re-sequence
//!   the whole set with the oracle.
//! - Outsource job `i` (only if `cost_i <= c`): take `(i-1, c - cost_i)`.
//!
//! The strictly cheaper option wins. On an exact tie the job stays
//! in-house. The answer is cell `(n, U)`; its set is sequenced once more by
//! the oracle to produce the reported schedule.
//!
//! Caps above the total outsourcing cost behave exactly like the total, so
//! the budget axis is truncated there.
//!
//! Each cell keeps a single best set, so the DP is not guaranteed to find
//! the same optimum as exhaustive enumeration; see
//! [`cross_validate`](super::cross_validate). For the same reason the
//! result is not monotone in the budget: a larger cap can admit a cheaper
//! intermediate set that extends worse than the one a smaller cap forces.
//!
//! # Complexity
//! O(n * U) cells, each with at most one oracle call (fewer with
//! memoization).

use std::collections::HashMap;

use tracing::{debug, warn};

use super::SelectorConfig;
use crate::error::{FlowShopError, Result};
use crate::models::{sum_costs, Job, OutsourcingDecision, Schedule};
use crate::scheduler::{SequencingOracle, WsptMciScheduler};
use crate::validation::{validate_outsourcing_input, CostPolicy};

/// DP cell: best in-house set for a `(prefix, cap)` pair.
#[derive(Debug, Clone)]
struct Cell {
    objective: u64,
    /// Indices into the input job list, ascending.
    in_house: Vec<usize>,
}

/// Evaluates in-house sets through the oracle, optionally memoized by the
/// set of job IDs.
struct SubsetEvaluator<'a, O> {
    oracle: &'a O,
    jobs: &'a [Job],
    machines: usize,
    memo: Option<HashMap<Vec<usize>, u64>>,
    oracle_calls: usize,
    memo_hits: usize,
}

impl<'a, O: SequencingOracle> SubsetEvaluator<'a, O> {
    fn new(oracle: &'a O, jobs: &'a [Job], machines: usize, memoize: bool) -> Self {
        Self {
            oracle,
            jobs,
            machines,
            memo: memoize.then(HashMap::new),
            oracle_calls: 0,
            memo_hits: 0,
        }
    }

    fn subset(&self, indices: &[usize]) -> Vec<Job> {
        indices.iter().map(|&i| self.jobs[i]).collect()
    }

    fn objective(&mut self, indices: &[usize]) -> Result<u64> {
        if indices.is_empty() {
            return Ok(0);
        }

        let key = self.memo.as_ref().map(|_| {
            let mut ids: Vec<usize> = indices.iter().map(|&i| self.jobs[i].id).collect();
            ids.sort_unstable();
            ids
        });
        if let (Some(memo), Some(key)) = (self.memo.as_ref(), key.as_ref()) {
            if let Some(&objective) = memo.get(key) {
                self.memo_hits += 1;
                return Ok(objective);
            }
        }

        let objective = self
            .oracle
            .sequence(&self.subset(indices), self.machines)?
            .objective;
        self.oracle_calls += 1;

        if let (Some(memo), Some(key)) = (self.memo.as_mut(), key) {
            memo.insert(key, objective);
        }
        Ok(objective)
    }
}

/// Budget-indexed DP outsourcing selector.
///
/// # Example
///
/// ```
/// use u_flowshop::models::Job;
/// use u_flowshop::outsourcing::BudgetedDpSelector;
///
/// let jobs = vec![Job::new(0, 2, 4), Job::new(1, 4, 1), Job::new(2, 3, 2)];
/// let decision = BudgetedDpSelector::default()
///     .select(&jobs, &[120, 30, 100], 2, 100)
///     .unwrap();
/// assert_eq!(decision.objective, 26);
/// assert_eq!(decision.in_house_ids(), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct BudgetedDpSelector<O = WsptMciScheduler> {
    oracle: O,
    memoize: bool,
}

impl BudgetedDpSelector {
    /// Creates a selector backed by WSPT-MCI with the given configuration.
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            oracle: WsptMciScheduler::with_config(config.oracle),
            memoize: config.memoize,
        }
    }
}

impl Default for BudgetedDpSelector {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

impl<O: SequencingOracle> BudgetedDpSelector<O> {
    /// Creates a selector backed by a custom oracle.
    pub fn with_oracle(oracle: O, memoize: bool) -> Self {
        Self { oracle, memoize }
    }

    /// Selects the in-house set by dynamic programming over the budget.
    ///
    /// # Errors
    /// - [`FlowShopError::InvalidArgument`] on length mismatch, zero
    ///   machines, negative budget, negative cost, duplicate IDs or a cost
    ///   total outside `i64`.
    /// - Any error raised by the oracle.
    pub fn select(
        &self,
        jobs: &[Job],
        costs: &[i64],
        machines: usize,
        budget: i64,
    ) -> Result<OutsourcingDecision> {
        validate_outsourcing_input(jobs, costs, machines, budget, CostPolicy::NonNegative)?;

        let cap = usize::try_from(budget.min(sum_costs(costs)?))
            .map_err(|_| FlowShopError::invalid(format!("budget {budget} does not fit the DP table")))?;
        let mut evaluator = SubsetEvaluator::new(&self.oracle, jobs, machines, self.memoize);

        // Row i-1 of the table; row 0 is the base case.
        let mut prev: Vec<Option<Cell>> = vec![
            Some(Cell {
                objective: 0,
                in_house: Vec::new(),
            });
            cap + 1
        ];

        for (i, &cost) in costs.iter().enumerate() {
            // cost >= 0 was validated
            let cost = cost as usize;
            let mut row: Vec<Option<Cell>> = Vec::with_capacity(cap + 1);

            for c in 0..=cap {
                let keep = match &prev[c] {
                    Some(cell) => {
                        let mut in_house = cell.in_house.clone();
                        in_house.push(i);
                        let objective = evaluator.objective(&in_house)?;
                        Some(Cell { objective, in_house })
                    }
                    None => None,
                };
                let outsource = if cost <= c { prev[c - cost].clone() } else { None };

                row.push(match (keep, outsource) {
                    (Some(k), Some(o)) => Some(if o.objective < k.objective { o } else { k }),
                    (k, o) => k.or(o),
                });
            }
            prev = row;
        }

        let Some(winner) = prev.pop().flatten() else {
            warn!(jobs = jobs.len(), budget, "final DP cell unreachable, outsourcing everything");
            return OutsourcingDecision::outsource_all(jobs, costs, budget);
        };

        let in_house = evaluator.subset(&winner.in_house);
        let schedule = if in_house.is_empty() {
            Schedule::empty()
        } else {
            self.oracle.sequence(&in_house, machines)?
        };

        let (outsourced, outsourced_costs): (Vec<Job>, Vec<i64>) = jobs
            .iter()
            .zip(costs)
            .filter(|(job, _)| !in_house.iter().any(|k| k.id == job.id))
            .map(|(job, &cost)| (*job, cost))
            .unzip();
        let spend = sum_costs(&outsourced_costs)?;

        debug!(
            jobs = jobs.len(),
            cap,
            cells = jobs.len() * (cap + 1),
            oracle_calls = evaluator.oracle_calls,
            memo_hits = evaluator.memo_hits,
            objective = schedule.objective,
            spend,
            "DP selection finished"
        );

        Ok(OutsourcingDecision::new(schedule, outsourced, spend, budget))
    }
}
