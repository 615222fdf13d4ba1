//! Exhaustive subset enumeration.
//!
//! # Algorithm
//!
//! Every bit mask over the job indices is a partition: set bits stay
//! in-house, clear bits are outsourced. Masks whose outsourced cost exceeds
//! the budget are skipped; every other mask is sequenced by the oracle (an
//! empty in-house set has objective 0 and needs no call). The strict minimum
//! wins, so among equal objectives the lowest mask is kept.
//!
//! # Complexity
//! O(2^n) oracle calls. Limited to [`MAX_EXHAUSTIVE_JOBS`] jobs.

use tracing::{debug, warn};

use super::SelectorConfig;
use crate::error::{FlowShopError, Result};
use crate::models::{Job, OutsourcingDecision, Schedule};
use crate::scheduler::{SequencingOracle, WsptMciScheduler};
use crate::validation::{validate_enumeration_size, validate_outsourcing_input, CostPolicy};

/// Largest job count whose subsets are enumerated (62-bit masks).
pub const MAX_EXHAUSTIVE_JOBS: usize = 62;

/// Best partition seen so far during enumeration.
struct Incumbent {
    mask: u64,
    schedule: Schedule,
    outsourced: Vec<Job>,
    spend: i64,
}

/// Brute-force outsourcing selector.
///
/// # Example
///
/// ```
/// use u_flowshop::models::Job;
/// use u_flowshop::outsourcing::ExhaustiveSelector;
///
/// let jobs = vec![Job::new(0, 2, 4), Job::new(1, 4, 1), Job::new(2, 3, 2)];
/// let decision = ExhaustiveSelector::default()
///     .select(&jobs, &[120, 30, 100], 2, 100)
///     .unwrap();
/// assert_eq!(decision.objective, 26);
/// assert_eq!(decision.outsourced_ids(), vec![2]);
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveSelector<O = WsptMciScheduler> {
    oracle: O,
}

impl ExhaustiveSelector {
    /// Creates a selector backed by WSPT-MCI with the given configuration.
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            oracle: WsptMciScheduler::with_config(config.oracle),
        }
    }
}

impl Default for ExhaustiveSelector {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

impl<O: SequencingOracle> ExhaustiveSelector<O> {
    /// Creates a selector backed by a custom oracle.
    pub fn with_oracle(oracle: O) -> Self {
        Self { oracle }
    }

    /// Selects the in-house set with minimum objective among all partitions
    /// whose outsourcing cost fits `budget`.
    ///
    /// # Errors
    /// - [`FlowShopError::InvalidArgument`] on length mismatch, zero
    ///   machines, negative budget, duplicate IDs, more than
    ///   [`MAX_EXHAUSTIVE_JOBS`] jobs or an outsourced cost total outside
    ///   `i64`.
    /// - Any error raised by the oracle.
    pub fn select(
        &self,
        jobs: &[Job],
        costs: &[i64],
        machines: usize,
        budget: i64,
    ) -> Result<OutsourcingDecision> {
        validate_outsourcing_input(jobs, costs, machines, budget, CostPolicy::AnyValue)?;
        validate_enumeration_size(jobs.len(), MAX_EXHAUSTIVE_JOBS)?;

        let n = jobs.len();
        let mut best: Option<Incumbent> = None;
        let mut feasible = 0u64;

        for mask in 0..(1u64 << n) {
            let mut in_house = Vec::with_capacity(n);
            let mut outsourced = Vec::with_capacity(n);
            let mut spend = 0i64;

            for (j, (job, &cost)) in jobs.iter().zip(costs).enumerate() {
                if (mask >> j) & 1 == 1 {
                    in_house.push(*job);
                } else {
                    outsourced.push(*job);
                    spend = spend
                        .checked_add(cost)
                        .ok_or_else(|| FlowShopError::overflow("outsourcing cost"))?;
                }
            }

            if spend > budget {
                continue;
            }
            feasible += 1;

            let schedule = if in_house.is_empty() {
                Schedule::empty()
            } else {
                self.oracle.sequence(&in_house, machines)?
            };

            if best
                .as_ref()
                .map_or(true, |b| schedule.objective < b.schedule.objective)
            {
                best = Some(Incumbent {
                    mask,
                    schedule,
                    outsourced,
                    spend,
                });
            }
        }

        match best {
            Some(b) => {
                debug!(
                    jobs = n,
                    feasible,
                    best_mask = b.mask,
                    objective = b.schedule.objective,
                    spend = b.spend,
                    "exhaustive selection finished"
                );
                Ok(OutsourcingDecision::new(b.schedule, b.outsourced, b.spend, budget))
            }
            None => {
                warn!(jobs = n, budget, "no feasible partition, outsourcing everything");
                OutsourcingDecision::outsource_all(jobs, costs, budget)
            }
        }
    }
}
