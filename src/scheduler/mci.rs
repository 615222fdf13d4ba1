//! WSPT with Minimal Cost Insertion (WSPT-MCI).
//!
//! # Algorithm
//!
//! 1. Sort jobs by WSPT (decreasing `w / p`, ties → smaller `p`, stable).
//! 2. Seed the partial sequence with the first job.
//! 3. For each remaining job, try every insertion position `0..=len`,
//!    evaluate the full closed-form objective of each candidate and insert
//!    at the cheapest one. Ties go to the latest (rightmost) position.
//! 4. Report the closed-form objective of the final sequence.
//!
//! Greedy construction, not an exact search.
//!
//! # Complexity
//! O(n^3): n insertion steps, O(n) positions each, O(n) per evaluation.
//!
//! # Reference
//! Nawaz, Enscore & Ham (1983), "A heuristic algorithm for the m-machine,
//! n-job flow-shop sequencing problem" (insertion scheme)

use tracing::{debug, trace};

use super::wspt::wspt_order;
use super::{OracleConfig, SequencingOracle};
use crate::completion::{closed_form_objective, verified_objective};
use crate::error::Result;
use crate::models::{Job, Schedule};
use crate::validation::validate_oracle_input;

/// WSPT-MCI sequencing oracle.
///
/// # Example
///
/// ```
/// use u_flowshop::models::Job;
/// use u_flowshop::scheduler::{SequencingOracle, WsptMciScheduler};
///
/// let jobs = vec![Job::new(0, 2, 4), Job::new(1, 4, 1), Job::new(2, 3, 2)];
/// let schedule = WsptMciScheduler::new().sequence(&jobs, 2).unwrap();
/// assert_eq!(schedule.job_ids(), vec![0, 2, 1]);
/// assert_eq!(schedule.objective, 45);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WsptMciScheduler {
    config: OracleConfig,
}

impl WsptMciScheduler {
    /// Creates an oracle with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an oracle with an explicit configuration.
    pub fn with_config(config: OracleConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Finds the cheapest insertion position for `job` in `partial`.
    ///
    /// Returns `(position, objective)`; on equal objectives the largest
    /// position wins.
    fn best_insertion(partial: &[Job], job: Job, machines: usize) -> Result<(usize, u64)> {
        let mut candidate = Vec::with_capacity(partial.len() + 1);
        let mut best: Option<(usize, u64)> = None;

        for pos in 0..=partial.len() {
            candidate.clear();
            candidate.extend_from_slice(&partial[..pos]);
            candidate.push(job);
            candidate.extend_from_slice(&partial[pos..]);

            let objective = closed_form_objective(&candidate, machines)?;
            if best.map_or(true, |(_, b)| objective <= b) {
                best = Some((pos, objective));
            }
        }

        // partial.len() + 1 >= 1 positions were tried
        match best {
            Some(best) => Ok(best),
            None => Ok((partial.len(), closed_form_objective(partial, machines)?)),
        }
    }
}

impl SequencingOracle for WsptMciScheduler {
    fn sequence(&self, jobs: &[Job], machines: usize) -> Result<Schedule> {
        validate_oracle_input(jobs, machines)?;

        let ordered = wspt_order(jobs);
        let mut partial: Vec<Job> = Vec::with_capacity(ordered.len());
        partial.push(ordered[0]);

        for &job in &ordered[1..] {
            let (pos, objective) = Self::best_insertion(&partial, job, machines)?;
            partial.insert(pos, job);
            if self.config.log_insertions {
                debug!(job = %job, position = pos + 1, objective, "inserted job");
            }
        }

        let objective = if self.config.verify {
            verified_objective(&partial, machines)?
        } else {
            closed_form_objective(&partial, machines)?
        };

        trace!(jobs = partial.len(), machines, objective, "WSPT-MCI sequence built");
        Ok(Schedule::new(partial, objective))
    }
}
