//! Outsourcing decision (selector result) model.
//!
//! Records which jobs stay in-house (and in what order) and which are
//! outsourced. In-house and outsourced IDs together form an exact partition
//! of the input job IDs.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::instance::sum_costs;
use super::{Job, Schedule};
use crate::error::Result;

/// Result of an outsourcing selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutsourcingDecision {
    /// In-house jobs in processing order.
    pub in_house: Vec<Job>,
    /// Objective of the in-house sequence.
    pub objective: u64,
    /// Outsourced jobs (input order, no sequencing meaning).
    pub outsourced: Vec<Job>,
    /// Total outsourcing cost spent.
    pub outsourcing_cost: i64,
    /// Budget the decision was computed under.
    pub budget: i64,
}

impl OutsourcingDecision {
    /// Builds a decision from an in-house schedule and the outsourced jobs.
    pub fn new(schedule: Schedule, outsourced: Vec<Job>, outsourcing_cost: i64, budget: i64) -> Self {
        Self {
            in_house: schedule.sequence,
            objective: schedule.objective,
            outsourced,
            outsourcing_cost,
            budget,
        }
    }

    /// Everything outsourced, objective 0.
    ///
    /// # Errors
    /// [`FlowShopError::InvalidArgument`](crate::FlowShopError::InvalidArgument)
    /// when the cost total leaves `i64`.
    pub fn outsource_all(jobs: &[Job], costs: &[i64], budget: i64) -> Result<Self> {
        Ok(Self {
            in_house: Vec::new(),
            objective: 0,
            outsourced: jobs.to_vec(),
            outsourcing_cost: sum_costs(costs)?,
            budget,
        })
    }

    /// In-house job IDs in processing order.
    pub fn in_house_ids(&self) -> Vec<usize> {
        self.in_house.iter().map(|j| j.id).collect()
    }

    /// Outsourced job IDs.
    pub fn outsourced_ids(&self) -> Vec<usize> {
        self.outsourced.iter().map(|j| j.id).collect()
    }

    /// Whether the outsourcing spend stays within the budget.
    pub fn within_budget(&self) -> bool {
        self.outsourcing_cost <= self.budget
    }

    /// Whether in-house ∪ outsourced is exactly the ID set of `jobs`,
    /// with no duplicates and no omissions.
    pub fn is_partition_of(&self, jobs: &[Job]) -> bool {
        let mut seen = HashSet::new();
        for job in self.in_house.iter().chain(self.outsourced.iter()) {
            if !seen.insert(job.id) {
                return false;
            }
        }
        seen.len() == jobs.len() && jobs.iter().all(|j| seen.contains(&j.id))
    }
}

fn write_job_list(f: &mut fmt::Formatter<'_>, jobs: &[Job], separator: &str) -> fmt::Result {
    if jobs.is_empty() {
        return write!(f, "(none)");
    }
    for (i, job) in jobs.iter().enumerate() {
        if i > 0 {
            write!(f, "{separator}")?;
        }
        write!(f, "{job}")?;
    }
    Ok(())
}

impl fmt::Display for OutsourcingDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Best objective: {}", self.objective)?;
        writeln!(f, "Outsourcing cost: {} / {}", self.outsourcing_cost, self.budget)?;
        write!(f, "In-house order: ")?;
        write_job_list(f, &self.in_house, " -> ")?;
        writeln!(f)?;
        write!(f, "Outsourced jobs: ")?;
        write_job_list(f, &self.outsourced, ", ")
    }
}
