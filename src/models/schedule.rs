//! Schedule (sequencing result) model.
//!
//! A schedule is an ordered list of jobs together with its weighted
//! completion-time objective on the last machine. Position in the list
//! (1-based) determines completion-time accumulation.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6

use serde::{Deserialize, Serialize};

use super::Job;

/// An ordered job sequence and its objective value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Jobs in processing order.
    pub sequence: Vec<Job>,
    /// Sum of `weight * completion_time` on the last machine.
    pub objective: u64,
}

impl Schedule {
    /// Creates a schedule from an ordered sequence and its objective.
    pub fn new(sequence: Vec<Job>, objective: u64) -> Self {
        Self {
            sequence,
            objective,
        }
    }

    /// The empty schedule (objective 0).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of scheduled jobs.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether no job is scheduled.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Job IDs in processing order.
    pub fn job_ids(&self) -> Vec<usize> {
        self.sequence.iter().map(|j| j.id).collect()
    }
}
