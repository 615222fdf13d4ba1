//! Job model.
//!
//! In a proportional flow shop a job occupies every machine for the same
//! processing time, so a job is fully described by that time and a weight.
//!
//! # Reference
//! Panwalkar, Smith & Koulamas (2013), "Review of the ordered and proportionate
//! flow shop scheduling research"

use serde::{Deserialize, Serialize};
use std::fmt;

/// A job to be processed in-house or outsourced.
///
/// `id` is stable across reordering and is how a job is matched back to its
/// input record after the oracle resequences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier (0-based).
    pub id: usize,
    /// Processing time, identical on every machine.
    pub processing_time: u64,
    /// Weight (priority multiplier in the objective).
    pub weight: u64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: usize, processing_time: u64, weight: u64) -> Self {
        Self {
            id,
            processing_time,
            weight,
        }
    }

    /// Display label used in reports (`J1` for id 0).
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "J{}", self.id + 1)
    }
}
