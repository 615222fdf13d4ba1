//! Per-position breakdown of a sequence.
//!
//! Expands the closed-form model into one row per position so a caller can
//! audit how the objective accumulates.
//!
//! | Column | Definition |
//! |--------|-----------|
//! | `sum_p` | Processing time of positions 1..r |
//! | `max_p` | Largest processing time among positions 1..r |
//! | `completion` | `sum_p + (m - 1) * max_p` |
//! | `weighted` | `w_r * completion` |
//! | `cumulative` | Running objective |

use serde::{Deserialize, Serialize};

use crate::completion::{add_weighted, Prefixes};
use crate::error::{FlowShopError, Result};
use crate::models::Job;

/// One row of the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRow {
    /// 1-based position.
    pub position: usize,
    /// Job at this position.
    pub job_id: usize,
    pub processing_time: u64,
    pub weight: u64,
    pub sum_p: u64,
    pub max_p: u64,
    /// Completion time on the last machine.
    pub completion: u64,
    pub weighted: u64,
    pub cumulative: u64,
}

/// Sequence performance indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceKpi {
    /// Machine count the breakdown was computed for.
    pub machines: usize,
    /// One row per position.
    pub rows: Vec<PositionRow>,
    /// Completion time of the last job (0 when empty).
    pub makespan: u64,
    /// Total weighted completion time.
    pub total_weighted_completion: u64,
}

impl SequenceKpi {
    /// Computes the breakdown for an ordered sequence.
    ///
    /// # Errors
    /// [`FlowShopError::InvalidArgument`] when `machines == 0` or a weighted
    /// completion time does not fit in `u64`.
    pub fn calculate(sequence: &[Job], machines: usize) -> Result<Self> {
        let mut rows = Vec::with_capacity(sequence.len());
        let mut cumulative = 0u64;

        for (i, step) in Prefixes::new(sequence, machines)?.enumerate() {
            let (job, prefix) = step?;
            let weighted = add_weighted(0, job.weight, prefix.completion)?;
            cumulative = cumulative
                .checked_add(weighted)
                .ok_or_else(|| FlowShopError::overflow("weighted completion time"))?;
            rows.push(PositionRow {
                position: i + 1,
                job_id: job.id,
                processing_time: job.processing_time,
                weight: job.weight,
                sum_p: prefix.sum_p,
                max_p: prefix.max_p,
                completion: prefix.completion,
                weighted,
                cumulative,
            });
        }

        Ok(Self {
            machines,
            makespan: rows.last().map_or(0, |r| r.completion),
            total_weighted_completion: cumulative,
            rows,
        })
    }
}
