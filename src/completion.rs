//! Completion-time model for proportional flow shops.
//!
//! In a proportional flow shop job `j` takes `p_j` on every one of the `m`
//! machines. For a sequence in positions `r = 1..n`, the completion time on
//! the last machine has the closed form
//!
//! ```text
//! C_r = sum(p_1..p_r) + (m - 1) * max(p_1..p_r)
//! ```
//!
//! The general flow-shop recurrence
//!
//! ```text
//! C[i][k] = max(C[i-1][k], C[i][k-1]) + p_i
//! ```
//!
//! gives the same values. It is kept only as an independent check on the
//! closed form; a disagreement is a [`FlowShopError::ConsistencyFailure`].
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6.1

use crate::error::{FlowShopError, Result};
use crate::models::Job;

fn check_machines(machines: usize) -> Result<()> {
    if machines == 0 {
        return Err(FlowShopError::invalid("machine count must be positive"));
    }
    Ok(())
}

/// Running state of the closed form after one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Prefix {
    pub sum_p: u64,
    pub max_p: u64,
    /// `sum_p + (m - 1) * max_p`
    pub completion: u64,
}

/// Walks a sequence position by position, yielding each job with its
/// [`Prefix`]. Yields an error once any prefix value leaves `u64`.
pub(crate) struct Prefixes<'a> {
    jobs: std::slice::Iter<'a, Job>,
    lag: u64,
    sum_p: u64,
    max_p: u64,
}

impl<'a> Prefixes<'a> {
    pub(crate) fn new(sequence: &'a [Job], machines: usize) -> Result<Self> {
        check_machines(machines)?;
        Ok(Self {
            jobs: sequence.iter(),
            lag: (machines - 1) as u64,
            sum_p: 0,
            max_p: 0,
        })
    }

    fn advance(&mut self, job: &Job) -> Option<Prefix> {
        self.sum_p = self.sum_p.checked_add(job.processing_time)?;
        self.max_p = self.max_p.max(job.processing_time);
        let completion = self.lag.checked_mul(self.max_p)?.checked_add(self.sum_p)?;
        Some(Prefix {
            sum_p: self.sum_p,
            max_p: self.max_p,
            completion,
        })
    }
}

impl Iterator for Prefixes<'_> {
    type Item = Result<(Job, Prefix)>;

    fn next(&mut self) -> Option<Self::Item> {
        let job = *self.jobs.next()?;
        let step = self
            .advance(&job)
            .map(|prefix| (job, prefix))
            .ok_or_else(|| FlowShopError::overflow("completion time"));
        Some(step)
    }
}

/// Adds `weight * completion` to a running objective.
pub(crate) fn add_weighted(objective: u64, weight: u64, completion: u64) -> Result<u64> {
    weight
        .checked_mul(completion)
        .and_then(|weighted| objective.checked_add(weighted))
        .ok_or_else(|| FlowShopError::overflow("weighted completion time"))
}

/// Weighted completion-time objective `Σ w_r * C_r`, by the closed form.
///
/// # Errors
/// [`FlowShopError::InvalidArgument`] when `machines == 0` or the objective
/// does not fit in `u64`.
pub fn closed_form_objective(sequence: &[Job], machines: usize) -> Result<u64> {
    Prefixes::new(sequence, machines)?.try_fold(0u64, |objective, step| {
        let (job, prefix) = step?;
        add_weighted(objective, job.weight, prefix.completion)
    })
}

/// Weighted completion-time objective by the machine-by-machine recurrence.
///
/// Keeps one row of the `C[i][k]` table: before job `i` is processed the row
/// holds `C[i-1][*]`.
///
/// # Errors
/// [`FlowShopError::InvalidArgument`] when `machines == 0` or a table entry
/// does not fit in `u64`.
pub fn table_objective(sequence: &[Job], machines: usize) -> Result<u64> {
    check_machines(machines)?;
    let mut row = vec![0u64; machines];
    let mut objective = 0u64;
    for job in sequence {
        let mut left = 0u64;
        for cell in row.iter_mut() {
            *cell = (*cell)
                .max(left)
                .checked_add(job.processing_time)
                .ok_or_else(|| FlowShopError::overflow("completion time"))?;
            left = *cell;
        }
        objective = add_weighted(objective, job.weight, left)?;
    }
    Ok(objective)
}

/// Computes the objective both ways and returns it if they agree.
///
/// # Errors
/// - [`FlowShopError::InvalidArgument`] when `machines == 0` or a value
///   does not fit in `u64`.
/// - [`FlowShopError::ConsistencyFailure`] when the two values differ.
pub fn verified_objective(sequence: &[Job], machines: usize) -> Result<u64> {
    let closed_form = closed_form_objective(sequence, machines)?;
    let table = table_objective(sequence, machines)?;
    if closed_form != table {
        return Err(FlowShopError::ConsistencyFailure { closed_form, table });
    }
    Ok(closed_form)
}
