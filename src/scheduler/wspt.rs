//! Weighted Shortest Processing Time ordering.
//!
//! Jobs are ranked by decreasing `w / p`. Ratios are compared by
//! cross-multiplication in `u128`, so no rounding is involved:
//!
//! ```text
//! w_a / p_a > w_b / p_b  <=>  w_a * p_b > w_b * p_a
//! ```
//!
//! On an exact tie the job with the smaller processing time goes first.
//! Jobs with `p = 0` cross-multiply to zero against each other and all rank
//! ahead of jobs with `p > 0`.
//!
//! # Reference
//! Smith (1956), "Various optimizers for single-stage production"

use std::cmp::Ordering;

use crate::models::Job;

/// Compares two jobs by WSPT priority. `Less` means `a` is scheduled first.
pub fn wspt_cmp(a: &Job, b: &Job) -> Ordering {
    let left = a.weight as u128 * b.processing_time as u128;
    let right = b.weight as u128 * a.processing_time as u128;
    right
        .cmp(&left)
        .then_with(|| a.processing_time.cmp(&b.processing_time))
}

/// Returns the jobs in WSPT order. The sort is stable, so full ties keep
/// their input order.
pub fn wspt_order(jobs: &[Job]) -> Vec<Job> {
    let mut ordered = jobs.to_vec();
    ordered.sort_by(wspt_cmp);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(jobs: &[Job]) -> Vec<usize> {
        jobs.iter().map(|j| j.id).collect()
    }

    #[test]
    fn test_decreasing_ratio() {
        // ratios: 2.0, 0.25, 0.667
        let jobs = vec![Job::new(0, 2, 4), Job::new(1, 4, 1), Job::new(2, 3, 2)];
        assert_eq!(ids(&wspt_order(&jobs)), vec![0, 2, 1]);
    }

    #[test]
    fn test_ratio_tie_prefers_smaller_processing_time() {
        // both ratio 1/2
        let jobs = vec![Job::new(0, 4, 2), Job::new(1, 2, 1)];
        assert_eq!(ids(&wspt_order(&jobs)), vec![1, 0]);
    }

    #[test]
    fn test_full_tie_is_stable() {
        let jobs = vec![Job::new(5, 3, 3), Job::new(1, 3, 3), Job::new(3, 3, 3)];
        assert_eq!(ids(&wspt_order(&jobs)), vec![5, 1, 3]);
    }

    #[test]
    fn test_zero_processing_time_first() {
        let jobs = vec![Job::new(0, 5, 100), Job::new(1, 0, 1)];
        assert_eq!(ids(&wspt_order(&jobs)), vec![1, 0]);
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let jobs = vec![Job::new(0, u64::MAX, u64::MAX - 1), Job::new(1, u64::MAX, u64::MAX)];
        assert_eq!(ids(&wspt_order(&jobs)), vec![1, 0]);
    }
}
