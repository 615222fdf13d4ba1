//! Input validation for flow-shop sequencing and outsourcing selection.
//!
//! Checks structural integrity of the inputs before any computation.
//! Detects:
//! - Duplicate job IDs
//! - Empty job sets passed to the oracle
//! - Zero machine counts
//! - Cost lists whose length disagrees with the job list
//! - Negative costs (where the caller forbids them) and negative budgets
//! - Job counts beyond what subset enumeration can represent
//!
//! All problems found are reported together. Callers convert the list into
//! [`FlowShopError::InvalidArgument`](crate::FlowShopError::InvalidArgument).

use std::collections::HashSet;

use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two jobs share the same ID.
    DuplicateId,
    /// The oracle was given no jobs.
    EmptyJobSet,
    /// Machine count is zero.
    ZeroMachines,
    /// Cost list length differs from job count.
    LengthMismatch,
    /// A job has a negative outsourcing cost.
    NegativeCost,
    /// The outsourcing budget is negative.
    NegativeBudget,
    /// Too many jobs for subset enumeration.
    TooManyJobs,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Whether negative per-job costs are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostPolicy {
    /// Any integer cost (exhaustive enumeration just sums them).
    AnyValue,
    /// Costs must be `>= 0` (they index the DP budget axis).
    NonNegative,
}

/// Validates the input to the sequencing oracle.
///
/// Checks:
/// 1. At least one job
/// 2. At least one machine
/// 3. No duplicate job IDs
pub fn validate_oracle_input(jobs: &[Job], machines: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyJobSet,
            "job set is empty",
        ));
    }
    check_machines(machines, &mut errors);
    check_duplicate_ids(jobs, &mut errors);

    finish(errors)
}

/// Validates the input shared by both outsourcing selectors.
///
/// Checks:
/// 1. Cost list length equals job count
/// 2. At least one machine
/// 3. Budget is non-negative
/// 4. No duplicate job IDs
/// 5. No negative cost (only under [`CostPolicy::NonNegative`])
pub fn validate_outsourcing_input(
    jobs: &[Job],
    costs: &[i64],
    machines: usize,
    budget: i64,
    policy: CostPolicy,
) -> ValidationResult {
    let mut errors = Vec::new();

    if jobs.len() != costs.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "outsourcing cost list has {} entries but there are {} jobs",
                costs.len(),
                jobs.len()
            ),
        ));
    }
    check_machines(machines, &mut errors);

    if budget < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeBudget,
            format!("outsourcing budget must be non-negative, got {budget}"),
        ));
    }

    check_duplicate_ids(jobs, &mut errors);

    if policy == CostPolicy::NonNegative {
        for (job, &cost) in jobs.iter().zip(costs) {
            if cost < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeCost,
                    format!("job {} has negative outsourcing cost {cost}", job.label()),
                ));
            }
        }
    }

    finish(errors)
}

/// Rejects job counts whose subsets do not fit a `max_jobs`-bit mask.
pub fn validate_enumeration_size(job_count: usize, max_jobs: usize) -> ValidationResult {
    if job_count > max_jobs {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::TooManyJobs,
            format!("subset enumeration supports up to {max_jobs} jobs, got {job_count}"),
        )]);
    }
    Ok(())
}

fn check_machines(machines: usize, errors: &mut Vec<ValidationError>) {
    if machines == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroMachines,
            "machine count must be positive",
        ));
    }
}

fn check_duplicate_ids(jobs: &[Job], errors: &mut Vec<ValidationError>) {
    let mut ids = HashSet::new();
    for job in jobs {
        if !ids.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate job ID: {}", job.id),
            ));
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_jobs() -> Vec<Job> {
        vec![Job::new(0, 2, 4), Job::new(1, 4, 1), Job::new(2, 3, 2)]
    }

    #[test]
    fn test_valid_oracle_input() {
        assert!(validate_oracle_input(&sample_jobs(), 2).is_ok());
    }

    #[test]
    fn test_empty_job_set() {
        let errors = validate_oracle_input(&[], 2).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyJobSet));
    }

    #[test]
    fn test_zero_machines() {
        let errors = validate_oracle_input(&sample_jobs(), 0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroMachines));
    }

    #[test]
    fn test_duplicate_job_id() {
        let jobs = vec![Job::new(0, 1, 1), Job::new(0, 2, 2)];
        let errors = validate_oracle_input(&jobs, 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_valid_outsourcing_input() {
        let result =
            validate_outsourcing_input(&sample_jobs(), &[120, 30, 100], 2, 100, CostPolicy::NonNegative);
        assert!(result.is_ok());
    }

    #[test]
    fn test_length_mismatch() {
        let errors =
            validate_outsourcing_input(&sample_jobs(), &[1, 2], 2, 10, CostPolicy::AnyValue).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::LengthMismatch));
    }

    #[test]
    fn test_negative_budget() {
        let errors =
            validate_outsourcing_input(&sample_jobs(), &[1, 2, 3], 2, -1, CostPolicy::AnyValue).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeBudget));
    }

    #[test]
    fn test_negative_cost_depends_on_policy() {
        let costs = [1, -2, 3];
        assert!(validate_outsourcing_input(&sample_jobs(), &costs, 2, 10, CostPolicy::AnyValue).is_ok());

        let errors =
            validate_outsourcing_input(&sample_jobs(), &costs, 2, 10, CostPolicy::NonNegative).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeCost);
        assert!(errors[0].message.contains("J2"));
    }

    #[test]
    fn test_enumeration_size() {
        assert!(validate_enumeration_size(62, 62).is_ok());
        let errors = validate_enumeration_size(63, 62).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TooManyJobs);
    }

    #[test]
    fn test_multiple_errors() {
        // Length mismatch + zero machines + negative budget
        let errors =
            validate_outsourcing_input(&sample_jobs(), &[], 0, -5, CostPolicy::NonNegative).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
