//! Random outsourcing instances.
//!
//! Draws processing times, weights and costs uniformly from inclusive
//! ranges. The budget is a fraction of the total outsourcing cost. With a
//! fixed seed the output is reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Job, OutsourcingInstance};

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceGenerator {
    /// Number of jobs.
    pub job_count: usize,
    /// Machine count of the generated instances.
    pub machines: usize,
    /// Inclusive processing-time range.
    pub processing_range: (u64, u64),
    /// Inclusive weight range.
    pub weight_range: (u64, u64),
    /// Inclusive outsourcing-cost range.
    pub cost_range: (i64, i64),
    /// Budget as a fraction of the total cost (clamped to 0.0..=1.0).
    pub budget_fraction: f64,
}

impl InstanceGenerator {
    /// Creates a generator for `job_count` jobs with default ranges.
    pub fn new(job_count: usize) -> Self {
        Self {
            job_count,
            machines: 2,
            processing_range: (1, 10),
            weight_range: (1, 10),
            cost_range: (1, 100),
            budget_fraction: 0.5,
        }
    }

    /// Sets the machine count.
    pub fn with_machines(mut self, machines: usize) -> Self {
        self.machines = machines;
        self
    }

    /// Sets the processing-time range.
    pub fn with_processing_range(mut self, min: u64, max: u64) -> Self {
        self.processing_range = (min.min(max), min.max(max));
        self
    }

    /// Sets the weight range.
    pub fn with_weight_range(mut self, min: u64, max: u64) -> Self {
        self.weight_range = (min.min(max), min.max(max));
        self
    }

    /// Sets the cost range.
    pub fn with_cost_range(mut self, min: i64, max: i64) -> Self {
        self.cost_range = (min.min(max), min.max(max));
        self
    }

    /// Sets the budget fraction.
    pub fn with_budget_fraction(mut self, fraction: f64) -> Self {
        self.budget_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Draws one instance from `rng`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> OutsourcingInstance {
        let (p_lo, p_hi) = self.processing_range;
        let (w_lo, w_hi) = self.weight_range;
        let (c_lo, c_hi) = self.cost_range;

        let jobs: Vec<Job> = (0..self.job_count)
            .map(|id| Job::new(id, rng.random_range(p_lo..=p_hi), rng.random_range(w_lo..=w_hi)))
            .collect();
        let costs: Vec<i64> = (0..self.job_count)
            .map(|_| rng.random_range(c_lo..=c_hi))
            .collect();

        let total = costs.iter().fold(0i64, |total, &c| total.saturating_add(c));
        let budget = (total.max(0) as f64 * self.budget_fraction).round() as i64;

        OutsourcingInstance::new(jobs, costs)
            .with_machines(self.machines)
            .with_budget(budget)
    }

    /// Draws one instance from a `SmallRng` seeded with `seed`.
    pub fn generate_seeded(&self, seed: u64) -> OutsourcingInstance {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_respected() {
        let generator = InstanceGenerator::new(50)
            .with_machines(4)
            .with_processing_range(3, 7)
            .with_weight_range(2, 2)
            .with_cost_range(10, 20);
        let inst = generator.generate_seeded(1);

        assert_eq!(inst.job_count(), 50);
        assert_eq!(inst.costs.len(), 50);
        assert_eq!(inst.machines, 4);
        for (i, job) in inst.jobs.iter().enumerate() {
            assert_eq!(job.id, i);
            assert!((3..=7).contains(&job.processing_time));
            assert_eq!(job.weight, 2);
        }
        assert!(inst.costs.iter().all(|c| (10..=20).contains(c)));
        assert!(inst.validate().is_ok());
    }

    #[test]
    fn test_budget_fraction() {
        let inst = InstanceGenerator::new(10)
            .with_budget_fraction(1.0)
            .generate_seeded(3);
        assert_eq!(inst.budget, inst.total_cost().unwrap());

        let inst = InstanceGenerator::new(10)
            .with_budget_fraction(0.0)
            .generate_seeded(3);
        assert_eq!(inst.budget, 0);

        assert_eq!(InstanceGenerator::new(1).with_budget_fraction(7.0).budget_fraction, 1.0);
    }

    #[test]
    fn test_seed_reproducible() {
        let generator = InstanceGenerator::new(12);
        assert_eq!(generator.generate_seeded(42), generator.generate_seeded(42));
    }

    #[test]
    fn test_swapped_range_bounds() {
        let generator = InstanceGenerator::new(1).with_processing_range(9, 4);
        assert_eq!(generator.processing_range, (4, 9));
    }
}
