//! Sequencing oracle for a fixed in-house job set.
//!
//! # Algorithm
//!
//! `WsptMciScheduler` orders jobs by WSPT and then builds the sequence by
//! minimal-cost insertion over the closed-form completion-time model. It is
//! a greedy heuristic, not an exact sequencer.
//!
//! # KPI
//!
//! `SequenceKpi` breaks an ordered sequence down per position (running
//! processing sum, running maximum, completion time, weighted contribution).
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6
//! - Smith (1956), "Various optimizers for single-stage production"

mod config;
mod kpi;
mod mci;
pub mod wspt;

pub use config::OracleConfig;
pub use kpi::{PositionRow, SequenceKpi};
pub use mci::WsptMciScheduler;

use std::fmt::Debug;

use crate::error::Result;
use crate::models::{Job, Schedule};

/// Produces an ordered in-house sequence and its objective for a job set.
///
/// Implementations must return a permutation of `jobs` and fail with
/// [`FlowShopError::InvalidArgument`](crate::FlowShopError::InvalidArgument)
/// on an empty set or `machines == 0`. Calls are independent; no state is
/// carried between them.
pub trait SequencingOracle: Debug {
    /// Sequences `jobs` on a proportional flow shop with `machines` machines.
    fn sequence(&self, jobs: &[Job], machines: usize) -> Result<Schedule>;
}
