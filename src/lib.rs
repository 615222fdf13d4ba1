//! Proportional flow-shop scheduling with outsourcing.
//!
//! Every job takes the same processing time on each of `m` machines. Jobs
//! are either processed in-house or outsourced at a per-job cost; the total
//! outsourcing cost must fit a budget, and the in-house jobs are sequenced
//! to minimize the sum of weighted completion times on the last machine.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Schedule`, `OutsourcingInstance`,
//!   `OutsourcingDecision`
//! - **`completion`**: Closed-form and table-based completion-time model
//! - **`scheduler`**: WSPT-MCI sequencing oracle and per-position KPIs
//! - **`outsourcing`**: Exhaustive and budget-indexed DP selectors
//! - **`generator`**: Seeded random instances
//! - **`validation`**: Input integrity checks
//!
//! # Example
//!
//! ```
//! use u_flowshop::{select_dp, Job};
//!
//! let jobs = vec![Job::new(0, 2, 4), Job::new(1, 4, 1), Job::new(2, 3, 2)];
//! let decision = select_dp(&jobs, &[120, 30, 100], 2, 100).unwrap();
//! assert_eq!(decision.objective, 26);
//! assert!(decision.within_budget());
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Panwalkar, Smith & Koulamas (2013), "Review of the ordered and
//!   proportionate flow shop scheduling research"

pub mod completion;
pub mod error;
pub mod generator;
pub mod models;
pub mod outsourcing;
pub mod scheduler;
pub mod validation;

pub use error::{FlowShopError, Result};
pub use models::{Job, OutsourcingDecision, OutsourcingInstance, Schedule};
pub use outsourcing::{objective_only, select_dp, select_exhaustive, sequence_and_objective};
