//! Flow-shop domain models.
//!
//! Provides the data types for proportional flow-shop problems with
//! outsourcing and their solutions.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Job` | Unit of work with one processing time and a weight |
//! | `Schedule` | Ordered in-house sequence and its objective |
//! | `OutsourcingInstance` | Jobs, per-job costs, machine count, budget |
//! | `OutsourcingDecision` | In-house sequence + outsourced jobs + spend |

mod decision;
mod instance;
mod job;
mod schedule;

pub use decision::OutsourcingDecision;
pub(crate) use instance::sum_costs;
pub use instance::OutsourcingInstance;
pub use job::Job;
pub use schedule::Schedule;
