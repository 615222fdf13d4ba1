//! Sequencing oracle configuration.

use serde::{Deserialize, Serialize};

/// Options for [`WsptMciScheduler`](super::WsptMciScheduler).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Recompute the final objective with the completion-time table and fail
    /// on disagreement.
    pub verify: bool,
    /// Emit a `debug` event for every insertion step.
    pub log_insertions: bool,
}

impl OracleConfig {
    /// Default configuration: no verification, no insertion log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables table verification.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Enables or disables per-insertion log events.
    pub fn with_log_insertions(mut self, log_insertions: bool) -> Self {
        self.log_insertions = log_insertions;
        self
    }
}
