//! Error types.
//!
//! Every operation in this crate is a pure computation that either returns a
//! complete result or fails outright. There are no retries and no partial
//! results.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by the completion model, the sequencing oracle and the
/// outsourcing selectors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowShopError {
    /// Caller-supplied input is malformed (length mismatch, zero machines,
    /// negative cost or budget, empty oracle input, too many jobs) or too
    /// large for the objective or a cost total to be represented.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Closed-form and table-based objectives disagree for the same sequence.
    #[error("consistency failure: closed-form objective {closed_form} != table objective {table}")]
    ConsistencyFailure { closed_form: u64, table: u64 },

    /// Exhaustive and DP selectors reported different optimal objectives.
    #[error("objective mismatch: exhaustive = {exhaustive}, dp = {dp}")]
    ObjectiveMismatch { exhaustive: u64, dp: u64 },
}

impl FlowShopError {
    /// Shorthand for an [`FlowShopError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// An [`FlowShopError::InvalidArgument`] for a quantity that left its
    /// integer range.
    pub fn overflow(quantity: &str) -> Self {
        Self::invalid(format!("{quantity} overflows its integer range"))
    }
}

impl From<Vec<ValidationError>> for FlowShopError {
    fn from(errors: Vec<ValidationError>) -> Self {
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::InvalidArgument { message }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FlowShopError>;
