//! Error types for mediaplan.

use thiserror::Error;

/// Result type alias for mediaplan operations.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Error types for the allocation matrix and media plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Allocation edit that cannot be applied (out of range, non-numeric,
    /// or nothing left to absorb the remainder).
    #[error("Invalid allocation input: {reason}")]
    InvalidAllocationInput { reason: String },

    /// Model is not part of the current selection.
    #[error("Unknown model: {id}")]
    UnknownModel { id: String },

    /// Period is not part of the matrix or plan.
    #[error("Unknown period: {id}")]
    UnknownPeriod { id: String },

    /// Channel is not part of the plan.
    #[error("Unknown channel: {id}")]
    UnknownChannel { id: String },

    /// Spend input that does not fit a spend amount.
    #[error("Invalid spend: {input}")]
    InvalidSpend { input: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl PlanError {
    /// Create an invalid allocation input error.
    pub fn invalid_allocation(reason: impl Into<String>) -> Self {
        Self::InvalidAllocationInput {
            reason: reason.into(),
        }
    }

    /// Create an unknown model error.
    pub fn unknown_model(id: impl Into<String>) -> Self {
        Self::UnknownModel { id: id.into() }
    }

    /// Create an unknown period error.
    pub fn unknown_period(id: impl Into<String>) -> Self {
        Self::UnknownPeriod { id: id.into() }
    }

    /// Create an unknown channel error.
    pub fn unknown_channel(id: impl Into<String>) -> Self {
        Self::UnknownChannel { id: id.into() }
    }

    /// Create an invalid spend error.
    pub fn invalid_spend(input: impl Into<String>) -> Self {
        Self::InvalidSpend {
            input: input.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether this error is an allocation edit rejection.
    pub fn is_allocation_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidAllocationInput { .. }
                | Self::UnknownModel { .. }
                | Self::UnknownPeriod { .. }
        )
    }
}
