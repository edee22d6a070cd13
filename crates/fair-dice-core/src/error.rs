//! Error taxonomy for the fair dice protocol.

use thiserror::Error;

/// Errors from configuration, protocol rounds and the counterpart
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrgError {
    /// Bad dice specification or out-of-range parameter. Raised before any
    /// round starts.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Out-of-order protocol step or a reveal that does not match its
    /// commitment. Fatal to the current round.
    #[error("Protocol violation: {0}")]
    ProtocolViolation(String),

    /// The counterpart left in the middle of a round.
    #[error("Counterpart abandoned the session")]
    CounterpartAbandoned,
}

impl FrgError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        FrgError::InvalidConfiguration(msg.into())
    }

    pub(crate) fn violation(msg: impl Into<String>) -> Self {
        FrgError::ProtocolViolation(msg.into())
    }

    /// Whether this error ends the session cleanly rather than as a failure
    pub fn is_abandonment(&self) -> bool {
        matches!(self, FrgError::CounterpartAbandoned)
    }
}

pub type Result<T> = std::result::Result<T, FrgError>;
