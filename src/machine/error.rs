//! Engine error types.

use thiserror::Error;

/// Errors returned by [`Fsm`](crate::machine::Fsm) operations.
///
/// Every failure leaves the engine exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// No usable configuration was supplied at construction.
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },

    /// The requested state is not declared in the configuration.
    #[error("unknown state: '{state}'")]
    UnknownState { state: String },

    /// The current state has no transition registered for the event.
    #[error("illegal event: '{event}' is not handled in state '{state}'")]
    IllegalEvent { state: String, event: String },
}

impl FsmError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        FsmError::Configuration {
            reason: reason.into(),
        }
    }

    /// Returns a stable code identifying the error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            FsmError::Configuration { .. } => "CONFIGURATION_ERROR",
            FsmError::UnknownState { .. } => "UNKNOWN_STATE",
            FsmError::IllegalEvent { .. } => "ILLEGAL_EVENT",
        }
    }
}

impl From<serde_json::Error> for FsmError {
    fn from(err: serde_json::Error) -> Self {
        FsmError::configuration(err.to_string())
    }
}
