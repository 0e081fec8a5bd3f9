//! Build errors for the configuration builder.

use crate::machine::FsmError;
use thiserror::Error;

/// Errors that can occur when building a machine configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: String },

    #[error("State '{state}' declares event '{event}' more than once")]
    DuplicateEvent { state: String, event: String },
}

impl From<BuildError> for FsmError {
    fn from(err: BuildError) -> Self {
        FsmError::Configuration {
            reason: err.to_string(),
        }
    }
}
