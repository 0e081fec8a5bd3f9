//! Configuration violations found by strict validation.

use thiserror::Error;

/// A single problem found in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("no states declared")]
    NoStates,

    #[error("initial state '{state}' is not declared")]
    UnknownInitial { state: String },

    #[error("transition '{event}' from '{from}' targets undeclared state '{target}'")]
    UnknownTarget {
        from: String,
        event: String,
        target: String,
    },
}
