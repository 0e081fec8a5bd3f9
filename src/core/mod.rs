//! Core data types: machine configuration and navigation history.
//!
//! Neither type knows about the other. The engine in [`crate::machine`]
//! validates states against the configuration before they reach the history.

mod config;
mod history;

pub use config::{MachineConfig, StateDef};
pub use history::{HistoryEntry, StateHistory};
