//! Retrace: a declarative finite state machine with undo/redo history
//!
//! A machine is described by a [`MachineConfig`]: a set of named states, the
//! state it starts in, and for each state the events it reacts to. The
//! [`Fsm`] engine tracks the active state, applies validated transitions,
//! and keeps a linear history that can be walked with undo and redo.
//!
//! # Core Concepts
//!
//! - **Configuration**: States and per-state event -> target rules, loaded
//!   from JSON or assembled with the [`builder`]
//! - **History**: Every state occupied along the current timeline plus a
//!   cursor; a new transition after an undo discards the redo branch
//! - **Errors**: Failed operations return an [`FsmError`] and change nothing
//!
//! # Example
//!
//! ```rust
//! use retrace::{Fsm, FsmError};
//! use serde_json::json;
//!
//! let mut fsm = Fsm::from_json(&json!({
//!     "initial": "idle",
//!     "states": {
//!         "idle": { "transitions": { "start": "running" } },
//!         "running": { "transitions": { "stop": "idle" } }
//!     }
//! }))?;
//!
//! fsm.trigger("start")?;
//! assert_eq!(fsm.get_state(), "running");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.get_state(), "idle");
//! assert!(fsm.redo());
//!
//! fsm.trigger("stop")?;
//! assert!(matches!(fsm.trigger("stop"), Err(FsmError::IllegalEvent { .. })));
//! # Ok::<(), FsmError>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{HistoryEntry, MachineConfig, StateDef, StateHistory};
pub use builder::{BuildError, ConfigBuilder};
pub use machine::{Fsm, FsmError};
pub use validation::ValidationMode;
