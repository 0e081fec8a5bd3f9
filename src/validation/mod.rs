//! Opt-in strict validation of machine configurations.
//!
//! By default an engine only learns that a transition points at an
//! undeclared state when that transition is taken. [`ValidationMode::Strict`]
//! checks every target before the engine is built, and reports all problems
//! at once using Stillwater's `Validation` instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use retrace::core::MachineConfig;
//! use retrace::validation::validate_config;
//! use serde_json::json;
//!
//! let config = MachineConfig::from_json(&json!({
//!     "initial": "a",
//!     "states": { "a": { "transitions": { "go": "b" } } }
//! }))
//! .unwrap();
//!
//! assert!(validate_config(&config).is_failure());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check_config, validate_config, ValidationMode};
pub use violations::ConfigViolation;
