//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a macro for assembling a
//! [`MachineConfig`] in code instead of loading it from JSON.

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use machine::ConfigBuilder;
pub use state::StateBuilder;

use crate::core::MachineConfig;

/// Create a cyclic configuration where `event` advances each state to the
/// next and the last state wraps around to the first.
///
/// The first state is the initial state.
///
/// # Example
///
/// ```
/// use retrace::builder::cycle;
///
/// let config = cycle("next", &["red", "green", "yellow"]).unwrap();
/// assert_eq!(config.initial, "red");
/// assert_eq!(config.target("yellow", "next"), Some("red"));
/// ```
pub fn cycle(event: &str, states: &[&str]) -> Result<MachineConfig, BuildError> {
    let Some(first) = states.first() else {
        return Err(BuildError::NoStates);
    };

    let mut builder = ConfigBuilder::new().initial(*first);
    for (i, state) in states.iter().enumerate() {
        let next = states[(i + 1) % states.len()];
        builder = builder.state(*state, |s| s.on(event, next));
    }
    builder.build()
}
