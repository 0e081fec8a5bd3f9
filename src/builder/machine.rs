//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::MachineConfig;
use crate::machine::{Fsm, FsmError};
use indexmap::IndexMap;

/// Builder for constructing machine configurations with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: Vec<(String, StateBuilder)>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state and configure its transitions.
    pub fn state<F>(mut self, name: impl Into<String>, configure: F) -> Self
    where
        F: FnOnce(StateBuilder) -> StateBuilder,
    {
        self.states.push((name.into(), configure(StateBuilder::new())));
        self
    }

    /// Declare a state with no outgoing transitions.
    pub fn terminal(self, name: impl Into<String>) -> Self {
        self.state(name, |s| s)
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing or a key repeats.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut states = IndexMap::with_capacity(self.states.len());
        for (name, builder) in self.states {
            if states.contains_key(&name) {
                return Err(BuildError::DuplicateState { state: name });
            }
            let def = builder.build(&name)?;
            states.insert(name, def);
        }

        Ok(MachineConfig { initial, states })
    }

    /// Build the configuration and start an engine on it.
    pub fn build_machine(self) -> Result<Fsm, FsmError> {
        Fsm::new(self.build()?)
    }
}
