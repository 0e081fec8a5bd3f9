//! Builder for a single state's transition rules.

use crate::builder::error::BuildError;
use crate::core::StateDef;
use indexmap::IndexMap;

/// Collects the events a state reacts to.
#[derive(Debug, Clone, Default)]
pub struct StateBuilder {
    transitions: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Move to `target` when `event` fires.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.push((event.into(), target.into()));
        self
    }

    /// Build the state definition. Each event may be declared once.
    pub(crate) fn build(self, state: &str) -> Result<StateDef, BuildError> {
        let mut transitions = IndexMap::with_capacity(self.transitions.len());
        for (event, target) in self.transitions {
            if transitions.contains_key(&event) {
                return Err(BuildError::DuplicateEvent {
                    state: state.to_string(),
                    event,
                });
            }
            transitions.insert(event, target);
        }
        Ok(StateDef { transitions })
    }
}
