//! Declarative machine configuration.
//!
//! A configuration names every state, the state the machine starts in, and
//! for each state the events it reacts to:
//!
//! ```json
//! {
//!   "initial": "idle",
//!   "states": {
//!     "idle":    { "transitions": { "start": "running" } },
//!     "running": { "transitions": { "stop": "idle" } }
//!   }
//! }
//! ```
//!
//! Maps keep declaration order. Transition targets are not checked when a
//! configuration is loaded; see [`crate::validation`] for the up-front check.

use crate::machine::FsmError;
use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

const MISSING_CONFIG: &str = "config should be passed to constructor";

/// Transition rules of a single state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event name -> target state name.
    #[serde(default, deserialize_with = "unique_keys")]
    pub transitions: IndexMap<String, String>,
}

impl StateDef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target state for `event`, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Handled events in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys().map(String::as_str)
    }
}

/// Complete machine configuration.
///
/// Owned by the engine after construction and never mutated again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// State the machine starts in.
    pub initial: String,

    /// All states, in declaration order.
    #[serde(deserialize_with = "unique_keys")]
    pub states: IndexMap<String, StateDef>,
}

impl MachineConfig {
    /// Creates a configuration with no states.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Reads a configuration from an already-parsed JSON value.
    ///
    /// `null` is treated as an absent configuration.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, FsmError> {
        if value.is_null() {
            return Err(FsmError::configuration(MISSING_CONFIG));
        }
        Ok(Self::deserialize(value)?)
    }

    /// Parses a configuration from JSON text.
    ///
    /// Unlike [`MachineConfig::from_json`], repeated keys in the text are
    /// detected here, because a `serde_json::Value` has already merged them.
    pub fn from_json_str(json: &str) -> Result<Self, FsmError> {
        if json.trim().is_empty() {
            return Err(FsmError::configuration(MISSING_CONFIG));
        }
        serde_json::from_str::<Option<Self>>(json)?
            .ok_or_else(|| FsmError::configuration(MISSING_CONFIG))
    }

    pub(crate) fn require(config: Option<Self>) -> Result<Self, FsmError> {
        config.ok_or_else(|| FsmError::configuration(MISSING_CONFIG))
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    pub fn state(&self, state: &str) -> Option<&StateDef> {
        self.states.get(state)
    }

    /// State names in declaration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// Looks up the target of `event` when fired in `state`.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.states.get(state).and_then(|def| def.target(event))
    }
}

/// Deserializes a string-keyed map, rejecting repeated keys instead of
/// letting the last occurrence win.
fn unique_keys<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct UniqueKeyVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeyVisitor<V> {
        type Value = IndexMap<String, V>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map with unique string keys")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, V>()? {
                if entries.contains_key(&key) {
                    return Err(de::Error::custom(format!("duplicate key '{key}'")));
                }
                entries.insert(key, value);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(UniqueKeyVisitor(PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "initial": "idle",
            "states": {
                "idle": { "transitions": { "start": "running" } },
                "running": { "transitions": { "stop": "idle", "pause": "paused" } },
                "paused": { "transitions": { "resume": "running", "stop": "idle" } }
            }
        })
    }

    #[test]
    fn parses_states_in_declaration_order() {
        let config = MachineConfig::from_json(&sample()).unwrap();

        assert_eq!(config.initial, "idle");
        let names: Vec<&str> = config.state_names().collect();
        assert_eq!(names, vec!["idle", "running", "paused"]);
    }

    #[test]
    fn looks_up_transition_targets() {
        let config = MachineConfig::from_json(&sample()).unwrap();

        assert_eq!(config.target("idle", "start"), Some("running"));
        assert_eq!(config.target("running", "pause"), Some("paused"));
        assert_eq!(config.target("idle", "stop"), None);
        assert_eq!(config.target("nowhere", "start"), None);
    }

    #[test]
    fn events_keep_declaration_order() {
        let config = MachineConfig::from_json(&sample()).unwrap();
        let events: Vec<&str> = config.state("running").unwrap().events().collect();
        assert_eq!(events, vec!["stop", "pause"]);
    }

    #[test]
    fn transitions_default_to_empty() {
        let config = MachineConfig::from_json(&json!({
            "initial": "done",
            "states": { "done": {} }
        }))
        .unwrap();

        assert!(config.state("done").unwrap().transitions.is_empty());
    }

    #[test]
    fn null_config_is_rejected() {
        let result = MachineConfig::from_json(&serde_json::Value::Null);
        assert!(matches!(result, Err(FsmError::Configuration { .. })));
    }

    #[test]
    fn malformed_config_is_rejected() {
        let result = MachineConfig::from_json(&json!({ "states": {} }));
        assert!(matches!(result, Err(FsmError::Configuration { .. })));

        let result = MachineConfig::from_json(&json!(["idle"]));
        assert!(matches!(result, Err(FsmError::Configuration { .. })));
    }

    #[test]
    fn unknown_targets_are_accepted_at_load_time() {
        let config = MachineConfig::from_json(&json!({
            "initial": "a",
            "states": { "a": { "transitions": { "go": "missing" } } }
        }))
        .unwrap();

        assert_eq!(config.target("a", "go"), Some("missing"));
        assert!(!config.has_state("missing"));
    }

    #[test]
    fn json_text_rejects_duplicate_events() {
        let text = r#"{
            "initial": "a",
            "states": {
                "a": { "transitions": { "go": "b", "go": "a" } },
                "b": {}
            }
        }"#;

        match MachineConfig::from_json_str(text) {
            Err(FsmError::Configuration { reason }) => assert!(reason.contains("duplicate key 'go'")),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn json_text_rejects_duplicate_states() {
        let text = r#"{ "initial": "a", "states": { "a": {}, "a": {} } }"#;
        assert!(matches!(
            MachineConfig::from_json_str(text),
            Err(FsmError::Configuration { .. })
        ));
    }

    #[test]
    fn empty_or_null_text_is_absent() {
        assert!(matches!(
            MachineConfig::from_json_str("   "),
            Err(FsmError::Configuration { .. })
        ));
        assert!(matches!(
            MachineConfig::from_json_str("null"),
            Err(FsmError::Configuration { .. })
        ));
    }

    #[test]
    fn config_serializes_in_input_shape() {
        let config = MachineConfig::from_json(&sample()).unwrap();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value, sample());
    }
}
