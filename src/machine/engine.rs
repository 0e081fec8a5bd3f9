//! The FSM engine: configuration plus navigable history.

use crate::core::{MachineConfig, StateHistory};
use crate::machine::error::FsmError;
use crate::validation::{check_config, ValidationMode};
use uuid::Uuid;

/// Finite state machine with undo/redo navigation.
///
/// The engine owns an immutable [`MachineConfig`] and a [`StateHistory`] of
/// every state occupied along the current timeline. Every successful
/// [`change_state`](Fsm::change_state) or [`trigger`](Fsm::trigger) pushes a
/// history entry; [`undo`](Fsm::undo) and [`redo`](Fsm::redo) move through
/// it without deleting anything.
///
/// # Example
///
/// ```rust
/// use retrace::{Fsm, FsmError};
/// use serde_json::json;
///
/// let mut fsm = Fsm::from_json(&json!({
///     "initial": "idle",
///     "states": {
///         "idle": { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// }))
/// .unwrap();
///
/// fsm.trigger("start").unwrap();
/// assert_eq!(fsm.get_state(), "running");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.get_state(), "idle");
///
/// assert!(matches!(fsm.trigger("stop"), Err(FsmError::IllegalEvent { .. })));
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    id: Uuid,
    config: MachineConfig,
    history: StateHistory,
}

impl Fsm {
    /// Build an engine and move it to the configured initial state.
    ///
    /// Fails with [`FsmError::UnknownState`] if the initial state is not
    /// declared.
    pub fn new(config: MachineConfig) -> Result<Self, FsmError> {
        let mut fsm = Self {
            id: Uuid::new_v4(),
            config,
            history: StateHistory::new(),
        };
        fsm.reset()?;

        tracing::debug!(
            machine = %fsm.id,
            initial = %fsm.config.initial,
            states = fsm.config.states.len(),
            "state machine created"
        );
        Ok(fsm)
    }

    /// Build an engine, checking the whole configuration first when `mode`
    /// is [`ValidationMode::Strict`].
    pub fn with_mode(config: MachineConfig, mode: ValidationMode) -> Result<Self, FsmError> {
        if mode == ValidationMode::Strict {
            check_config(&config)?;
        }
        Self::new(config)
    }

    /// Build an engine from a configuration that may be absent.
    pub fn try_from_option(config: Option<MachineConfig>) -> Result<Self, FsmError> {
        Self::new(MachineConfig::require(config)?)
    }

    /// Build an engine from an already-parsed JSON configuration.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, FsmError> {
        Self::new(MachineConfig::from_json(value)?)
    }

    /// Build an engine from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, FsmError> {
        Self::new(MachineConfig::from_json_str(json)?)
    }

    /// Name of the active state.
    pub fn get_state(&self) -> &str {
        // History is only ever empty inside reset and clear_history.
        self.history
            .current()
            .unwrap_or(self.config.initial.as_str())
    }

    /// Go directly to `target`, discarding any redo branch.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.config.has_state(target) {
            tracing::warn!(machine = %self.id, state = target, "unknown state requested");
            return Err(FsmError::UnknownState {
                state: target.to_string(),
            });
        }

        let from = self.history.current().map(str::to_owned);
        let discarded = self.history.push(target);

        tracing::debug!(
            machine = %self.id,
            from = from.as_deref().unwrap_or("<none>"),
            to = target,
            discarded,
            "state changed"
        );
        Ok(())
    }

    /// Fire `event` from the active state.
    ///
    /// A configured target that names an undeclared state surfaces as
    /// [`FsmError::UnknownState`].
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let state = self.get_state();
        let Some(target) = self.config.target(state, event) else {
            tracing::warn!(machine = %self.id, state, event, "illegal event");
            return Err(FsmError::IllegalEvent {
                state: state.to_string(),
                event: event.to_string(),
            });
        };

        let target = target.to_owned();
        self.change_state(&target)
    }

    /// Return to the initial state with a single-entry history.
    pub fn reset(&mut self) -> Result<(), FsmError> {
        let initial = self.config.initial.clone();
        self.change_state(&initial)?;
        self.clear_history()?;

        tracing::debug!(machine = %self.id, state = %initial, "state machine reset");
        Ok(())
    }

    /// State names, optionally only those that handle `event`.
    ///
    /// Both forms keep declaration order.
    pub fn get_states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None => self.config.state_names().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, def)| def.handles(event))
                .map(|(name, _)| name.as_str())
                .collect(),
        }
    }

    /// All declared state names.
    pub fn states(&self) -> Vec<&str> {
        self.get_states(None)
    }

    /// States that have a transition for `event`.
    pub fn states_with_event(&self, event: &str) -> Vec<&str> {
        self.get_states(Some(event))
    }

    /// Step back one history entry. Returns `false` if already at the oldest.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            tracing::debug!(machine = %self.id, state = self.get_state(), "undo");
        }
        moved
    }

    /// Step forward one history entry. Returns `false` if already at the newest.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            tracing::debug!(machine = %self.id, state = self.get_state(), "redo");
        }
        moved
    }

    /// Forget all undo/redo history, keeping the active state.
    pub fn clear_history(&mut self) -> Result<(), FsmError> {
        let current = self.get_state().to_owned();
        self.history.clear();
        self.change_state(&current)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Events the active state reacts to, in declaration order.
    pub fn available_events(&self) -> Vec<&str> {
        self.config
            .state(self.get_state())
            .map(|def| def.events().collect())
            .unwrap_or_default()
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Random identifier attached to this engine's log events.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn player() -> Fsm {
        Fsm::from_json(&json!({
            "initial": "stopped",
            "states": {
                "stopped": { "transitions": { "play": "playing" } },
                "playing": { "transitions": { "pause": "paused", "stop": "stopped" } },
                "paused": { "transitions": { "play": "playing", "stop": "stopped" } }
            }
        }))
        .unwrap()
    }

    #[test]
    fn starts_in_initial_state() {
        let fsm = player();
        assert_eq!(fsm.get_state(), "stopped");
        assert_eq!(fsm.history().len(), 1);
        assert_eq!(fsm.history().cursor(), Some(0));
    }

    #[test]
    fn null_config_fails() {
        let result = Fsm::from_json(&serde_json::Value::Null);
        assert!(matches!(result, Err(FsmError::Configuration { .. })));
    }

    #[test]
    fn absent_config_fails() {
        let result = Fsm::try_from_option(None);
        assert!(matches!(result, Err(FsmError::Configuration { .. })));
    }

    #[test]
    fn unknown_initial_state_fails() {
        let result = Fsm::from_json(&json!({
            "initial": "missing",
            "states": { "a": {} }
        }));
        assert_eq!(
            result.unwrap_err(),
            FsmError::UnknownState {
                state: "missing".to_string()
            }
        );
    }

    #[test]
    fn change_state_moves_to_target() {
        let mut fsm = player();
        fsm.change_state("paused").unwrap();
        assert_eq!(fsm.get_state(), "paused");
        assert_eq!(fsm.history().path(), vec!["stopped", "paused"]);
    }

    #[test]
    fn change_state_rejects_unknown_state() {
        let mut fsm = player();
        let result = fsm.change_state("rewinding");

        assert!(matches!(result, Err(FsmError::UnknownState { .. })));
        assert_eq!(fsm.get_state(), "stopped");
        assert_eq!(fsm.history().len(), 1);
    }

    #[test]
    fn trigger_follows_transition() {
        let mut fsm = player();
        fsm.trigger("play").unwrap();
        fsm.trigger("pause").unwrap();
        assert_eq!(fsm.get_state(), "paused");
    }

    #[test]
    fn trigger_rejects_unhandled_event() {
        let mut fsm = player();
        let result = fsm.trigger("pause");

        assert_eq!(
            result.unwrap_err(),
            FsmError::IllegalEvent {
                state: "stopped".to_string(),
                event: "pause".to_string(),
            }
        );
        assert_eq!(fsm.get_state(), "stopped");
        assert_eq!(fsm.history().len(), 1);
    }

    #[test]
    fn trigger_to_undeclared_target_is_unknown_state() {
        let mut fsm = Fsm::from_json(&json!({
            "initial": "a",
            "states": { "a": { "transitions": { "go": "ghost" } } }
        }))
        .unwrap();

        let result = fsm.trigger("go");
        assert_eq!(
            result.unwrap_err(),
            FsmError::UnknownState {
                state: "ghost".to_string()
            }
        );
        assert_eq!(fsm.get_state(), "a");
    }

    #[test]
    fn undo_and_redo_navigate_history() {
        let mut fsm = player();
        fsm.trigger("play").unwrap();

        assert!(fsm.undo());
        assert_eq!(fsm.get_state(), "stopped");
        assert!(!fsm.undo());

        assert!(fsm.redo());
        assert_eq!(fsm.get_state(), "playing");
        assert!(!fsm.redo());
    }

    #[test]
    fn new_transition_after_undo_drops_redo_branch() {
        let mut fsm = player();
        fsm.trigger("play").unwrap();
        fsm.trigger("pause").unwrap();
        fsm.undo();
        fsm.undo();

        fsm.change_state("paused").unwrap();

        assert_eq!(fsm.history().path(), vec!["stopped", "paused"]);
        assert!(!fsm.redo());
    }

    #[test]
    fn trigger_uses_state_under_cursor() {
        let mut fsm = player();
        fsm.trigger("play").unwrap();
        fsm.undo();

        // "stopped" is active again, so "pause" is not available.
        assert!(matches!(
            fsm.trigger("pause"),
            Err(FsmError::IllegalEvent { .. })
        ));
        assert!(fsm.can_redo());
    }

    #[test]
    fn reset_returns_to_initial_with_fresh_history() {
        let mut fsm = player();
        fsm.trigger("play").unwrap();
        fsm.trigger("pause").unwrap();

        fsm.reset().unwrap();

        assert_eq!(fsm.get_state(), "stopped");
        assert_eq!(fsm.history().path(), vec!["stopped"]);
        assert!(!fsm.can_undo());
        assert!(!fsm.can_redo());
    }

    #[test]
    fn clear_history_keeps_current_state() {
        let mut fsm = player();
        fsm.trigger("play").unwrap();
        fsm.trigger("pause").unwrap();
        fsm.undo();

        fsm.clear_history().unwrap();

        assert_eq!(fsm.get_state(), "playing");
        assert_eq!(fsm.history().len(), 1);
        assert!(!fsm.undo());
        assert!(!fsm.redo());
    }

    #[test]
    fn get_states_lists_all_in_order() {
        let fsm = player();
        assert_eq!(fsm.get_states(None), vec!["stopped", "playing", "paused"]);
        assert_eq!(fsm.states(), fsm.get_states(None));
    }

    #[test]
    fn get_states_filters_by_event() {
        let fsm = player();
        assert_eq!(fsm.get_states(Some("play")), vec!["stopped", "paused"]);
        assert_eq!(fsm.states_with_event("stop"), vec!["playing", "paused"]);
        assert!(fsm.get_states(Some("eject")).is_empty());
    }

    #[test]
    fn available_events_follow_active_state() {
        let mut fsm = player();
        assert_eq!(fsm.available_events(), vec!["play"]);
        fsm.trigger("play").unwrap();
        assert_eq!(fsm.available_events(), vec!["pause", "stop"]);
    }

    #[test]
    fn strict_mode_rejects_dangling_targets() {
        let config = MachineConfig::from_json(&json!({
            "initial": "a",
            "states": { "a": { "transitions": { "go": "ghost" } } }
        }))
        .unwrap();

        assert!(Fsm::with_mode(config.clone(), ValidationMode::Lazy).is_ok());
        assert!(matches!(
            Fsm::with_mode(config, ValidationMode::Strict),
            Err(FsmError::Configuration { .. })
        ));
    }

    #[test]
    fn engines_have_distinct_ids() {
        assert_ne!(player().id(), player().id());
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Fsm>();
    }
}
