//! Up-front configuration checks using Validation.

use crate::core::MachineConfig;
use crate::machine::FsmError;
use crate::validation::violations::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// How much of a configuration is checked at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Only the initial state is checked (by the first reset). Transition
    /// targets are checked when the transition is taken.
    #[default]
    Lazy,

    /// Every transition target is checked before the engine is built.
    Strict,
}

/// Check the whole configuration, accumulating ALL violations.
pub fn validate_config(config: &MachineConfig) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

    if config.states.is_empty() {
        checks.push(Validation::fail(ConfigViolation::NoStates));
    }

    let initial = if config.has_state(&config.initial) {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::UnknownInitial {
            state: config.initial.clone(),
        })
    };
    checks.push(initial);

    for (from, def) in &config.states {
        for (event, target) in &def.transitions {
            if !config.has_state(target) {
                checks.push(Validation::fail(ConfigViolation::UnknownTarget {
                    from: from.clone(),
                    event: event.clone(),
                    target: target.clone(),
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Run [`validate_config`] and fold any violations into one error.
pub fn check_config(config: &MachineConfig) -> Result<(), FsmError> {
    match validate_config(config) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(violations) => {
            let reason = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!(violations = violations.len(), "configuration rejected: {}", reason);
            Err(FsmError::Configuration { reason })
        }
    }
}
