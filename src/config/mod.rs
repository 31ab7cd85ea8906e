//! Machine configuration: states and their event-triggered transitions.
//!
//! A [`Configuration`] is assembled once, validated, and never mutated by
//! the machine that owns it. States keep their declaration order, which is
//! the order all name listings are reported in.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur while assembling or parsing a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration declares no states")]
    NoStates,

    #[error("Duplicate state name '{0}'")]
    DuplicateState(String),

    #[error("Initial state '{0}' is not a declared state")]
    UnknownInitialState(String),

    #[error("Malformed configuration JSON: {0}")]
    Json(String),
}

/// One entry of a state's transition table: `event` moves the machine to
/// `target`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionRule {
    pub event: String,
    pub target: String,
}

impl TransitionRule {
    pub fn new(event: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            target: target.into(),
        }
    }
}

/// A named state together with its transition table.
///
/// Rules keep declaration order; lookups return the first rule matching an
/// event.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StateConfig {
    pub name: String,
    pub transitions: Vec<TransitionRule>,
}

impl StateConfig {
    /// Create a state with an empty transition table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: Vec::new(),
        }
    }

    /// The state this event leads to, if the table has an entry for it.
    pub fn target_for(&self, event: &str) -> Option<&str> {
        self.transitions
            .iter()
            .find(|rule| rule.event == event)
            .map(|rule| rule.target.as_str())
    }

    /// Whether the table has an entry for this event.
    pub fn handles(&self, event: &str) -> bool {
        self.target_for(event).is_some()
    }
}

/// Raw deserialization shape; promoted to [`Configuration`] through the
/// same validation as [`Configuration::new`].
#[derive(Deserialize)]
struct RawConfiguration {
    initial: String,
    states: Vec<StateConfig>,
}

impl TryFrom<RawConfiguration> for Configuration {
    type Error = ConfigError;

    fn try_from(raw: RawConfiguration) -> Result<Self, Self::Error> {
        Configuration::new(raw.initial, raw.states)
    }
}

/// Validated machine configuration: the initial state plus every declared
/// state and its transition table.
///
/// Invariants held by construction: at least one state, state names
/// unique, `initial` names a declared state. Transition *targets* are not
/// checked here; a rule may point at an undeclared state, and the error
/// surfaces when the machine attempts that change.
///
/// # Example
///
/// ```rust
/// use rewind::{Configuration, StateConfig, TransitionRule};
///
/// let config = Configuration::new(
///     "off",
///     vec![
///         StateConfig {
///             name: "off".into(),
///             transitions: vec![TransitionRule::new("toggle", "on")],
///         },
///         StateConfig {
///             name: "on".into(),
///             transitions: vec![TransitionRule::new("toggle", "off")],
///         },
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(config.initial(), "off");
/// assert_eq!(config.state_names(), vec!["off", "on"]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawConfiguration")]
pub struct Configuration {
    initial: String,
    states: Vec<StateConfig>,
}

impl Configuration {
    /// Assemble a configuration, validating its structure.
    pub fn new(
        initial: impl Into<String>,
        states: Vec<StateConfig>,
    ) -> Result<Self, ConfigError> {
        let initial = initial.into();

        if states.is_empty() {
            return Err(ConfigError::NoStates);
        }

        let mut seen = HashSet::new();
        for state in &states {
            if !seen.insert(state.name.as_str()) {
                return Err(ConfigError::DuplicateState(state.name.clone()));
            }
        }

        if !states.iter().any(|state| state.name == initial) {
            return Err(ConfigError::UnknownInitialState(initial));
        }

        Ok(Self { initial, states })
    }

    /// Parse a configuration from JSON, applying the same validation as
    /// [`Configuration::new`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::Configuration;
    ///
    /// let config = Configuration::from_json(
    ///     r#"{
    ///         "initial": "off",
    ///         "states": [
    ///             { "name": "off", "transitions": [{ "event": "toggle", "target": "on" }] },
    ///             { "name": "on", "transitions": [{ "event": "toggle", "target": "off" }] }
    ///         ]
    ///     }"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.initial(), "off");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfiguration =
            serde_json::from_str(json).map_err(|err| ConfigError::Json(err.to_string()))?;
        raw.try_into()
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|err| ConfigError::Json(err.to_string()))
    }

    /// Name of the starting state.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// All declared states, in declaration order.
    pub fn states(&self) -> &[StateConfig] {
        &self.states
    }

    /// Look up a state by name.
    pub fn state(&self, name: &str) -> Option<&StateConfig> {
        self.states.iter().find(|state| state.name == name)
    }

    /// Whether a state with this name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.state(name).is_some()
    }

    /// Every state name, in declaration order.
    pub fn state_names(&self) -> Vec<&str> {
        self.states.iter().map(|state| state.name.as_str()).collect()
    }

    /// Names of the states whose table has an entry for `event`, in
    /// declaration order.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.states
            .iter()
            .filter(|state| state.handles(event))
            .map(|state| state.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_states() -> Vec<StateConfig> {
        vec![
            StateConfig {
                name: "stopped".into(),
                transitions: vec![TransitionRule::new("play", "playing")],
            },
            StateConfig {
                name: "playing".into(),
                transitions: vec![
                    TransitionRule::new("pause", "paused"),
                    TransitionRule::new("stop", "stopped"),
                ],
            },
            StateConfig {
                name: "paused".into(),
                transitions: vec![
                    TransitionRule::new("play", "playing"),
                    TransitionRule::new("stop", "stopped"),
                ],
            },
        ]
    }

    #[test]
    fn new_rejects_empty_states() {
        let result = Configuration::new("stopped", Vec::new());
        assert!(matches!(result, Err(ConfigError::NoStates)));
    }

    #[test]
    fn new_rejects_duplicate_state_names() {
        let result = Configuration::new(
            "a",
            vec![StateConfig::new("a"), StateConfig::new("a")],
        );
        assert!(matches!(result, Err(ConfigError::DuplicateState(name)) if name == "a"));
    }

    #[test]
    fn new_rejects_unknown_initial_state() {
        let result = Configuration::new("missing", player_states());
        assert!(
            matches!(result, Err(ConfigError::UnknownInitialState(name)) if name == "missing")
        );
    }

    #[test]
    fn dangling_transition_targets_are_allowed() {
        // Targets are checked at change time, not here.
        let config = Configuration::new(
            "a",
            vec![StateConfig {
                name: "a".into(),
                transitions: vec![TransitionRule::new("go", "nowhere")],
            }],
        );
        assert!(config.is_ok());
    }

    #[test]
    fn state_lookup_finds_declared_states() {
        let config = Configuration::new("stopped", player_states()).unwrap();

        assert!(config.contains("playing"));
        assert!(!config.contains("rewinding"));
        assert_eq!(
            config.state("playing").unwrap().target_for("pause"),
            Some("paused")
        );
        assert_eq!(config.state("playing").unwrap().target_for("eject"), None);
    }

    #[test]
    fn state_names_keep_declaration_order() {
        let config = Configuration::new("stopped", player_states()).unwrap();
        assert_eq!(config.state_names(), vec!["stopped", "playing", "paused"]);
    }

    #[test]
    fn states_handling_filters_in_declaration_order() {
        let config = Configuration::new("stopped", player_states()).unwrap();

        assert_eq!(config.states_handling("play"), vec!["stopped", "paused"]);
        assert_eq!(config.states_handling("stop"), vec!["playing", "paused"]);
        assert!(config.states_handling("eject").is_empty());
    }

    #[test]
    fn json_roundtrip_preserves_configuration() {
        let config = Configuration::new("stopped", player_states()).unwrap();

        let json = config.to_json().unwrap();
        let parsed = Configuration::from_json(&json).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn from_json_applies_structural_validation() {
        let result = Configuration::from_json(
            r#"{
                "initial": "a",
                "states": [
                    { "name": "a", "transitions": [] },
                    { "name": "a", "transitions": [] }
                ]
            }"#,
        );
        assert!(matches!(result, Err(ConfigError::DuplicateState(name)) if name == "a"));
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let result = Configuration::from_json("not json at all");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn deserialize_funnels_through_validation() {
        // Direct serde use must not bypass Configuration::new.
        let result: Result<Configuration, _> = serde_json::from_str(
            r#"{ "initial": "ghost", "states": [{ "name": "a", "transitions": [] }] }"#,
        );
        assert!(result.is_err());
    }
}
