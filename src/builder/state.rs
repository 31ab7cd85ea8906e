//! Builder for a single state's transition table.

use crate::config::{StateConfig, TransitionRule};

/// Builder for one named state with a fluent API.
pub struct StateBuilder {
    name: String,
    transitions: Vec<TransitionRule>,
}

impl StateBuilder {
    /// Create a builder for a state with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: Vec::new(),
        }
    }

    /// Add an event → target rule. Declaring the same event again replaces
    /// the earlier target, keeping its position in the table.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        let event = event.into();
        let target = target.into();
        match self.transitions.iter_mut().find(|rule| rule.event == event) {
            Some(rule) => rule.target = target,
            None => self.transitions.push(TransitionRule { event, target }),
        }
        self
    }

    /// Build the state definition. Cannot fail; structural validation
    /// happens when the surrounding configuration is built.
    pub fn build(self) -> StateConfig {
        StateConfig {
            name: self.name,
            transitions: self.transitions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_adds_rules_in_order() {
        let state = StateBuilder::new("playing")
            .on("pause", "paused")
            .on("stop", "stopped")
            .build();

        assert_eq!(state.name, "playing");
        assert_eq!(state.target_for("pause"), Some("paused"));
        assert_eq!(state.target_for("stop"), Some("stopped"));
        assert_eq!(state.transitions.len(), 2);
    }

    #[test]
    fn on_replaces_an_existing_event_in_place() {
        let state = StateBuilder::new("a")
            .on("go", "b")
            .on("halt", "c")
            .on("go", "d")
            .build();

        assert_eq!(state.target_for("go"), Some("d"));
        assert_eq!(state.transitions[0].event, "go");
        assert_eq!(state.transitions.len(), 2);
    }

    #[test]
    fn builds_a_state_with_no_transitions() {
        let state = StateBuilder::new("end").build();

        assert!(state.transitions.is_empty());
        assert!(!state.handles("anything"));
    }
}
