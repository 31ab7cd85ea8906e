//! Builder for assembling configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::config::{Configuration, StateConfig};

/// Builder for constructing a [`Configuration`] with a fluent API.
pub struct ConfigBuilder {
    initial: Option<String>,
    states: Vec<StateConfig>,
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
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Add a state.
    pub fn state(mut self, state: StateBuilder) -> Self {
        self.states.push(state.build());
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: Vec<StateBuilder>) -> Self {
        self.states.extend(states.into_iter().map(StateBuilder::build));
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state is missing or the assembled
    /// structure fails validation.
    pub fn build(self) -> Result<Configuration, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(Configuration::new(initial, self.states)?)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
