//! Builder API for ergonomic configuration construction.
//!
//! This module provides fluent builders and the [`states!`](crate::states)
//! macro for declaring configurations with minimal boilerplate. All
//! structural validation is deferred to [`Configuration::new`], so every
//! construction path enforces the same invariants.
//!
//! [`Configuration::new`]: crate::config::Configuration::new

pub mod config;
pub mod error;
pub mod macros;
pub mod state;

pub use config::ConfigBuilder;
pub use error::BuildError;
pub use state::StateBuilder;

/// Start building a state. Shorthand for [`StateBuilder::new`].
///
/// # Example
///
/// ```
/// use rewind::builder::{state, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .initial("off")
///     .state(state("off").on("toggle", "on"))
///     .state(state("on").on("toggle", "off"))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial(), "off");
/// ```
pub fn state(name: impl Into<String>) -> StateBuilder {
    StateBuilder::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_helper_starts_a_builder() {
        let built = state("idle").on("work", "busy").build();

        assert_eq!(built.name, "idle");
        assert_eq!(built.target_for("work"), Some("busy"));
    }
}
